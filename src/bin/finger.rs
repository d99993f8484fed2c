use anyhow::Result;
use clap::Parser;
use gitdotplan::App;
use gitdotplan::Config;
use gitdotplan::args::FingerArgs;
use gitdotplan::logging::setup_logging;
use gitdotplan::ops::git::RealGit;

#[tokio::main]
async fn main() -> Result<()> {
    let args = FingerArgs::parse();
    setup_logging()?;

    let config = Config::load_read_only()?;
    let app = App::new(config, RealGit, ());

    app.cmd_finger(&args, &mut std::io::stdout()).await
}
