use std::io::IsTerminal as _;

use anyhow::Result;
use clap::Parser;
use gitdotplan::App;
use gitdotplan::Config;
use gitdotplan::args::UpdateArgs;
use gitdotplan::commands::ContentSource;
use gitdotplan::logging::setup_logging;
use gitdotplan::ops::editor::RealEditor;
use gitdotplan::ops::git::RealGit;

#[tokio::main]
async fn main() -> Result<()> {
    let args = UpdateArgs::parse();
    setup_logging()?;

    let mut config = Config::load()?;
    if let Some(editor) = &args.editor {
        config.editor = editor.clone();
    }
    let editor = RealEditor::new(config.editor.clone());
    let app = App::new(config, RealGit, editor);

    // Piped input replaces the file; a terminal means the user wants an editor
    let source = if std::io::stdin().is_terminal() {
        ContentSource::Editor
    } else {
        ContentSource::Piped(tokio::io::stdin())
    };

    app.cmd_update(&args, source, &mut std::io::stdout()).await
}
