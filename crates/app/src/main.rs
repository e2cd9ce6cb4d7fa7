use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "em", version, about = "A line-oriented text editor")]
struct Args {
    /// File to edit. Remembered as the default for `w` even if it does not exist yet.
    filename: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the editor protocol only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("EM_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut input = io::input::ReaderLines::new(std::io::stdin().lock());
    let mut output = std::io::stdout().lock();
    let mut console = editor_state::console::Console::new(&mut input, &mut output);
    let mut editor = editor_state::editor::Editor::new();

    if let Some(path) = &args.filename {
        editor.open_startup_file(path, &mut console);
        flush(&mut console);
    }

    loop {
        let line = match console.read_command() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                // A broken stdin cannot deliver further commands.
                editor.report(editor_core::errors::EditorError::Input(error), &mut console);
                flush(&mut console);
                break;
            }
        };

        let outcome = editor.execute(&line, &mut console);
        flush(&mut console);

        if outcome == editor_state::commands::Outcome::Quit {
            break;
        }
    }

    tracing::debug!("session ended");

    Ok(())
}

fn flush(console: &mut editor_state::console::Console<'_>) {
    if let Err(error) = console.flush() {
        tracing::warn!(%error, "cannot flush output");
    }
}
