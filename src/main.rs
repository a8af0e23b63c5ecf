use std::error::Error;
use std::io::{self, Write};

use anyhow::Result;

use doc_editor::config::Config;
use doc_editor::storage::{self, BackendKind, StorageError};
use doc_editor::{Document, Editor, Renderer};

fn main() -> Result<()> {
    // Parse configuration from command line and config files
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(path) = &config.project_config_path {
        log::debug!("Loaded config from {}", path.display());
    }

    let backend = storage::backend_for(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut document = Document::new();
    {
        let mut editor = Editor::new(&mut document, backend.as_ref());
        editor.add_text("Welcome to the document editor!");
        editor.add_image("pic1.png");
        editor.add_text("This is the end of the document.");

        // A failed save is reported, never fatal; rendering still happens
        match editor.save() {
            Ok(outcome) => writeln!(out, "{}", outcome)?,
            Err(err) => report_save_failure(&mut out, &err)?,
        }
    }

    Renderer::new(&document).render(&mut out)?;

    if config.backend == BackendKind::File {
        writeln!(out, "Check '{}' for file output!", config.output.display())?;
    }

    Ok(())
}

fn report_save_failure<W: Write>(out: &mut W, err: &StorageError) -> io::Result<()> {
    match err.source() {
        Some(cause) => log::error!("Save failed: {}: {}", err, cause),
        None => log::error!("Save failed: {}", err),
    }
    match err {
        StorageError::ResourceOpen { .. } => {
            writeln!(out, "[FileStorage] Error opening file for writing!")
        }
        StorageError::Write { .. } => writeln!(out, "[FileStorage] Error writing document!"),
    }
}
