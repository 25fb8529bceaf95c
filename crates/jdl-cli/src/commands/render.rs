//! Implementation of the `jdl render` command.

use std::io::IsTerminal as _;
use std::path::Path;

use chrono::Local;
use tracing::{debug, instrument};

use jdl_core::domain::{DatabaseType, JdlObject};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(model = %args.model.display()))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::model_service();
    let object = service.load(&args.model)?;

    if let Some(db) = args.database {
        let database = DatabaseType::from(db);
        let report = service.check(&object, database);
        if !report.is_clean() {
            for issue in &report.issues {
                output.error(&issue.to_string())?;
            }
            return Err(CliError::CheckFailed {
                issues: report.issue_count(),
                database: database.to_string(),
            });
        }
        debug!(%database, "Model passed the check");
    }

    let Some(path) = args.output else {
        output.data(&service.render(&object))?;
        return Ok(());
    };

    let overwrite = path.exists() && (args.force || args.yes || confirm_overwrite(&path)?);
    let header = (config.render.header && !args.no_header).then(generated_header);

    service
        .export_with_header(&object, &path, overwrite, header.as_deref())
        .with_cli_context(|| format!("exporting {}", path.display()))?;

    output.success(&summary(&object, &path))?;
    Ok(())
}

/// First line of exported files.
fn generated_header() -> String {
    format!(
        "// Generated by jdl {} on {}",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d")
    )
}

fn summary(object: &JdlObject, path: &Path) -> String {
    format!(
        "Rendered {} entities and {} enums to {}",
        object.entity_count(),
        object.enum_count(),
        path.display()
    )
}

/// Ask before replacing `path`. Without a terminal there is nobody to ask.
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::OutputExists {
            path: path.to_path_buf(),
        });
    }

    let prompt = format!("{} already exists. Overwrite?", path.display());
    if ask(&prompt)? {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(feature = "interactive")]
fn ask(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation input".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn ask(prompt: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdl_core::domain::{EntityAttributes, ModelDocument};

    #[test]
    fn header_names_the_tool_and_version() {
        let header = generated_header();
        assert!(header.starts_with(&format!(
            "// Generated by jdl {} on ",
            env!("CARGO_PKG_VERSION")
        )));
        // YYYY-MM-DD
        let date = header.rsplit(' ').next().unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn summary_counts_entities_and_enums() {
        let object = JdlObject::from_document(ModelDocument {
            entities: vec![EntityAttributes::named("Book")],
            enums: Vec::new(),
        })
        .unwrap();
        assert_eq!(
            summary(&object, Path::new("out/library.jdl")),
            "Rendered 1 entities and 0 enums to out/library.jdl"
        );
    }
}
