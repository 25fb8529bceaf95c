//! Implementation of the `jdl check` command.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tracing::instrument;

use jdl_core::{application::CheckReport, domain::DatabaseType, error::JdlError};

use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let database = super::resolve_database(args.database, &config)?;
    let service = super::model_service();

    let models = if args.path.is_dir() {
        service.load_dir(&args.path)?
    } else {
        let object = service.load(&args.path)?;
        vec![(args.path, Ok(object))]
    };

    if models.is_empty() {
        output.warning("No model documents found")?;
        return Ok(());
    }

    let outcomes: Vec<(PathBuf, Outcome)> = models
        .into_iter()
        .map(|(path, loaded)| {
            let outcome = match loaded {
                Ok(object) => Outcome::Checked(service.check(&object, database)),
                Err(e) => Outcome::Failed(e),
            };
            (path, outcome)
        })
        .collect();

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&reports_json(&outcomes, database)).map_err(
            |e| CliError::InvalidInput {
                message: format!("Failed to serialise check report: {e}"),
                source: Some(Box::new(e)),
            },
        )?;
        output.data(&json)?;
    } else {
        for (path, outcome) in &outcomes {
            match outcome {
                Outcome::Checked(report) => print_report(&output, path, report)?,
                Outcome::Failed(e) => output.error(&format!("{}: {e}", path.display()))?,
            }
        }
    }

    let issues: usize = outcomes.iter().map(|(_, o)| o.issue_count()).sum();
    if issues > 0 {
        return Err(CliError::CheckFailed {
            issues,
            database: database.to_string(),
        });
    }
    Ok(())
}

/// Result of checking one discovered document.
enum Outcome {
    Checked(CheckReport),
    /// The document could not be read or built; counts as one issue.
    Failed(JdlError),
}

impl Outcome {
    fn issue_count(&self) -> usize {
        match self {
            Self::Checked(report) => report.issue_count(),
            Self::Failed(_) => 1,
        }
    }
}

fn print_report(output: &OutputManager, path: &Path, report: &CheckReport) -> CliResult<()> {
    let counts = format!(
        "{} entities, {} enums, {} fields",
        report.entities, report.enums, report.fields
    );

    if report.is_clean() {
        output.success(&format!(
            "{}: compatible with {} ({counts})",
            path.display(),
            report.database
        ))?;
    } else {
        output.warning(&format!(
            "{}: {} issue(s) for {} ({counts})",
            path.display(),
            report.issue_count(),
            report.database
        ))?;
        for issue in &report.issues {
            output.error(&format!("  {issue}"))?;
        }
    }
    Ok(())
}

fn reports_json(outcomes: &[(PathBuf, Outcome)], database: DatabaseType) -> Value {
    Value::Array(
        outcomes
            .iter()
            .map(|(path, outcome)| match outcome {
                Outcome::Failed(e) => json!({
                    "path": path.display().to_string(),
                    "database": database.as_str(),
                    "error": e.to_string(),
                }),
                Outcome::Checked(report) => json!({
                    "path": path.display().to_string(),
                    "database": report.database.as_str(),
                    "entities": report.entities,
                    "enums": report.enums,
                    "fields": report.fields,
                    "issues": report
                        .issues
                        .iter()
                        .map(|issue| json!({
                            "kind": issue.kind().as_str(),
                            "message": issue.to_string(),
                        }))
                        .collect::<Vec<_>>(),
                }),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdl_core::domain::DomainError;

    #[test]
    fn json_report_lists_issues() {
        let report = CheckReport {
            database: DatabaseType::Cassandra,
            entities: 1,
            enums: 0,
            fields: 1,
            issues: vec![DomainError::WrongType {
                entity: "Author".into(),
                field: "born".into(),
                field_type: "LocalDate".into(),
                database: "cassandra".into(),
            }],
        };

        let outcomes = [(PathBuf::from("library.toml"), Outcome::Checked(report))];
        let value = reports_json(&outcomes, DatabaseType::Cassandra);
        assert_eq!(value[0]["path"], "library.toml");
        assert_eq!(value[0]["database"], "cassandra");
        assert_eq!(value[0]["issues"].as_array().unwrap().len(), 1);
        assert_eq!(value[0]["issues"][0]["kind"], "WrongType");
    }

    #[test]
    fn load_failures_count_as_issues() {
        let failed = Outcome::Failed(JdlError::Domain(DomainError::IllegalName {
            context: "entity",
            name: "class".into(),
        }));
        assert_eq!(failed.issue_count(), 1);

        let outcomes = [(PathBuf::from("bad.toml"), failed)];
        let value = reports_json(&outcomes, DatabaseType::Sql);
        assert_eq!(value[0]["database"], "sql");
        assert!(value[0]["error"].as_str().unwrap().contains("class"));
        assert!(value[0].get("issues").is_none());
    }
}
