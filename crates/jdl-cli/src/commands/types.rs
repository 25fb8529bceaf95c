//! Implementation of the `jdl types` command.

use jdl_core::application::{CatalogService, TypeInfo};
use tracing::instrument;

use crate::{
    cli::{TypesArgs, TypesFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: TypesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let database = super::resolve_database(args.database, &config)?;
    let types = CatalogService::new().types(database);

    match args.format {
        TypesFormat::Table => {
            let family = types.first().map(|t| t.family.as_str()).unwrap_or_default();
            output.header(&format!("Field types for {database} ({family}):"))?;
            for line in table_rows(&types) {
                output.print(&line)?;
            }
        }

        TypesFormat::List => {
            let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
            output.data(&names.join("\n"))?;
        }

        TypesFormat::Json => {
            let json = serde_json::to_string_pretty(&types).map_err(|e| CliError::InvalidInput {
                message: format!("Failed to serialise type catalog: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn table_rows(types: &[TypeInfo]) -> Vec<String> {
    let width = types.iter().map(|t| t.name.len()).max().unwrap_or(0);
    types
        .iter()
        .map(|t| {
            let validations = if t.validations.is_empty() {
                "-".to_string()
            } else {
                t.validations.join(", ")
            };
            format!("  {:<width$}  {validations}", t.name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdl_core::domain::DatabaseType;

    #[test]
    fn table_rows_are_aligned() {
        let types = CatalogService::new().types(DatabaseType::Cassandra);
        let rows = table_rows(&types);
        assert_eq!(rows.len(), types.len());

        let column = rows[0].find("required").unwrap();
        assert!(rows.iter().all(|r| r.find("required") == Some(column)));
    }

    #[test]
    fn string_row_lists_its_validations() {
        let types = CatalogService::new().types(DatabaseType::Sql);
        let rows = table_rows(&types);
        let string_row = rows.iter().find(|r| r.trim_start().starts_with("String ")).unwrap();
        assert!(string_row.ends_with("required, unique, minlength, maxlength, pattern"));
    }
}
