//! Command handlers, one module per subcommand.

use jdl_adapters::{FileModelReader, LocalFilesystem};
use jdl_core::{application::ModelService, domain::DatabaseType};

use crate::{cli::Database, config::AppConfig, error::CliResult};

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod render;
pub mod types;

/// Model service over the local filesystem.
pub(crate) fn model_service() -> ModelService {
    ModelService::new(
        Box::new(FileModelReader::new()),
        Box::new(LocalFilesystem::new()),
    )
}

/// The `--database` flag, or `defaults.database` from the config.
pub(crate) fn resolve_database(
    flag: Option<Database>,
    config: &AppConfig,
) -> CliResult<DatabaseType> {
    match flag {
        Some(db) => Ok(db.into()),
        None => config.default_database(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_database(Some(Database::Oracle), &config).unwrap(),
            DatabaseType::Oracle
        );
        assert_eq!(resolve_database(None, &config).unwrap(), DatabaseType::Sql);
    }
}
