//! Model Service - load, check, render, and export JDL models.
//!
//! This service coordinates the model workflow:
//! 1. Read a model document through the `ModelReader` port
//! 2. Build the domain object (structural invariants)
//! 3. Check it against a database family (business rules)
//! 4. Render it to JDL text and write it through the `Filesystem` port

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModelReader},
    },
    domain::{DatabaseType, DomainError, JdlObject, ModelChecker},
    error::JdlResult,
};

/// Outcome of checking one model against a database family.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub database: DatabaseType,
    pub entities: usize,
    pub enums: usize,
    pub fields: usize,
    pub issues: Vec<DomainError>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Main model service.
pub struct ModelService {
    reader: Box<dyn ModelReader>,
    filesystem: Box<dyn Filesystem>,
}

impl ModelService {
    /// Create a new model service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use jdl_core::application::ModelService;
    ///
    /// let service = ModelService::new(
    ///     Box::new(reader),     // impl ModelReader
    ///     Box::new(filesystem), // impl Filesystem
    /// );
    /// let object = service.load("model.toml")?;
    /// ```
    pub fn new(reader: Box<dyn ModelReader>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { reader, filesystem }
    }

    /// Load one model document and build its domain object.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(&self, path: impl AsRef<Path>) -> JdlResult<JdlObject> {
        let path = path.as_ref();
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::ModelNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let document = self.reader.read(path)?;
        let object = JdlObject::from_document(document)?;
        info!(
            entities = object.entity_count(),
            enums = object.enum_count(),
            "Model loaded"
        );
        Ok(object)
    }

    /// Load every model document under `dir`.
    ///
    /// Each discovered path is paired with its own load result, so a
    /// document that fails to build is reported rather than dropped.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load_dir(
        &self,
        dir: impl AsRef<Path>,
    ) -> JdlResult<Vec<(PathBuf, JdlResult<JdlObject>)>> {
        let dir = dir.as_ref();
        if !self.filesystem.is_dir(dir) {
            return Err(ApplicationError::ModelNotFound {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let paths = self.reader.discover(dir)?;
        debug!(count = paths.len(), "Discovered model documents");

        let models = paths
            .into_iter()
            .map(|path| {
                let loaded = self.load(&path);
                if let Err(e) = &loaded {
                    warn!(path = %path.display(), error = %e, "Model failed to load");
                }
                (path, loaded)
            })
            .collect();
        Ok(models)
    }

    /// Check a model against a database family.
    #[instrument(skip_all, fields(database = %database))]
    pub fn check(&self, object: &JdlObject, database: DatabaseType) -> CheckReport {
        let issues = ModelChecker::new(database).check_all(object);
        if issues.is_empty() {
            info!("Model is compatible");
        } else {
            warn!(issues = issues.len(), "Model has compatibility issues");
        }

        CheckReport {
            database,
            entities: object.entity_count(),
            enums: object.enum_count(),
            fields: object.field_count(),
            issues,
        }
    }

    /// Render a model to canonical JDL text.
    pub fn render(&self, object: &JdlObject) -> String {
        object.to_string()
    }

    /// Write the rendered model to `path`.
    pub fn export(
        &self,
        object: &JdlObject,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> JdlResult<()> {
        self.export_with_header(object, path, overwrite, None)
    }

    /// Write the rendered model to `path`, preceded by `header` when given.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    /// Parent directories are created as needed.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), overwrite))]
    pub fn export_with_header(
        &self,
        object: &JdlObject,
        path: impl AsRef<Path>,
        overwrite: bool,
        header: Option<&str>,
    ) -> JdlResult<()> {
        let path = path.as_ref();
        if self.filesystem.exists(path) {
            if !overwrite {
                return Err(ApplicationError::OutputExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            warn!("Overwriting existing output");
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }

        let body = self.render(object);
        let content = match header {
            Some(header) => format!("{header}\n\n{body}"),
            None => body,
        };
        self.filesystem.write_file(path, &content)?;

        info!(bytes = content.len(), "Model exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockModelReader};
    use crate::domain::{EntityAttributes, FieldAttributes, ModelDocument};
    use crate::error::JdlError;

    fn document() -> ModelDocument {
        ModelDocument {
            entities: vec![EntityAttributes {
                fields: vec![FieldAttributes::new("born", "LocalDate")],
                ..EntityAttributes::named("Author")
            }],
            enums: Vec::new(),
        }
    }

    fn reader_returning(document: ModelDocument) -> MockModelReader {
        let mut reader = MockModelReader::new();
        reader.expect_read().returning(move |_| Ok(document.clone()));
        reader
    }

    fn existing_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs
    }

    #[test]
    fn load_builds_object() {
        let service = ModelService::new(Box::new(reader_returning(document())), Box::new(existing_fs()));
        let object = service.load("model.toml").unwrap();
        assert_eq!(object.entity_count(), 1);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        let service = ModelService::new(Box::new(MockModelReader::new()), Box::new(fs));
        assert!(matches!(
            service.load("missing.toml"),
            Err(JdlError::Application(ApplicationError::ModelNotFound { .. }))
        ));
    }

    #[test]
    fn load_surfaces_domain_errors() {
        let bad = ModelDocument {
            entities: vec![EntityAttributes::named("class")],
            enums: Vec::new(),
        };
        let service = ModelService::new(Box::new(reader_returning(bad)), Box::new(existing_fs()));
        assert!(matches!(
            service.load("model.toml"),
            Err(JdlError::Domain(DomainError::IllegalName { .. }))
        ));
    }

    #[test]
    fn load_dir_keeps_failures_with_their_path() {
        let mut reader = MockModelReader::new();
        reader
            .expect_discover()
            .returning(|_| Ok(vec![PathBuf::from("m/a.toml"), PathBuf::from("m/b.toml")]));
        reader
            .expect_read()
            .withf(|p| p.ends_with("a.toml"))
            .returning(|_| Ok(document()));
        reader
            .expect_read()
            .withf(|p| p.ends_with("b.toml"))
            .returning(|p| {
            Err(ApplicationError::ModelLoad {
                path: p.to_path_buf(),
                reason: "expected table".into(),
            }
            .into())
        });
        let mut fs = existing_fs();
        fs.expect_is_dir().return_const(true);

        let service = ModelService::new(Box::new(reader), Box::new(fs));
        let models = service.load_dir("m").unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].0, PathBuf::from("m/a.toml"));
        assert!(models[0].1.is_ok());
        assert_eq!(models[1].0, PathBuf::from("m/b.toml"));
        assert!(matches!(
            models[1].1,
            Err(JdlError::Application(ApplicationError::ModelLoad { .. }))
        ));
    }

    #[test]
    fn check_reports_issues_for_cassandra() {
        let service = ModelService::new(Box::new(MockModelReader::new()), Box::new(MockFilesystem::new()));
        let object = JdlObject::from_document(document()).unwrap();

        let report = service.check(&object, DatabaseType::Cassandra);
        assert!(!report.is_clean());
        assert_eq!(report.issue_count(), 1);
        assert_eq!(report.fields, 1);

        assert!(service.check(&object, DatabaseType::Sql).is_clean());
    }

    #[test]
    fn export_refuses_to_overwrite() {
        let service = ModelService::new(Box::new(MockModelReader::new()), Box::new(existing_fs()));
        let object = JdlObject::from_document(document()).unwrap();
        assert!(matches!(
            service.export(&object, "out/model.jdl", false),
            Err(JdlError::Application(ApplicationError::OutputExists { .. }))
        ));
    }

    #[test]
    fn export_creates_parent_and_writes_header() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p.to_str() == Some("out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path.to_str() == Some("out/model.jdl")
                    && content.starts_with("// header\n\nentity Author {")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ModelService::new(Box::new(MockModelReader::new()), Box::new(fs));
        let object = JdlObject::from_document(document()).unwrap();
        service
            .export_with_header(&object, "out/model.jdl", false, Some("// header"))
            .unwrap();
    }
}
