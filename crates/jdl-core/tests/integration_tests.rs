//! Integration tests for the public jdl-core API.

use jdl_core::domain::{
    DomainError, ErrorKind, has_validation, is_cassandra_type, is_common_db_type,
    reserved_keywords::RESERVED_KEYWORDS,
};
use jdl_core::prelude::*;
use serde_json::json;

fn field_attrs(value: serde_json::Value) -> FieldAttributes {
    serde_json::from_value(value).unwrap()
}

#[test]
fn attribute_bags_from_json_build_verbatim() {
    let attrs = field_attrs(json!({
        "name": "isbn",
        "type": "String",
        "comment": "International Standard Book Number",
        "validations": [
            { "name": "pattern", "value": "^[0-9-]+$" },
            { "name": "unique" },
            { "name": "minlength", "value": "10" }
        ]
    }));
    let field = JdlField::new(attrs).unwrap();

    assert_eq!(field.name(), "isbn");
    assert_eq!(field.field_type(), "String");
    assert_eq!(field.comment(), Some("International Standard Book Number"));
    assert_eq!(
        field.validation(ValidationKind::MinLength),
        Some(&JdlValidation::MinLength(Bound::count(10)))
    );
    assert_eq!(
        field.to_string(),
        "/**\n * International Standard Book Number\n */\n\
         isbn String unique minlength(10) pattern(/^[0-9-]+$/)"
    );
}

#[test]
fn every_reserved_keyword_is_rejected_in_any_case() {
    for keyword in RESERVED_KEYWORDS {
        let lower = keyword.to_ascii_lowercase();
        let field = JdlField::new(FieldAttributes::new(lower.as_str(), "String"));
        assert_eq!(field.unwrap_err().kind(), ErrorKind::IllegalName, "{lower}");

        let jdl_enum = JdlEnum::new(EnumAttributes::named(*keyword));
        assert_eq!(jdl_enum.unwrap_err().kind(), ErrorKind::IllegalName, "{keyword}");
    }
}

#[test]
fn field_validity_predicate() {
    assert!(!JdlField::is_valid(&FieldAttributes::default()));
    assert!(!JdlField::is_valid(&field_attrs(json!({ "type": "String" }))));
    assert!(!JdlField::is_valid(&field_attrs(json!({ "name": "x" }))));
    assert!(!JdlField::is_valid(&FieldAttributes::new("class", "String")));
    assert!(!JdlField::is_valid(&field_attrs(json!({
        "name": "x",
        "type": "String",
        "validations": [{ "name": "min" }]
    }))));
    assert!(JdlField::is_valid(&FieldAttributes::new("myField", "String")));
}

#[test]
fn add_validation_without_value_is_invalid_object() {
    let mut field = JdlField::new(FieldAttributes::new("age", "Integer")).unwrap();
    let err = field
        .add_validation(ValidationAttributes::new("min"))
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidObject(_)));
    assert!(err.to_string().contains("No value"));
    assert_eq!(field.validation_count(), 0);
}

#[test]
fn enum_round_trip_text() {
    let language = JdlEnum::new(EnumAttributes {
        comment: Some("The language enumeration.".into()),
        ..EnumAttributes::named("Language").with_values(["FRENCH", "ENGLISH", "ICELANDIC"])
    })
    .unwrap();

    assert_eq!(
        language.to_string(),
        "/**\n * The language enumeration.\n */\nenum Language {\n  FRENCH,\n  ENGLISH,\n  ICELANDIC\n}"
    );
}

#[test]
fn enum_values_are_coerced_and_kept_in_order() {
    let mut status = JdlEnum::new(
        EnumAttributes::named("Status").with_values([json!("OPEN"), json!(2), json!(true)]),
    )
    .unwrap();
    status.add_value("OPEN").unwrap();

    assert_eq!(status.values(), ["OPEN", "2", "true", "OPEN"]);
    assert!(matches!(
        status.add_value(serde_json::Value::Null),
        Err(DomainError::NullPointer(_))
    ));
}

#[test]
fn type_oracle_treats_enumerations_asymmetrically() {
    let color = JdlEnum::new(EnumAttributes::named("Color").with_values(["RED"])).unwrap();

    assert!(is_common_db_type(&color).unwrap());
    assert!(!is_cassandra_type(&color).unwrap());
    assert!(matches!(is_common_db_type(""), Err(DomainError::NullPointer(_))));
}

#[test]
fn has_validation_requires_both_arguments() {
    assert!(matches!(
        has_validation("", "required"),
        Err(DomainError::NullPointer(_))
    ));
    assert!(matches!(
        has_validation("String", ""),
        Err(DomainError::NullPointer(_))
    ));
    assert!(has_validation("Blob", "minbytes").unwrap());
    assert!(!has_validation("Integer", "pattern").unwrap());
}

#[test]
fn model_checker_over_a_document() {
    let document: ModelDocument = serde_json::from_value(json!({
        "enums": [{ "name": "Genre", "values": ["FICTION", "ESSAY"] }],
        "entities": [{
            "name": "Book",
            "fields": [
                { "name": "genre", "type": "Genre" },
                { "name": "cover", "type": "Blob", "validations": [{ "name": "maxbytes", "value": 5000000 }] },
                { "name": "pages", "type": "Integer", "validations": [{ "name": "pattern", "value": "[0-9]+" }] }
            ]
        }]
    }))
    .unwrap();
    let object = JdlObject::from_document(document).unwrap();

    let sql_issues = ModelChecker::new(DatabaseType::Sql).check_all(&object);
    assert_eq!(sql_issues.len(), 1);
    assert_eq!(sql_issues[0].kind(), ErrorKind::WrongValidation);

    let cassandra_issues = ModelChecker::new(DatabaseType::Cassandra).check_all(&object);
    assert!(
        cassandra_issues
            .iter()
            .any(|issue| issue.to_string().contains("'genre'"))
    );
}
