//! Names that generated code cannot use as identifiers.
//!
//! Entities, fields, and enumerations become Java classes, members, and
//! constants in the generated backend, so none of them may be a Java keyword
//! or literal. The comparison is case-insensitive: `Class` and `CLASS` are
//! rejected the same as `class`.

/// Java keywords and literals, upper-cased.
pub static RESERVED_KEYWORDS: &[&str] = &[
    "ABSTRACT",
    "ASSERT",
    "BOOLEAN",
    "BREAK",
    "BYTE",
    "CASE",
    "CATCH",
    "CHAR",
    "CLASS",
    "CONST",
    "CONTINUE",
    "DEFAULT",
    "DO",
    "DOUBLE",
    "ELSE",
    "ENUM",
    "EXTENDS",
    "FALSE",
    "FINAL",
    "FINALLY",
    "FLOAT",
    "FOR",
    "GOTO",
    "IF",
    "IMPLEMENTS",
    "IMPORT",
    "INSTANCEOF",
    "INT",
    "INTERFACE",
    "LONG",
    "NATIVE",
    "NEW",
    "NULL",
    "PACKAGE",
    "PRIVATE",
    "PROTECTED",
    "PUBLIC",
    "RETURN",
    "SHORT",
    "STATIC",
    "STRICTFP",
    "SUPER",
    "SWITCH",
    "SYNCHRONIZED",
    "THIS",
    "THROW",
    "THROWS",
    "TRANSIENT",
    "TRUE",
    "TRY",
    "VOID",
    "VOLATILE",
    "WHILE",
];

/// Whether `name` is a reserved keyword. Empty names are never reserved.
pub fn is_reserved(name: &str) -> bool {
    !name.is_empty()
        && RESERVED_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_keywords_are_reserved() {
        assert!(is_reserved("class"));
        assert!(is_reserved("Class"));
        assert!(is_reserved("SYNCHRONIZED"));
    }

    #[test]
    fn ordinary_names_are_not_reserved() {
        assert!(!is_reserved("myField"));
        assert!(!is_reserved("classification"));
        assert!(!is_reserved(""));
    }

    #[test]
    fn table_is_upper_case() {
        assert!(
            RESERVED_KEYWORDS
                .iter()
                .all(|k| k.chars().all(|c| c.is_ascii_uppercase()))
        );
    }
}
