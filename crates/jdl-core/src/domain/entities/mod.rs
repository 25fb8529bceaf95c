pub mod entity;
pub mod enumeration;
pub mod field;
pub mod object;
pub mod validation;

pub use crate::domain::DomainError;
pub use entity::{EntityAttributes, JdlEntity};
pub use enumeration::{EnumAttributes, JdlEnum};
pub use field::{FieldAttributes, JdlField, JdlFieldBuilder};
pub use object::{JdlObject, ModelDocument};
pub use validation::{Bound, JdlValidation, ValidationAttributes};

/// Render a JDL doc comment: `/**\n * line\n */\n`.
pub(crate) fn comment_block(comment: &str) -> String {
    let mut block = String::from("/**\n");
    for line in comment.lines() {
        if line.is_empty() {
            block.push_str(" *\n");
        } else {
            block.push_str(" * ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block.push_str(" */\n");
    block
}

#[cfg(test)]
mod tests {
    use super::comment_block;

    #[test]
    fn comment_block_single_line() {
        assert_eq!(comment_block("comment"), "/**\n * comment\n */\n");
    }

    #[test]
    fn comment_block_multi_line() {
        assert_eq!(comment_block("a\n\nb"), "/**\n * a\n *\n * b\n */\n");
    }
}
