use crate::constants::get_local_decl_re;

use super::StatementRule;

/// Local variable declarations of the shape `Type Name;` or `Type Name[n];`.
///
/// Only the type and name survive into the label; array sizes and trailing
/// comments are dropped.
pub struct LocalDefinitionRule;

impl StatementRule for LocalDefinitionRule {
    fn name(&self) -> &'static str {
        "local_definition"
    }

    fn apply(&self, statement: &str) -> Option<String> {
        let captures = get_local_decl_re().captures(statement.trim())?;
        let type_name = &captures[2];
        let var_name = &captures[3];
        Some(format!("{type_name} {var_name}"))
    }
}
