use crate::constants::{get_whitespace_re, MAX_STATEMENT_LABEL_LEN};

use super::StatementRule;

/// Fallback rule for statements no specialized rule claimed.
///
/// Known unqualified messaging and port-write calls collapse to short fixed
/// labels. `if (...)`-leading lines are kept verbatim because they become
/// decision labels upstream and must not be truncated. Everything else is
/// length-limited for readability.
pub struct GeneralStatementRule;

impl StatementRule for GeneralStatementRule {
    fn name(&self) -> &'static str {
        "general_statement"
    }

    fn apply(&self, statement: &str) -> Option<String> {
        let stripped = statement.replace(';', "");
        let clean = get_whitespace_re()
            .replace_all(stripped.trim(), " ")
            .into_owned();

        if clean.contains("RcvMESG") && !clean.contains("RBMESG_RcvMESG") {
            return Some("Receive message".to_owned());
        }
        if clean.contains("SendMESG") && !clean.contains("RBMESG_SendMESG") {
            return Some("Send message".to_owned());
        }
        if clean.contains("RBMICSYS_WritePort") || clean.contains("WritePort") {
            return Some("Write to port".to_owned());
        }

        if clean.starts_with("if") {
            return Some(clean);
        }

        if clean.is_empty() {
            return None;
        }

        if clean.chars().count() > MAX_STATEMENT_LABEL_LEN {
            let cut: String = clean.chars().take(MAX_STATEMENT_LABEL_LEN - 3).collect();
            return Some(format!("{cut}..."));
        }

        Some(clean)
    }
}
