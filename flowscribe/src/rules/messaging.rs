use crate::constants::{get_qualified_receive_re, get_receive_re, get_send_re};

use super::StatementRule;

fn strip_address_of(argument: &str) -> String {
    argument.trim().replace('&', "").trim().to_owned()
}

/// `RcvMESG(A, B)` without the `RBMESG_` prefix.
pub struct ReceiveMessageRule;

impl StatementRule for ReceiveMessageRule {
    fn name(&self) -> &'static str {
        "receive_message"
    }

    fn apply(&self, statement: &str) -> Option<String> {
        // The qualified form is owned by QualifiedReceiveRule.
        if statement.contains("RBMESG_RcvMESG") {
            return None;
        }
        let captures = get_receive_re().captures(statement)?;
        let target = strip_address_of(&captures[1]);
        let source = captures[2].trim();
        Some(format!(
            "Receive the value from {source} and store it in {target}"
        ))
    }
}

/// `RBMESG_RcvMESG(A, B)`, with or without an address-of marker on `A`.
pub struct QualifiedReceiveRule;

impl StatementRule for QualifiedReceiveRule {
    fn name(&self) -> &'static str {
        "qualified_receive"
    }

    fn apply(&self, statement: &str) -> Option<String> {
        let captures = get_qualified_receive_re().captures(statement)?;
        let target = strip_address_of(&captures[1]);
        let source = captures[2].trim();
        Some(format!(
            "Receive the value from {source} and store it in {target}"
        ))
    }
}

/// `RBMESG_SendMESG(A, B)`.
pub struct SendMessageRule;

impl StatementRule for SendMessageRule {
    fn name(&self) -> &'static str {
        "send_message"
    }

    fn apply(&self, statement: &str) -> Option<String> {
        let captures = get_send_re().captures(statement)?;
        let interface = captures[1].trim();
        let value = captures[2].trim();
        Some(format!(
            "Update the interface {interface} with the value from {value}"
        ))
    }
}
