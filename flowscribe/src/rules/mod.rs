//! Statement classification rule chain.
//!
//! Each rule is a pure mapping from a comment-stripped statement to
//! `Some(label)` or `None`. Rules are evaluated in a fixed order and the
//! first match wins; new macro forms extend the chain without touching the
//! graph builder.

use crate::constants::{get_banner_re, get_block_comment_re, get_line_comment_re};

mod general;
mod locals;
mod messaging;

pub use general::GeneralStatementRule;
pub use locals::LocalDefinitionRule;
pub use messaging::{QualifiedReceiveRule, ReceiveMessageRule, SendMessageRule};

/// A single classification rule.
///
/// Rules are stateless and side-effect-free, so one chain instance may be
/// shared across threads.
pub trait StatementRule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Maps a comment-stripped statement to a semantic label, or `None`
    /// when this rule does not apply.
    fn apply(&self, statement: &str) -> Option<String>;
}

/// Ordered rule chain turning raw source lines into node labels.
pub struct Classifier {
    rules: Vec<Box<dyn StatementRule>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Builds the default chain, highest priority first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ReceiveMessageRule),
                Box::new(QualifiedReceiveRule),
                Box::new(SendMessageRule),
                Box::new(LocalDefinitionRule),
                Box::new(GeneralStatementRule),
            ],
        }
    }

    /// Classifies one raw source line.
    ///
    /// Comment banner lines are dropped outright; `//` and same-line
    /// `/* ... */` spans are stripped before the rules run. Returns `None`
    /// when the statement should not produce a node.
    #[must_use]
    pub fn classify(&self, raw_line: &str) -> Option<String> {
        let trimmed = raw_line.trim();
        if is_comment_banner(trimmed) {
            return None;
        }

        let clean = strip_comments(trimmed);
        if clean.is_empty() {
            return None;
        }

        self.rules.iter().find_map(|rule| rule.apply(&clean))
    }
}

/// Removes `//` comments and same-line `/* ... */` spans.
#[must_use]
pub fn strip_comments(statement: &str) -> String {
    let without_line = get_line_comment_re().replace(statement, "");
    let without_block = get_block_comment_re().replace_all(&without_line, "");
    without_block.trim().to_owned()
}

/// Detects standalone comment banner lines (`/*...`, `* ...`, `...*/`).
fn is_comment_banner(line: &str) -> bool {
    line.starts_with("/*")
        || line.starts_with('*')
        || line.ends_with("*/")
        || get_banner_re().is_match(line)
}
