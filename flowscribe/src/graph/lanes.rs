use crate::constants::{get_endif_re, get_ifdef_re};
use crate::rules::Classifier;

/// One contiguous `#ifdef GUARD ... #endif` statement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBranchGroup {
    /// Guard name from the `#ifdef` directive.
    pub guard_name: String,
    /// Classified statement labels inside the guarded run, in order.
    pub statements: Vec<String>,
}

/// Scans the raw function text for preprocessor-guarded statement runs.
///
/// Guard tracking is flat: opening a new guard while one is open flushes the
/// current run and replaces it, so nested `#ifdef` produces sibling lanes,
/// not nested ones. Guarded lines pass through the classifier; runs that
/// yield no labels produce no group.
#[must_use]
pub fn extract_switch_lanes(raw_text: &str, classifier: &Classifier) -> Vec<ConditionalBranchGroup> {
    let mut groups = Vec::new();
    let mut current_guard: Option<String> = None;
    let mut current_statements: Vec<String> = Vec::new();

    fn flush(
        guard: &mut Option<String>,
        statements: &mut Vec<String>,
        groups: &mut Vec<ConditionalBranchGroup>,
    ) {
        if let Some(name) = guard.take() {
            if !statements.is_empty() {
                groups.push(ConditionalBranchGroup {
                    guard_name: name,
                    statements: std::mem::take(statements),
                });
            }
        }
        statements.clear();
    }

    for raw_line in raw_text.lines() {
        let line = raw_line.trim();

        if let Some(captures) = get_ifdef_re().captures(line) {
            flush(&mut current_guard, &mut current_statements, &mut groups);
            current_guard = Some(captures[1].to_owned());
            continue;
        }
        if get_endif_re().is_match(line) {
            flush(&mut current_guard, &mut current_statements, &mut groups);
            continue;
        }

        if current_guard.is_some() && !line.is_empty() && !line.starts_with('#') {
            if let Some(label) = classifier.classify(line) {
                current_statements.push(label);
            }
        }
    }
    flush(&mut current_guard, &mut current_statements, &mut groups);

    groups
}
