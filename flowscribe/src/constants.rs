use regex::Regex;
use std::sync::OnceLock;

/// Returns the compiled regex detecting an `if (...)` statement head.
pub fn get_if_head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^if\s*\(").expect("Invalid if-head regex pattern"))
}

/// Returns the compiled regex capturing an `if` condition.
///
/// The capture is non-greedy: it stops at the first closing parenthesis,
/// matching the upstream tool's behavior for conditions containing nested
/// parentheses.
pub fn get_if_condition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"if\s*\((.*?)\)").expect("Invalid if-condition regex pattern"))
}

/// Returns the compiled regex detecting an `else` introducing a branch block.
pub fn get_else_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^else\s*(\{|$)").expect("Invalid else regex pattern"))
}

/// Returns the compiled regex capturing an `#ifdef GUARD` directive.
pub fn get_ifdef_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^#ifdef\s+(\w+)").expect("Invalid ifdef regex pattern"))
}

/// Returns the compiled regex detecting an `#endif` directive.
pub fn get_endif_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^#endif").expect("Invalid endif regex pattern"))
}

/// Returns the compiled regex stripping `//` comments to end of line.
pub fn get_line_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"//.*$").expect("Invalid line-comment regex pattern"))
}

/// Returns the compiled regex stripping same-line `/* ... */` spans.
pub fn get_block_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"/\*.*?\*/").expect("Invalid block-comment regex pattern"))
}

/// Returns the compiled regex matching all-asterisk comment banner lines.
pub fn get_banner_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^/\*+\s*$|^\*+\s*$|^\*+/\s*$").expect("Invalid banner regex pattern")
    })
}

/// Returns the compiled regex capturing `Type Name;` / `Type Name[n];`
/// local variable declarations.
pub fn get_local_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"^(\s*)([A-Za-z_][A-Za-z0-9_]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*(\[[^\]]*\])?\s*;",
        )
        .expect("Invalid local-declaration regex pattern")
    })
}

/// Returns the compiled regex capturing `RcvMESG(A, B)` call arguments.
pub fn get_receive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"RcvMESG\s*\(\s*([^,]+)\s*,\s*([^)]+)\s*\)")
            .expect("Invalid receive regex pattern")
    })
}

/// Returns the compiled regex capturing `RBMESG_RcvMESG(A, B)` call
/// arguments, with an optional address-of marker on the first argument.
pub fn get_qualified_receive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"RBMESG_RcvMESG\s*\(\s*(&?\s*[^,]+)\s*,\s*([^)]+)\s*\)")
            .expect("Invalid qualified-receive regex pattern")
    })
}

/// Returns the compiled regex capturing `RBMESG_SendMESG(A, B)` call
/// arguments.
pub fn get_send_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"RBMESG_SendMESG\s*\(\s*([^,]+)\s*,\s*([^)]+)\s*\)")
            .expect("Invalid send regex pattern")
    })
}

/// Returns the compiled regex matching a run of whitespace.
pub fn get_whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"))
}

/// Returns the compiled regex matching characters not allowed in Mermaid
/// identifiers.
pub fn get_id_char_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_]").expect("Invalid id-char regex pattern"))
}

/// Returns the compiled regex matching a run of underscores.
pub fn get_underscore_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"_+").expect("Invalid underscore-run regex pattern"))
}

/// Fallback label length before truncation in the statement classifier.
pub const MAX_STATEMENT_LABEL_LEN: usize = 60;

/// Name of the optional configuration file.
pub const CONFIG_FILENAME: &str = "flowscribe.toml";

/// Default output directory when neither the CLI nor the configuration file
/// names one.
pub const DEFAULT_OUTPUT_ROOT: &str = "Gen";
