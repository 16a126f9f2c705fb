use regex::Regex;

use crate::error::EngineError;

/// One function's raw text, extracted from a larger file.
#[derive(Debug, Clone)]
pub struct SourceFunction {
    /// Name the function was located by.
    pub name: String,
    /// Exact substring of the file, including the signature line.
    pub raw_text: String,
    /// Byte offset of the signature match in the file text.
    pub start_offset: usize,
    /// Byte offset one past the closing brace.
    pub end_offset: usize,
}

/// Locates `name` in `source` and extracts its body by brace balancing.
///
/// The scan looks for the first occurrence of the name followed (ignoring
/// whitespace) by a parenthesized parameter list and an opening brace. From
/// there, brace depth is counted forward until it returns to zero; that
/// position ends the function.
///
/// # Errors
///
/// Returns [`EngineError::NotFound`] when no signature matches, and
/// [`EngineError::UnbalancedBraces`] when end-of-file is reached before the
/// opening brace is closed.
pub fn locate_function(source: &str, name: &str) -> Result<SourceFunction, EngineError> {
    if name.trim().is_empty() {
        return Err(EngineError::InputRequired("function_name"));
    }

    let pattern = format!(r"\b{}\s*\([^)]*\)\s*\{{", regex::escape(name));
    let signature_re = Regex::new(&pattern).map_err(|_| EngineError::NotFound {
        function: name.to_owned(),
        pattern: pattern.clone(),
    })?;

    let Some(found) = signature_re.find(source) else {
        return Err(EngineError::NotFound {
            function: name.to_owned(),
            pattern,
        });
    };

    let start_offset = found.start();
    let mut depth: usize = 0;
    let mut opened = false;
    let mut last_position = start_offset;

    for (i, byte) in source.as_bytes().iter().enumerate().skip(start_offset) {
        last_position = i;
        match *byte {
            b'{' => {
                opened = true;
                depth += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                if opened && depth == 0 {
                    let end_offset = i + 1;
                    return Ok(SourceFunction {
                        name: name.to_owned(),
                        raw_text: source[start_offset..end_offset].to_owned(),
                        start_offset,
                        end_offset,
                    });
                }
            }
            _ => {}
        }
    }

    Err(EngineError::UnbalancedBraces {
        depth,
        position: last_position,
    })
}
