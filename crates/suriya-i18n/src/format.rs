//! # Template Formatting
//!
//! Pure `{token}` substitution. Tokens are ASCII words (letters, digits,
//! underscore); anything else between braces, and any token with no
//! matching parameter, renders literally. No locale state is consulted.

/// Substitute `{token}` placeholders in `template` with values from `params`.
pub fn format_message(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) if close > 0 && is_word(&after_open[..close]) => {
                let token = &after_open[..close];
                match params.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        // Unknown token stays literal.
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            _ => {
                // Not a placeholder; emit the brace and keep scanning.
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_word(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
