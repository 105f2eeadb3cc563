/// Outcome of checking one source text, as shown to the user.

use crate::config::Config;
use crate::error::{InputTooLong, LexDiagnostic};
use crate::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub success: bool,
    pub rendering: Option<String>,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexDiagnostic>,
    pub error: Option<String>,
}

/// Tokenize for display, then parse from a fresh scan.
pub fn check(source: &str, config: &Config) -> Result<Report, InputTooLong> {
    if source.len() > config.max_input_len {
        return Err(InputTooLong { len: source.len(), limit: config.max_input_len });
    }

    let (tokens, diagnostics) = crate::tokenize_with_diagnostics(source);
    let report = match crate::parse(source) {
        Ok(rendering) => Report {
            success: true,
            rendering: Some(rendering),
            tokens,
            diagnostics,
            error: None,
        },
        Err(e) => Report {
            success: false,
            rendering: None,
            tokens,
            diagnostics,
            error: Some(e.to_string()),
        },
    };
    Ok(report)
}

impl Report {
    /// Plain-text form for the terminal. Diagnostics are not included.
    pub fn to_text(&self, show_tokens: bool) -> String {
        let mut out = String::new();
        match (&self.rendering, &self.error) {
            (Some(rendering), _) => {
                out.push_str("Compilation successful:\n");
                if show_tokens {
                    for token in &self.tokens {
                        out.push_str(&format!("{}\n", token));
                    }
                }
                out.push('\n');
                out.push_str(rendering);
                out.push('\n');
            }
            (None, Some(error)) => {
                out.push_str(&format!("Error: {}\n", error));
            }
            (None, None) => {}
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
