/// Front-end settings: defaults, then environment, then command-line flags.

use anyhow::{bail, Context, Result};

pub const DEFAULT_MAX_INPUT: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inputs longer than this many bytes are refused before scanning.
    pub max_input_len: usize,
    pub json: bool,
    pub show_tokens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT,
            json: false,
            show_tokens: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, so tests need not touch the process environment.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = get("FORSCAN_MAX_INPUT") {
            config.max_input_len = parse_limit(&raw)
                .with_context(|| format!("invalid FORSCAN_MAX_INPUT '{}'", raw))?;
        }
        if let Some(raw) = get("FORSCAN_JSON") {
            config.json = match raw.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => bail!("invalid FORSCAN_JSON '{}': expected 1 or 0", other),
            };
        }
        Ok(config)
    }

    /// Consume recognised flags and return the remaining positional arguments.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>> {
        let mut rest = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => self.json = true,
                "--no-tokens" => self.show_tokens = false,
                "--max-input" => {
                    let Some(raw) = iter.next() else {
                        bail!("--max-input needs a value");
                    };
                    self.max_input_len = parse_limit(raw)
                        .with_context(|| format!("invalid --max-input '{}'", raw))?;
                }
                flag if flag.starts_with("--") => bail!("unknown flag '{}'", flag),
                _ => rest.push(arg.clone()),
            }
        }
        Ok(rest)
    }
}

fn parse_limit(raw: &str) -> Result<usize> {
    let n: usize = raw.trim().parse()?;
    if n == 0 {
        bail!("limit must be positive");
    }
    Ok(n)
}
