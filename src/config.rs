use std::env;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// There are no secrets here — both knobs have sensible defaults and exist
/// so the dashboard front end can be tuned without a rebuild. The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// How many keywords the combined report requests (UNDERTONE_TOP_N, default 10)
    pub top_keywords: usize,
    /// Inputs shorter than this (in chars, after trimming) get a warning
    /// instead of analysis (UNDERTONE_MIN_INPUT, default 5)
    pub min_input_chars: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A present-but-unparseable value is a startup error, not a silent
    /// fallback — a typo in .env should be visible immediately.
    pub fn load() -> Result<Self> {
        let top_keywords = match env::var("UNDERTONE_TOP_N") {
            Ok(raw) => {
                let n: usize = raw
                    .parse()
                    .with_context(|| format!("UNDERTONE_TOP_N is not a number: {raw:?}"))?;
                anyhow::ensure!(n > 0, "UNDERTONE_TOP_N must be at least 1");
                n
            }
            Err(_) => 10,
        };

        let min_input_chars = match env::var("UNDERTONE_MIN_INPUT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("UNDERTONE_MIN_INPUT is not a number: {raw:?}"))?,
            Err(_) => 5,
        };

        Ok(Self {
            top_keywords,
            min_input_chars,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_keywords: 10,
            min_input_chars: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.top_keywords, 10);
        assert_eq!(config.min_input_chars, 5);
    }
}
