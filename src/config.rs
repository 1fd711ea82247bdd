use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Every value has a working default, and every value can also be set
/// per run on the command line; CLI flags win over the environment.
/// A .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// File extension that marks a corpus file (DOPPEL_EXTENSION, default "txt").
    pub extension: String,
    /// Where the plain-text report goes (DOPPEL_REPORT).
    pub report_path: String,
    /// Default stop word list: "builtin", "none", or a language name (DOPPEL_STOPWORDS).
    pub stopwords: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            extension: env::var("DOPPEL_EXTENSION").unwrap_or_else(|_| "txt".to_string()),
            report_path: env::var("DOPPEL_REPORT")
                .unwrap_or_else(|_| "similarity_results.txt".to_string()),
            stopwords: env::var("DOPPEL_STOPWORDS").ok(),
        })
    }
}
