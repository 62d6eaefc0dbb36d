use anyhow::{Context, Result};

use crate::profile::{JobProfile, DEFAULT_TITLE};
use crate::ranking::stop_words::StopWords;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_FILES: usize = 20;

/// Application configuration loaded from environment variables.
/// Startup fails if a value is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub job_profile: JobProfile,
    pub stop_words: StopWords,
    /// Upper bound on the whole multipart request body.
    pub max_upload_bytes: usize,
    pub max_files: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let description = match (lookup("JOB_DESCRIPTION_FILE"), lookup("JOB_DESCRIPTION")) {
            (Some(path), _) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read JOB_DESCRIPTION_FILE '{path}'"))?,
            (None, Some(text)) => text,
            (None, None) => JobProfile::default().description,
        };
        let title = lookup("JOB_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let job_profile =
            JobProfile::new(title, description).context("Invalid job description")?;

        let stop_words = match lookup("STOP_WORDS") {
            Some(value) => value.parse::<StopWords>()?,
            None => StopWords::default(),
        };

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            job_profile,
            stop_words,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_files: parse_or(&lookup, "MAX_FILES", DEFAULT_MAX_FILES)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.job_profile, JobProfile::default());
        assert_eq!(config.stop_words, StopWords::English);
        assert_eq!(config.max_files, 20);
    }

    #[test]
    fn test_inline_description_and_title() {
        let config = config_from(&[
            ("JOB_TITLE", "Backend Engineer"),
            ("JOB_DESCRIPTION", "Rust, Postgres, Kubernetes"),
            ("STOP_WORDS", "none"),
        ])
        .unwrap();
        assert_eq!(config.job_profile.title, "Backend Engineer");
        assert_eq!(config.job_profile.description, "Rust, Postgres, Kubernetes");
        assert_eq!(config.stop_words, StopWords::None);
    }

    #[test]
    fn test_description_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Data engineer with Spark").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = config_from(&[
            ("JOB_DESCRIPTION_FILE", path.as_str()),
            ("JOB_DESCRIPTION", "ignored"),
        ])
        .unwrap();
        assert_eq!(config.job_profile.description.trim(), "Data engineer with Spark");
    }

    #[test]
    fn test_missing_description_file_fails() {
        assert!(config_from(&[("JOB_DESCRIPTION_FILE", "/nonexistent/jd.txt")]).is_err());
    }

    #[test]
    fn test_empty_description_fails() {
        assert!(config_from(&[("JOB_DESCRIPTION", "   ")]).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_stop_words_setting_uses_default() {
        let config = config_from(&[("STOP_WORDS", "")]).unwrap();
        assert_eq!(config.stop_words, StopWords::English);
    }

    #[test]
    fn test_unknown_stop_words_fails() {
        assert!(config_from(&[("STOP_WORDS", "latin")]).is_err());
    }
}
