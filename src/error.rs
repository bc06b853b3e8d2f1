use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read statistics from {}: {source}", .path.display())]
    StatsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse statistics in {}: {source}", .path.display())]
    StatsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_locale() {
        let e = AppError::UnsupportedLocale {
            input: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn app_error_display_stats_read() {
        let e = AppError::StatsRead {
            path: PathBuf::from("/nope/output.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            e.to_string(),
            "Failed to read statistics from /nope/output.json: missing"
        );
    }

    #[test]
    fn app_error_display_stats_parse() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = AppError::StatsParse {
            path: PathBuf::from("output.json"),
            source,
        };
        assert!(e.to_string().starts_with("Failed to parse statistics in output.json:"));
    }
}
