//! Statistics document loading
//!
//! The document is re-read on every call. It may be regenerated between
//! renders, so nothing here is cached.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::consts::SOURCE_DIR_ENV;
use crate::error::AppError;
use crate::utils::debug_enabled;

use super::types::StatisticsDocument;

pub(crate) fn parse_stats(raw: &str) -> Result<StatisticsDocument, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read and parse the statistics document at `path`
pub(crate) fn load_stats(path: &Path) -> Result<StatisticsDocument, AppError> {
    let start = Instant::now();
    let raw = fs::read_to_string(path).map_err(|source| AppError::StatsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_stats(&raw).map_err(|source| AppError::StatsParse {
        path: path.to_path_buf(),
        source,
    })?;

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Loaded statistics from {} ({:.2}ms)",
            path.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(document)
}

/// Media root for this render: explicit setting, then the environment
/// override, then the directory recorded in the document.
pub(crate) fn resolve_source_dir(
    explicit: Option<&Path>,
    document: &StatisticsDocument,
) -> Option<PathBuf> {
    pick_source_dir(explicit, std::env::var_os(SOURCE_DIR_ENV), document)
}

fn pick_source_dir(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    document: &StatisticsDocument,
) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    document
        .source_dir
        .as_deref()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn doc_with_source(dir: Option<&str>) -> StatisticsDocument {
        StatisticsDocument {
            source_dir: dir.map(str::to_string),
            ..StatisticsDocument::default()
        }
    }

    #[test]
    fn load_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"year":2024,"chat_stats":{{"messages_stats":{{"total_messages_count":12345}}}}}}"#
        )
        .unwrap();

        let doc = load_stats(file.path()).unwrap();
        assert_eq!(doc.year, Some(2024));
        assert_eq!(doc.chat_stats.messages_stats.total_messages_count, 12345);
    }

    #[test]
    fn load_is_not_cached() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"year":2023}}"#).unwrap();
        assert_eq!(load_stats(file.path()).unwrap().year, Some(2023));

        fs::write(file.path(), r#"{"year":2024}"#).unwrap();
        assert_eq!(load_stats(file.path()).unwrap().year, Some(2024));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_stats(&dir.path().join("output.json")).unwrap_err();
        assert!(matches!(err, AppError::StatsRead { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_stats(file.path()).unwrap_err();
        assert!(matches!(err, AppError::StatsParse { .. }));
    }

    #[test]
    fn explicit_source_dir_wins() {
        let doc = doc_with_source(Some("/doc/export"));
        let dir = pick_source_dir(
            Some(Path::new("/cli/export")),
            Some(OsString::from("/env/export")),
            &doc,
        );
        assert_eq!(dir, Some(PathBuf::from("/cli/export")));
    }

    #[test]
    fn env_overrides_document() {
        let doc = doc_with_source(Some("/doc/export"));
        let dir = pick_source_dir(None, Some(OsString::from("/env/export")), &doc);
        assert_eq!(dir, Some(PathBuf::from("/env/export")));
    }

    #[test]
    fn falls_back_to_document() {
        let doc = doc_with_source(Some("/doc/export"));
        assert_eq!(
            pick_source_dir(None, Some(OsString::new()), &doc),
            Some(PathBuf::from("/doc/export"))
        );
        assert!(pick_source_dir(None, None, &doc_with_source(None)).is_none());
    }
}
