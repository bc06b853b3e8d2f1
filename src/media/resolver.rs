//! Media lookup in a Telegram export tree
//!
//! Candidates are tried lazily in a fixed order and the first readable one
//! wins. Missing files are an expected outcome, not an error.

use std::fs;
use std::path::{Component, Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::consts::{MEDIA_SUBDIRS, SKIPPED_MEDIA_EXTENSION};
use crate::stats::MessageSnapshot;

/// A located media file, ready for inline embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ResolvedMedia {
    pub(crate) data_uri: String,
    pub(crate) is_video: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MediaResolver {
    root: Option<PathBuf>,
}

impl MediaResolver {
    pub(crate) fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub(crate) fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Resolve the media attached to a snapshot, if any
    pub(crate) fn resolve_snapshot(&self, snapshot: Option<&MessageSnapshot>) -> Option<ResolvedMedia> {
        self.resolve(snapshot?.media_identifier()?)
    }

    pub(crate) fn resolve(&self, identifier: &str) -> Option<ResolvedMedia> {
        let root = self.root.as_deref()?;
        candidate_paths(root, identifier)
            .filter(|path| !is_skipped(path))
            .find_map(|path| {
                let bytes = fs::read(&path).ok()?;
                Some(encode_media(&path, &bytes))
            })
    }
}

/// Candidate locations for `identifier` under `root`, in lookup order
pub(crate) fn candidate_paths<'a>(
    root: &'a Path,
    identifier: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    let identifier = identifier.trim();
    let has_separator = identifier.contains(['/', '\\']);
    let file_name = identifier.rsplit(['/', '\\']).next().unwrap_or(identifier);
    let usable = !file_name.is_empty();

    let direct = (usable && has_separator && stays_under_root(identifier))
        .then(|| root.join(identifier));
    let nested = MEDIA_SUBDIRS
        .iter()
        .filter(move |_| usable)
        .map(move |subdir| root.join(subdir).join(file_name));
    direct.into_iter().chain(nested)
}

/// Only plain relative segments; no root, prefix or `..`
fn stays_under_root(identifier: &str) -> bool {
    Path::new(identifier)
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_skipped(path: &Path) -> bool {
    extension(path).as_deref() == Some(SKIPPED_MEDIA_EXTENSION)
}

/// MIME type by extension; unknown extensions are assumed to be webp stickers
fn mime_for(path: &Path) -> (&'static str, bool) {
    match extension(path).as_deref() {
        Some("webm") => ("video/webm", true),
        Some("png") => ("image/png", false),
        Some("jpg") | Some("jpeg") => ("image/jpeg", false),
        _ => ("image/webp", false),
    }
}

fn encode_media(path: &Path, bytes: &[u8]) -> ResolvedMedia {
    let (mime, is_video) = mime_for(path);
    ResolvedMedia {
        data_uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        is_video,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, rel: &str, bytes: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn candidates_for_bare_name() {
        let root = Path::new("/export");
        let paths: Vec<PathBuf> = candidate_paths(root, "a.webp").collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/export/stickers/a.webp"),
                PathBuf::from("/export/video_files/a.webp"),
                PathBuf::from("/export/files/a.webp"),
                PathBuf::from("/export/photos/a.webp"),
            ]
        );
    }

    #[test]
    fn candidates_try_relative_path_first() {
        let root = Path::new("/export");
        let paths: Vec<PathBuf> = candidate_paths(root, "files/x/b.png").collect();
        assert_eq!(paths[0], PathBuf::from("/export/files/x/b.png"));
        assert_eq!(paths[1], PathBuf::from("/export/stickers/b.png"));
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn candidates_never_leave_root() {
        let root = Path::new("/export");
        for identifier in ["/etc/secret.png", "../outside/secret.png", "stickers/../../secret.png"] {
            let paths: Vec<PathBuf> = candidate_paths(root, identifier).collect();
            assert_eq!(paths.len(), 4, "{identifier}");
            assert!(paths.iter().all(|p| p.starts_with("/export/")), "{identifier}");
            assert_eq!(paths[0], PathBuf::from("/export/stickers/secret.png"));
        }
    }

    #[test]
    fn file_outside_root_is_not_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("export");
        fs::create_dir_all(&root).unwrap();
        write(dir.path(), "outside/secret.png", b"private");
        let outside = dir.path().join("outside/secret.png");

        let resolver = MediaResolver::new(Some(root));
        assert!(resolver.resolve(outside.to_str().unwrap()).is_none());
        assert!(resolver.resolve("../outside/secret.png").is_none());
    }

    #[test]
    fn candidates_empty_for_blank_identifier() {
        assert_eq!(candidate_paths(Path::new("/export"), "  ").count(), 0);
        assert_eq!(candidate_paths(Path::new("/export"), "stickers/").count(), 0);
    }

    #[test]
    fn stickers_dir_wins_over_photos() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "photos/s.png", b"photo");
        write(dir.path(), "stickers/s.png", b"sticker");

        let resolver = MediaResolver::new(Some(dir.path().to_path_buf()));
        let media = resolver.resolve("s.png").unwrap();
        assert_eq!(
            media.data_uri,
            format!("data:image/png;base64,{}", STANDARD.encode(b"sticker"))
        );
        assert!(!media.is_video);
    }

    #[test]
    fn tgs_is_never_returned() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "stickers/anim.tgs", b"lottie");
        let resolver = MediaResolver::new(Some(dir.path().to_path_buf()));
        assert!(resolver.resolve("anim.tgs").is_none());
        assert!(resolver.resolve("stickers/anim.TGS").is_none());
    }

    #[test]
    fn webm_is_flagged_as_video() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "video_files/v.webm", b"video");
        let resolver = MediaResolver::new(Some(dir.path().to_path_buf()));
        let media = resolver.resolve("v.webm").unwrap();
        assert!(media.is_video);
        assert!(media.data_uri.starts_with("data:video/webm;base64,"));
    }

    #[test]
    fn unknown_extension_defaults_to_webp() {
        assert_eq!(mime_for(Path::new("a.webp")), ("image/webp", false));
        assert_eq!(mime_for(Path::new("a.gif")), ("image/webp", false));
        assert_eq!(mime_for(Path::new("a.JPEG")), ("image/jpeg", false));
    }

    #[test]
    fn resolution_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "files/doc.jpg", b"jpeg-bytes");
        let resolver = MediaResolver::new(Some(dir.path().to_path_buf()));
        assert_eq!(resolver.resolve("doc.jpg"), resolver.resolve("doc.jpg"));
        assert!(resolver.resolve("doc.jpg").is_some());

        assert_eq!(resolver.resolve("gone.jpg"), None);
        assert_eq!(resolver.resolve("gone.jpg"), None);
    }

    #[test]
    fn directory_candidate_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("stickers/x.webp")).unwrap();
        write(dir.path(), "photos/x.webp", b"real");
        let resolver = MediaResolver::new(Some(dir.path().to_path_buf()));
        let media = resolver.resolve("x.webp").unwrap();
        assert!(media.data_uri.ends_with(&STANDARD.encode(b"real")));
    }

    #[test]
    fn no_root_means_absent() {
        assert!(MediaResolver::default().resolve("a.webp").is_none());
    }

    #[test]
    fn resolve_snapshot_uses_file_name_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "stickers/fallback.webp", b"w");
        let snapshot: MessageSnapshot = serde_json::from_str(
            r#"{"file":"(File not included. Change data exporting settings to download.)","file_name":"fallback.webp"}"#,
        )
        .unwrap();
        let resolver = MediaResolver::new(Some(dir.path().to_path_buf()));
        assert!(resolver.resolve_snapshot(Some(&snapshot)).is_some());
        assert!(resolver.resolve_snapshot(None).is_none());
    }
}
