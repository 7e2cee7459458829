use crate::domain::PHOTO_EXTENSIONS;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Photos directly inside `dir`, the way the shell globs `*.jpg` then `*.jpeg`.
///
/// Not recursive, case-sensitive, hidden files skipped. Symlinks to regular
/// files count as photos. Each extension group is ordered by file name.
#[must_use]
pub fn collect_photo_files(dir: &Path) -> Vec<PathBuf> {
    let entries: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .collect();

    let mut photos = Vec::new();
    for ext in PHOTO_EXTENSIONS {
        photos.extend(
            entries
                .iter()
                .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(ext))
                .cloned(),
        );
    }
    photos
}
