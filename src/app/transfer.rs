use std::path::Path;

use super::{AppCore, CommandOutcome};
use crate::args::check_album_name;
use crate::domain::{build_album_prefix, build_photo_key, parse_photo_key};
use crate::errors::{CloudPhotoError, Result};
use crate::utils::path_utils::{check_readable_dir, check_writable_dir, collect_photo_files};

impl AppCore {
    /// Upload every `*.jpg`/`*.jpeg` of `dir` into `album`.
    ///
    /// A file that fails to upload is reported and skipped; the command still
    /// succeeds.
    ///
    /// # Errors
    /// Returns an error for an invalid album name, an unreadable directory, a
    /// directory without photos, or a failed listing/marker creation.
    pub fn upload(&self, album: &str, dir: &Path) -> Result<CommandOutcome> {
        check_album_name(album)?;
        let dir = check_readable_dir(dir)?;

        let photos = collect_photo_files(&dir);
        if photos.is_empty() {
            return Err(CloudPhotoError::NotFound(format!(
                "Photos do not exist in directory {}",
                dir.display()
            )));
        }

        let prefix = build_album_prefix(album);
        if self.store.list_objects(self.bucket(), &prefix)?.is_empty() {
            self.logger.info(&format!("Creating album {album}"));
            self.store
                .put_object(self.bucket(), &prefix, Vec::new(), "application/x-directory")?;
        }

        let mut failed = 0;
        for photo in &photos {
            let Some(file_name) = photo.file_name().and_then(|n| n.to_str()) else {
                self.logger
                    .warn(&format!("Skipping {}: file name is not UTF-8", photo.display()));
                failed += 1;
                continue;
            };
            let key = build_photo_key(album, file_name);
            if let Err(e) = self.store.upload_file(self.bucket(), &key, photo) {
                self.logger
                    .warn(&format!("Failed to upload {}: {e}", photo.display()));
                failed += 1;
            }
        }

        self.logger.info(&format!(
            "Uploaded {} of {} photos to album {album}",
            photos.len() - failed,
            photos.len()
        ));
        Ok(CommandOutcome::Done)
    }

    /// Download the photos of `album` into `dir`, creating it when missing.
    ///
    /// Keys that are not photos, such as the album marker, are skipped. The
    /// first failed download aborts the command.
    ///
    /// # Errors
    /// Returns an error for an invalid or missing album, an unwritable
    /// directory, or any failed download.
    pub fn download(&self, album: &str, dir: &Path) -> Result<CommandOutcome> {
        check_album_name(album)?;
        let keys = self
            .store
            .list_objects(self.bucket(), &build_album_prefix(album))?;
        if keys.is_empty() {
            return Err(CloudPhotoError::NotFound(format!(
                "Album {album} does not exist"
            )));
        }

        let dir = check_writable_dir(dir)?;

        let mut downloaded = 0;
        for key in &keys {
            let Some(photo) = parse_photo_key(key) else {
                self.logger.debug(&format!("Skipping non-photo key {key}"));
                continue;
            };
            self.store
                .download_file(self.bucket(), key, &dir.join(photo.file_name))?;
            downloaded += 1;
        }

        self.logger.info(&format!(
            "Downloaded {downloaded} photos from album {album}"
        ));
        Ok(CommandOutcome::Done)
    }
}
