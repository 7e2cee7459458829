mod init;
mod site;
mod transfer;

pub use init::{INIT_PROMPTS, initialize};
pub use site::{ERROR_PAGE_KEY, INDEX_PAGE_KEY, album_page_key};

use std::sync::Arc;

use crate::args::check_album_name;
use crate::config::Config;
use crate::domain::{AlbumEntryPattern, build_album_prefix, build_photo_key, parse_album_prefix};
use crate::errors::{CloudPhotoError, Result};
use crate::ports::ObjectStore;
use crate::utils::log_utils::Logger;

/// What a successful command leaves for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing to print besides the success notice
    Done,
    /// Printed to stdout as is
    Output(String),
}

/// Album commands bound to one bucket
pub struct AppCore {
    store: Arc<dyn ObjectStore>,
    config: Config,
    logger: Logger,
}

impl AppCore {
    pub fn new(store: Arc<dyn ObjectStore>, config: Config, logger: Logger) -> Self {
        Self {
            store,
            config,
            logger,
        }
    }

    pub(crate) fn bucket(&self) -> &str {
        &self.config.bucket
    }

    /// Keys stored under `<album>/`
    fn album_keys(&self, album: &str) -> Result<Vec<String>> {
        self.store
            .list_objects(self.bucket(), &build_album_prefix(album))
    }

    /// Album names, or the files of one album, one per line.
    ///
    /// # Errors
    /// Returns `NotFound` if the listing is empty or no key matches.
    pub fn list(&self, album: Option<&str>) -> Result<CommandOutcome> {
        let names: Vec<String> = match album {
            None => {
                let keys = self.store.list_objects(self.bucket(), "")?;
                if keys.is_empty() {
                    return Err(CloudPhotoError::NotFound(format!(
                        "Bucket {} is empty",
                        self.bucket()
                    )));
                }
                keys.iter()
                    .filter_map(|key| parse_album_prefix(key))
                    .map(str::to_string)
                    .collect()
            }
            Some(album) => {
                check_album_name(album)?;
                let keys = self.album_keys(album)?;
                if keys.is_empty() {
                    return Err(CloudPhotoError::NotFound(format!(
                        "Album {album} does not exist"
                    )));
                }
                let pattern = album_pattern(album)?;
                keys.iter()
                    .filter_map(|key| pattern.file_name(key))
                    .map(str::to_string)
                    .collect()
            }
        };

        if names.is_empty() {
            return Err(CloudPhotoError::NotFound(match album {
                None => "No albums found".to_string(),
                Some(album) => format!("Album {album} has no photos"),
            }));
        }

        self.logger.info(&format!("Listed {} entries", names.len()));
        Ok(CommandOutcome::Output(names.join("\n")))
    }

    /// Delete one photo, or the whole album with its marker.
    ///
    /// # Errors
    /// Returns `NotFound` if the album or the photo does not exist.
    pub fn delete(&self, album: &str, photo: Option<&str>) -> Result<CommandOutcome> {
        check_album_name(album)?;
        let keys = self.album_keys(album)?;
        if keys.is_empty() {
            return Err(CloudPhotoError::NotFound(format!(
                "Album {album} does not exist"
            )));
        }

        match photo {
            None => {
                self.logger
                    .info(&format!("Deleting {} objects of album {album}", keys.len()));
                self.store.delete_objects(self.bucket(), &keys)?;
            }
            Some(photo) => {
                let key = build_photo_key(album, photo);
                if !keys.contains(&key) {
                    return Err(CloudPhotoError::NotFound(format!(
                        "Photo {photo} does not exist in album {album}"
                    )));
                }
                self.logger.info(&format!("Deleting {key}"));
                self.store.delete_object(self.bucket(), &key)?;
            }
        }

        Ok(CommandOutcome::Done)
    }
}

fn album_pattern(album: &str) -> Result<AlbumEntryPattern> {
    AlbumEntryPattern::new(album)
        .map_err(|e| CloudPhotoError::Validation(format!("Invalid album name {album}: {e}")))
}
