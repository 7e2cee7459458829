use crate::domain::{AlbumEntry, PhotoEntry};
use crate::errors::Result;
use mockall::automock;
use std::path::Path;

/// Object storage operations the album commands rely on.
///
/// An empty `prefix` lists the whole bucket.
#[automock]
pub trait ObjectStore {
    fn list_buckets(&self) -> Result<Vec<String>>;
    fn create_bucket(&self, bucket: &str) -> Result<()>;
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;
    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str)
    -> Result<()>;
    fn upload_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()>;
    fn download_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()>;
    fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
    fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<()>;
    fn set_public_read(&self, bucket: &str) -> Result<()>;
    fn configure_website(
        &self,
        bucket: &str,
        index_document: &str,
        error_document: &str,
    ) -> Result<()>;
}

/// Renders the gallery pages published by `mksite`.
#[automock]
pub trait PageRenderer {
    fn render_index(&self, albums: &[AlbumEntry]) -> Result<String>;
    fn render_album(&self, album: &str, photos: &[PhotoEntry]) -> Result<String>;
    /// Index page for a bucket without any albums
    fn render_placeholder_index(&self) -> Result<String>;
    fn render_error(&self) -> Result<String>;
}

/// Reads one answer from the user
#[automock]
pub trait Prompter {
    fn prompt(&self, label: &str) -> Result<String>;
}
