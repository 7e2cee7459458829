use super::{AppCore, CommandOutcome};
use crate::domain::{
    AlbumEntry, PhotoEntry, parse_album_prefix, parse_photo_key, photo_url, website_url,
};
use crate::errors::Result;
use crate::ports::PageRenderer;

pub const INDEX_PAGE_KEY: &str = "index.html";
pub const ERROR_PAGE_KEY: &str = "error.html";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[must_use]
pub fn album_page_key(album_id: usize) -> String {
    format!("album{album_id}.html")
}

impl AppCore {
    /// Publish the bucket as a static gallery website.
    ///
    /// Albums are numbered from 1 in listing order; `index.html` links to one
    /// `album<id>.html` per album.
    ///
    /// # Errors
    /// Returns an error if a bucket setting, listing, rendering or upload fails.
    pub fn make_site(&self, pages: &dyn PageRenderer) -> Result<CommandOutcome> {
        self.store.set_public_read(self.bucket())?;
        self.store
            .configure_website(self.bucket(), INDEX_PAGE_KEY, ERROR_PAGE_KEY)?;

        let keys = self.store.list_objects(self.bucket(), "")?;

        self.publish_page(ERROR_PAGE_KEY, pages.render_error()?)?;

        if keys.is_empty() {
            self.logger.info("Bucket is empty, publishing placeholder index");
            self.publish_page(INDEX_PAGE_KEY, pages.render_placeholder_index()?)?;
            return Ok(CommandOutcome::Output(website_url(self.bucket())));
        }

        let albums: Vec<AlbumEntry> = keys
            .iter()
            .filter_map(|key| parse_album_prefix(key))
            .enumerate()
            .map(|(idx, name)| AlbumEntry {
                id: idx + 1,
                name: name.to_string(),
            })
            .collect();

        self.publish_page(INDEX_PAGE_KEY, pages.render_index(&albums)?)?;

        for album in &albums {
            let photos = self.album_photos(&album.name, &keys);
            self.logger.debug(&format!(
                "Album {} ({}) has {} photos",
                album.id,
                album.name,
                photos.len()
            ));
            self.publish_page(
                &album_page_key(album.id),
                pages.render_album(&album.name, &photos)?,
            )?;
        }

        self.logger
            .info(&format!("Published {} album pages", albums.len()));
        Ok(CommandOutcome::Output(website_url(self.bucket())))
    }

    fn album_photos(&self, album: &str, keys: &[String]) -> Vec<PhotoEntry> {
        keys.iter()
            .filter_map(|key| {
                parse_photo_key(key)
                    .filter(|photo| photo.album == album)
                    .map(|photo| PhotoEntry {
                        url: photo_url(&self.config.endpoint_url, self.bucket(), key),
                        name: photo.file_name.to_string(),
                    })
            })
            .collect()
    }

    fn publish_page(&self, key: &str, html: String) -> Result<()> {
        self.store
            .put_object(self.bucket(), key, html.into_bytes(), HTML_CONTENT_TYPE)
    }
}
