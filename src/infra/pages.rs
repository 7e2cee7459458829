use askama::Template;

use crate::domain::{AlbumEntry, PhotoEntry};
use crate::errors::Result;
use crate::ports::PageRenderer;

pub const DEFAULT_SITE_TITLE: &str = "Photo archive";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    title: &'a str,
    albums: &'a [AlbumEntry],
}

#[derive(Template)]
#[template(path = "album.html")]
struct AlbumPage<'a> {
    title: &'a str,
    album: &'a str,
    photos: &'a [PhotoEntry],
}

#[derive(Template)]
#[template(path = "placeholder.html")]
struct PlaceholderPage<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    title: &'a str,
}

/// Askama-backed gallery pages, compiled from `templates/`
#[derive(Debug, Clone)]
pub struct HtmlPages {
    title: String,
}

impl HtmlPages {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlPages {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_TITLE)
    }
}

impl PageRenderer for HtmlPages {
    fn render_index(&self, albums: &[AlbumEntry]) -> Result<String> {
        Ok(IndexPage {
            title: &self.title,
            albums,
        }
        .render()?)
    }

    fn render_album(&self, album: &str, photos: &[PhotoEntry]) -> Result<String> {
        Ok(AlbumPage {
            title: &self.title,
            album,
            photos,
        }
        .render()?)
    }

    fn render_placeholder_index(&self) -> Result<String> {
        Ok(PlaceholderPage { title: &self.title }.render()?)
    }

    fn render_error(&self) -> Result<String> {
        Ok(ErrorPage { title: &self.title }.render()?)
    }
}
