//! Object key naming for albums and photos.
//!
//! An album is the key prefix `<album>/`; an empty album is kept visible by a
//! zero-byte marker object stored at that prefix. A photo lives at
//! `<album>/<file>.jpg` or `<album>/<file>.jpeg`.

use regex::Regex;
use std::sync::LazyLock;

pub const KEY_SEPARATOR: &str = "/";

/// File extensions picked up by upload and download, case-sensitive.
pub const PHOTO_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

pub const WEBSITE_DOMAIN: &str = "website.yandexcloud.net";

static ALBUM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/]+$").expect("album name regex"));

static ALBUM_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)/$").expect("album prefix regex"));

static PHOTO_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)/([^/]+\.(?:jpg|jpeg))$").expect("photo key regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoKey<'a> {
    pub album: &'a str,
    pub file_name: &'a str,
}

/// One row of the gallery index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumEntry {
    pub id: usize,
    pub name: String,
}

/// One photo on an album page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoEntry {
    pub url: String,
    pub name: String,
}

#[must_use]
pub fn is_valid_album_name(name: &str) -> bool {
    ALBUM_NAME_RE.is_match(name)
}

#[must_use]
pub fn build_album_prefix(album: &str) -> String {
    format!("{album}{KEY_SEPARATOR}")
}

#[must_use]
pub fn build_photo_key(album: &str, file_name: &str) -> String {
    format!("{album}{KEY_SEPARATOR}{file_name}")
}

/// Returns the album name if `key` is an album marker (`<album>/`).
#[must_use]
pub fn parse_album_prefix(key: &str) -> Option<&str> {
    ALBUM_PREFIX_RE
        .captures(key)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Splits a photo key into album and file name. Keys that are not directly
/// inside an album, or that lack a `.jpg`/`.jpeg` extension, yield `None`.
#[must_use]
pub fn parse_photo_key(key: &str) -> Option<PhotoKey<'_>> {
    let caps = PHOTO_KEY_RE.captures(key)?;
    Some(PhotoKey {
        album: caps.get(1)?.as_str(),
        file_name: caps.get(2)?.as_str(),
    })
}

/// Matches any object stored directly inside one album, photo or not.
pub struct AlbumEntryPattern {
    re: Regex,
}

impl AlbumEntryPattern {
    /// # Errors
    ///
    /// Returns an error if the escaped album name still fails to compile.
    pub fn new(album: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!(r"^{}/([^/]+)$", regex::escape(album)))?;
        Ok(Self { re })
    }

    #[must_use]
    pub fn file_name<'k>(&self, key: &'k str) -> Option<&'k str> {
        self.re
            .captures(key)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Public address of an object, path-style.
#[must_use]
pub fn photo_url(endpoint_url: &str, bucket: &str, key: &str) -> String {
    format!("{}/{bucket}/{key}", endpoint_url.trim_end_matches('/'))
}

#[must_use]
pub fn website_url(bucket: &str) -> String {
    format!("http://{bucket}.{WEBSITE_DOMAIN}/")
}
