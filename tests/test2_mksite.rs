mod common;

use std::sync::Arc;

use cloudphoto::CommandOutcome;
use cloudphoto::infra::pages::HtmlPages;
use common::{MemoryStore, app, photo_dir};

const SITE_URL: &str = "http://photos.website.yandexcloud.net/";

#[test]
fn publishes_index_and_album_pages() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::default());
    let pics = photo_dir(&["beach.jpg"]);
    app(&store).upload("vacation", pics.path())?;

    let outcome = app(&store).make_site(&HtmlPages::default())?;

    assert_eq!(outcome, CommandOutcome::Output(SITE_URL.into()));
    assert!(store.is_public());
    assert_eq!(
        store.website(),
        Some(("index.html".to_string(), "error.html".to_string()))
    );

    let keys = store.keys();
    for page in ["error.html", "index.html", "album1.html"] {
        assert!(keys.contains(&page.to_string()), "{page} not published");
    }
    assert!(!keys.contains(&"album2.html".to_string()));

    let index = store.text("index.html").unwrap();
    assert!(index.contains("album1.html"));
    assert!(index.contains("vacation"));

    let album = store.text("album1.html").unwrap();
    assert!(album.contains("beach.jpg"));
    assert!(album.contains("storage.yandexcloud.net"));
    Ok(())
}

#[test]
fn empty_bucket_gets_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::default());

    let outcome = app(&store).make_site(&HtmlPages::default())?;

    assert_eq!(outcome, CommandOutcome::Output(SITE_URL.into()));
    assert_eq!(store.keys(), vec!["error.html", "index.html"]);
    assert!(store.text("index.html").unwrap().contains("No albums"));
    Ok(())
}

#[test]
fn republishing_overwrites_pages() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryStore::with_keys(&["vacation/", "paris/"]));

    app(&store).make_site(&HtmlPages::default())?;
    app(&store).make_site(&HtmlPages::new("Family photos"))?;

    let keys = store.keys();
    assert_eq!(
        keys.iter().filter(|k| k.as_str() == "index.html").count(),
        1
    );
    assert!(keys.contains(&"album2.html".to_string()));
    assert!(store.text("index.html").unwrap().contains("Family photos"));
    Ok(())
}
