#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use cloudphoto::CloudPhotoError;
use cloudphoto::app::AppCore;
use cloudphoto::config::Config;
use cloudphoto::errors::Result;
use cloudphoto::ports::ObjectStore;
use cloudphoto::utils::log_utils::Logger;

pub const BUCKET: &str = "photos";

/// Bucket kept in memory, listed in insertion order
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<Vec<(String, Vec<u8>)>>,
    buckets: Mutex<Vec<String>>,
    website: Mutex<Option<(String, String)>>,
    public_read: Mutex<bool>,
}

impl MemoryStore {
    pub fn with_keys(keys: &[&str]) -> Self {
        let store = Self::default();
        for key in keys {
            store.insert(key, Vec::new());
        }
        store
    }

    pub fn insert(&self, key: &str, body: Vec<u8>) {
        let mut objects = self.objects.lock().unwrap();
        match objects.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = body,
            None => objects.push((key.to_string(), body)),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn body(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, body)| body.clone())
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.body(key).map(|b| String::from_utf8(b).unwrap())
    }

    pub fn website(&self) -> Option<(String, String)> {
        self.website.lock().unwrap().clone()
    }

    pub fn is_public(&self) -> bool {
        *self.public_read.lock().unwrap()
    }

    pub fn buckets(&self) -> Vec<String> {
        self.buckets.lock().unwrap().clone()
    }
}

impl ObjectStore for MemoryStore {
    fn list_buckets(&self) -> Result<Vec<String>> {
        Ok(self.buckets())
    }

    fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.buckets.lock().unwrap().push(bucket.to_string());
        Ok(())
    }

    fn list_objects(&self, _bucket: &str, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .keys()
            .into_iter()
            .filter(|k| k.starts_with(prefix))
            .collect())
    }

    fn put_object(
        &self,
        _bucket: &str,
        key: &str,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<()> {
        self.insert(key, body);
        Ok(())
    }

    fn upload_file(&self, _bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        self.insert(key, fs::read(local_path)?);
        Ok(())
    }

    fn download_file(&self, _bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        let body = self
            .body(key)
            .ok_or_else(|| CloudPhotoError::Storage(format!("NoSuchKey: {key}")))?;
        fs::write(local_path, body)?;
        Ok(())
    }

    fn delete_object(&self, _bucket: &str, key: &str) -> Result<()> {
        self.objects.lock().unwrap().retain(|(k, _)| k != key);
        Ok(())
    }

    fn delete_objects(&self, _bucket: &str, keys: &[String]) -> Result<()> {
        self.objects
            .lock()
            .unwrap()
            .retain(|(k, _)| !keys.contains(k));
        Ok(())
    }

    fn set_public_read(&self, _bucket: &str) -> Result<()> {
        *self.public_read.lock().unwrap() = true;
        Ok(())
    }

    fn configure_website(
        &self,
        _bucket: &str,
        index_document: &str,
        error_document: &str,
    ) -> Result<()> {
        *self.website.lock().unwrap() =
            Some((index_document.to_string(), error_document.to_string()));
        Ok(())
    }
}

pub fn config() -> Config {
    Config {
        access_key_id: "key".into(),
        secret_access_key: "secret".into(),
        bucket: BUCKET.into(),
        region: "ru-central1".into(),
        endpoint_url: "https://storage.yandexcloud.net".into(),
    }
}

pub fn app(store: &Arc<MemoryStore>) -> AppCore {
    AppCore::new(store.clone(), config(), Logger::new(0))
}

/// Directory with one file per name, content derived from the name
pub fn photo_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    for name in names {
        fs::write(dir.path().join(name), format!("bytes of {name}")).unwrap();
    }
    dir
}
