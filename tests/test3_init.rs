mod common;

use std::fs;
use std::sync::Arc;

use cloudphoto::app::initialize;
use cloudphoto::config::Config;
use cloudphoto::errors::Result;
use cloudphoto::ports::{ObjectStore, Prompter};
use cloudphoto::utils::log_utils::Logger;
use cloudphoto::{CloudPhotoError, CommandOutcome};
use common::MemoryStore;
use tempfile::TempDir;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Answers prompts in order
struct ScriptedPrompter {
    answers: std::sync::Mutex<Vec<&'static str>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&'static str]) -> Self {
        let mut answers = answers.to_vec();
        answers.reverse();
        Self {
            answers: std::sync::Mutex::new(answers),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&self, _label: &str) -> Result<String> {
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_default()
            .to_string())
    }
}

#[test]
fn init_writes_config_and_creates_bucket() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join(".config/cloudphoto/cloudphotorc");
    let store = Arc::new(MemoryStore::default());
    let handle = store.clone();

    let outcome = initialize(
        &ScriptedPrompter::new(&["AKIA", "s3cr3t", "photos"]),
        &path,
        &Logger::new(0),
        move |_| Ok(handle as Arc<dyn ObjectStore>),
    )?;

    assert_eq!(outcome, CommandOutcome::Done);
    let config = Config::load(&path)?;
    assert_eq!(config.access_key_id, "AKIA");
    assert_eq!(config.bucket, "photos");
    assert_eq!(store.buckets(), vec!["photos"]);
    Ok(())
}

#[test]
fn init_twice_creates_bucket_once() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("cloudphotorc");
    let store = Arc::new(MemoryStore::default());

    for _ in 0..2 {
        let handle = store.clone();
        initialize(
            &ScriptedPrompter::new(&["AKIA", "s3cr3t", "photos"]),
            &path,
            &Logger::new(0),
            move |_| Ok(handle as Arc<dyn ObjectStore>),
        )?;
    }

    assert_eq!(store.buckets(), vec!["photos"]);
    Ok(())
}

#[test]
fn init_with_empty_bucket_keeps_existing_config() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("cloudphotorc");
    let original = "[DEFAULT]\naws_access_key_id = old\n";
    fs::write(&path, original)?;

    let result = initialize(
        &ScriptedPrompter::new(&["AKIA", "s3cr3t", ""]),
        &path,
        &Logger::new(0),
        |_| Err(CloudPhotoError::Storage("must not connect".into())),
    );

    assert!(matches!(result, Err(CloudPhotoError::Config(_))));
    assert_eq!(fs::read_to_string(&path)?, original);
    Ok(())
}
