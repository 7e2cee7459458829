use crate::errors::{CloudPhotoError, Result};
use home::home_dir;
use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_SECTION: &str = "DEFAULT";
pub const CONFIG_RELATIVE_PATH: &str = ".config/cloudphoto/cloudphotorc";

pub const ACCESS_KEY_ID_PARAM: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY_PARAM: &str = "aws_secret_access_key";
pub const BUCKET_PARAM: &str = "bucket";
pub const REGION_PARAM: &str = "region";
pub const ENDPOINT_URL_PARAM: &str = "endpoint_url";

// Values shipped in the sample config, meaning "not filled in yet"
pub const PLACEHOLDER_ACCESS_KEY_ID: &str = "INPUT_AWS_ACCESS_KEY_ID";
pub const PLACEHOLDER_SECRET_ACCESS_KEY: &str = "INPUT_AWS_SECRET_ACCESS_KEY";
pub const PLACEHOLDER_BUCKET: &str = "INPUT_BUCKET_NAME";

pub const DEFAULT_REGION: &str = "ru-central1";
pub const DEFAULT_ENDPOINT_URL: &str = "https://storage.yandexcloud.net";

/// Settings every storage command needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub region: String,
    pub endpoint_url: String,
}

/// Values collected by `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitParams {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
}

/// Location of the per-user config file
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    home_dir()
        .map(|home| home.join(CONFIG_RELATIVE_PATH))
        .ok_or_else(|| CloudPhotoError::Config("Home directory could not be determined".into()))
}

fn is_param_invalid(value: &str, placeholder: Option<&str>) -> bool {
    let value = value.trim();
    value.is_empty() || placeholder.is_some_and(|p| value == p)
}

impl Config {
    /// Load and validate the config file.
    ///
    /// # Errors
    ///
    /// Returns `CloudPhotoError::Config` if the file is missing or malformed, a
    /// parameter is absent, empty, or still set to its placeholder.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CloudPhotoError::Config(format!(
                "Config file {} not found, run `cloudphoto init` first",
                path.display()
            )));
        }

        let conf = Ini::load_from_file(path)
            .map_err(|e| CloudPhotoError::Config(format!("Invalid config file: {e}")))?;
        let section = conf
            .section(Some(CONFIG_SECTION))
            .ok_or_else(|| CloudPhotoError::Config("Invalid config file".into()))?;

        let get = |param: &str| {
            section
                .get(param)
                .map(|v| v.trim().to_string())
                .ok_or_else(|| {
                    CloudPhotoError::Config(format!("Invalid config file: missing {param}"))
                })
        };

        let config = Self {
            access_key_id: get(ACCESS_KEY_ID_PARAM)?,
            secret_access_key: get(SECRET_ACCESS_KEY_PARAM)?,
            bucket: get(BUCKET_PARAM)?,
            region: get(REGION_PARAM)?,
            endpoint_url: get(ENDPOINT_URL_PARAM)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `CloudPhotoError::Config` if any parameter is empty or unfilled.
    pub fn validate(&self) -> Result<()> {
        if is_param_invalid(&self.access_key_id, Some(PLACEHOLDER_ACCESS_KEY_ID))
            || is_param_invalid(&self.secret_access_key, Some(PLACEHOLDER_SECRET_ACCESS_KEY))
            || is_param_invalid(&self.bucket, Some(PLACEHOLDER_BUCKET))
            || is_param_invalid(&self.endpoint_url, None)
            || is_param_invalid(&self.region, None)
        {
            return Err(CloudPhotoError::Config(
                "Not all params in config file are filled in".into(),
            ));
        }
        Ok(())
    }
}

impl InitParams {
    /// # Errors
    ///
    /// Returns `CloudPhotoError::Config` if any value is empty.
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty()
            || self.secret_access_key.is_empty()
            || self.bucket.is_empty()
        {
            return Err(CloudPhotoError::Config(
                "Required parameters are not defined".into(),
            ));
        }
        Ok(())
    }
}

/// Merge the init values into the config file at `path`, creating it if needed.
///
/// Keys already present in the file are kept; region and endpoint fall back to
/// the defaults when absent or empty.
///
/// # Errors
///
/// Returns an error if the params are incomplete, the existing file cannot be
/// parsed, or the file cannot be written.
pub fn write_init_params(path: &Path, params: &InitParams) -> Result<Config> {
    params.validate()?;

    let mut conf = if path.is_file() {
        Ini::load_from_file(path)
            .map_err(|e| CloudPhotoError::Config(format!("Invalid config file: {e}")))?
    } else {
        Ini::new()
    };

    let existing = |param: &str, default: &str| {
        conf.section(Some(CONFIG_SECTION))
            .and_then(|s| s.get(param))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_string()
    };
    let region = existing(REGION_PARAM, DEFAULT_REGION);
    let endpoint_url = existing(ENDPOINT_URL_PARAM, DEFAULT_ENDPOINT_URL);

    conf.with_section(Some(CONFIG_SECTION))
        .set(ACCESS_KEY_ID_PARAM, params.access_key_id.as_str())
        .set(SECRET_ACCESS_KEY_PARAM, params.secret_access_key.as_str())
        .set(BUCKET_PARAM, params.bucket.as_str())
        .set(REGION_PARAM, region.as_str())
        .set(ENDPOINT_URL_PARAM, endpoint_url.as_str());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    conf.write_to_file(path)?;

    Ok(Config {
        access_key_id: params.access_key_id.clone(),
        secret_access_key: params.secret_access_key.clone(),
        bucket: params.bucket.clone(),
        region,
        endpoint_url,
    })
}
