use std::path::Path;
use std::sync::Arc;

use crate::config::{
    ACCESS_KEY_ID_PARAM, BUCKET_PARAM, Config, InitParams, SECRET_ACCESS_KEY_PARAM,
    write_init_params,
};
use crate::errors::Result;
use crate::ports::{ObjectStore, Prompter};
use crate::utils::log_utils::Logger;

use super::CommandOutcome;

/// Asked in this order by `init`
pub const INIT_PROMPTS: [&str; 3] = [ACCESS_KEY_ID_PARAM, SECRET_ACCESS_KEY_PARAM, BUCKET_PARAM];

/// Ask for credentials and bucket, write the config file, then make sure the
/// bucket exists.
///
/// `connect` builds the storage client from the freshly written config.
///
/// # Errors
/// Returns `Config` if an answer is empty (the config file is left as it
/// was), or the error from writing the file, connecting, listing buckets or
/// creating the bucket.
pub fn initialize<F>(
    prompter: &dyn Prompter,
    config_path: &Path,
    logger: &Logger,
    connect: F,
) -> Result<CommandOutcome>
where
    F: FnOnce(&Config) -> Result<Arc<dyn ObjectStore>>,
{
    let [access_key_id, secret_access_key, bucket] = INIT_PROMPTS;
    let params = InitParams {
        access_key_id: prompter.prompt(access_key_id)?,
        secret_access_key: prompter.prompt(secret_access_key)?,
        bucket: prompter.prompt(bucket)?,
    };
    params.validate()?;

    let config = write_init_params(config_path, &params)?;
    logger.info(&format!("Wrote config file {}", config_path.display()));

    let store = connect(&config)?;
    let buckets = store.list_buckets()?;
    if buckets.iter().any(|name| name == &config.bucket) {
        logger.info(&format!("Bucket {} already exists", config.bucket));
    } else {
        store.create_bucket(&config.bucket)?;
    }

    Ok(CommandOutcome::Done)
}
