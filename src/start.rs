use std::sync::Arc;

use crate::app::{AppCore, CommandOutcome, initialize};
use crate::args::{Args, Command};
use crate::config::{Config, default_config_path};
use crate::errors::Result;
use crate::infra::pages::HtmlPages;
use crate::infra::prompt_adapter::TerminalPrompter;
use crate::infra::s3_adapter::S3ObjectStore;
use crate::ports::ObjectStore;
use crate::utils::log_utils::Logger;

/// Run the selected command against the configured bucket
///
/// # Errors
///
/// Returns the first error reported by config loading or the command itself.
pub fn run_app(args: &Args) -> Result<CommandOutcome> {
    let logger = Logger::new(args.verbose);
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    logger.debug(&format!("Using config file {}", config_path.display()));

    let open_app = || -> Result<AppCore> {
        let config = Config::load(&config_path)?;
        let store = Arc::new(S3ObjectStore::new(&config, logger)?);
        Ok(AppCore::new(store, config, logger))
    };

    match &args.command {
        Command::Init => initialize(&TerminalPrompter, &config_path, &logger, |config| {
            Ok(Arc::new(S3ObjectStore::new(config, logger)?) as Arc<dyn ObjectStore>)
        }),
        Command::Upload { album, path } => open_app()?.upload(album, path),
        Command::Download { album, path } => open_app()?.download(album, path),
        Command::List { album } => open_app()?.list(album.as_deref()),
        Command::Delete { album, photo } => open_app()?.delete(album, photo.as_deref()),
        Command::MkSite => open_app()?.make_site(&HtmlPages::default()),
    }
}
