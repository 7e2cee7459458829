use super::types::{Args, Command};
use crate::domain::is_valid_album_name;
use crate::errors::CloudPhotoError;

pub const MAX_OPTION_LEN: usize = 100;

/// Length check shared by the `--album` and `--photo` options
///
/// # Errors
///
/// Returns an error message if the value is empty or longer than 100 characters.
pub fn check_option_len(value: &str) -> Result<String, String> {
    let len = value.chars().count();
    if len == 0 || len > MAX_OPTION_LEN {
        Err(format!(
            "'{value}' must be between 1 and {MAX_OPTION_LEN} characters long"
        ))
    } else {
        Ok(value.to_string())
    }
}

/// # Errors
///
/// Returns `CloudPhotoError::Validation` if the name is empty or contains `/`.
pub fn check_album_name(album: &str) -> Result<(), CloudPhotoError> {
    if is_valid_album_name(album) {
        Ok(())
    } else {
        Err(CloudPhotoError::Validation(format!(
            "Invalid album name {album}"
        )))
    }
}

/// Validate the album option of whichever command was selected
///
/// # Errors
///
/// Returns `CloudPhotoError::Validation` if an album name is invalid.
pub fn validate(args: &Args) -> Result<(), CloudPhotoError> {
    match &args.command {
        Command::Upload { album, .. }
        | Command::Download { album, .. }
        | Command::Delete { album, .. } => check_album_name(album),
        Command::List { album: Some(album) } => check_album_name(album),
        Command::List { album: None } | Command::Init | Command::MkSite => Ok(()),
    }
}
