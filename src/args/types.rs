use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{check_option_len, validate};
use crate::errors::CloudPhotoError;

#[derive(Parser, Debug, Clone)]
#[command(name = "cloudphoto", author, version, about, long_about = None)]
pub struct Args {
    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of ~/.config/cloudphoto/cloudphotorc
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cloudphoto program initialization
    Init,

    /// Upload photos to cloud storage
    Upload {
        #[arg(long, value_name = "NAME", value_parser = check_option_len)]
        album: String,
        /// Directory holding the *.jpg / *.jpeg files
        #[arg(long, value_name = "DIR", default_value = ".")]
        path: PathBuf,
    },

    /// Download photos from cloud storage
    Download {
        #[arg(long, value_name = "NAME", value_parser = check_option_len)]
        album: String,
        /// Destination directory, created if missing
        #[arg(long, value_name = "DIR", default_value = ".")]
        path: PathBuf,
    },

    /// View a list of albums and photos
    List {
        #[arg(long, value_name = "NAME", value_parser = check_option_len)]
        album: Option<String>,
    },

    /// Delete photos or albums
    Delete {
        #[arg(long, value_name = "NAME", value_parser = check_option_len)]
        album: String,
        #[arg(long, value_name = "NAME", value_parser = check_option_len)]
        photo: Option<String>,
    },

    /// Create and publish photo archive web page
    #[command(name = "mksite")]
    MkSite,
}

impl Args {
    /// Validate album names before any storage call is made
    ///
    /// # Errors
    ///
    /// Returns `CloudPhotoError::Validation` for an album name containing `/`.
    pub fn validate(&self) -> Result<(), CloudPhotoError> {
        validate(self)
    }
}
