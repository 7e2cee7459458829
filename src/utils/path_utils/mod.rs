mod dir_checks;
mod expansion;
mod photo_files;

pub use dir_checks::{check_readable_dir, check_writable_dir};
pub use photo_files::collect_photo_files;
