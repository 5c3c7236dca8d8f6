//! Filesystem collaborator for metaxml sessions.

pub mod files;

pub use files::{
    collect_files, exists, is_dir, is_file, read_to_string, read_to_string_sync, write_string,
    write_string_sync,
};
