use std::fs;
use std::path::Path;

use crate::utils::error::Result;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Check whether a file name marks a file the content walker must skip
pub fn is_ignored_name(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}
