//! Serializes the assembled class source to disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PogenError, Result};

/// Writes `source` to `path`, creating missing parent directories.
///
/// An existing file at `path` is overwritten without confirmation; the tool
/// never merges with previously generated content.
pub fn write_page_object(path: &Path, source: &str) -> Result<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent).map_err(|err| PogenError::Write {
				path: parent.to_path_buf(),
				source: err,
			})?;
		}
	}

	fs::write(path, source).map_err(|err| PogenError::Write {
		path: path.to_path_buf(),
		source: err,
	})?;

	debug!(target = "pogen", path = %path.display(), bytes = source.len(), "page object written");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_into_nested_directories() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pages").join("generated").join("HomePage.js");

		write_page_object(&path, "class HomePage {}\n").unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "class HomePage {}\n");
	}

	#[test]
	fn overwrites_existing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("Page.js");
		fs::write(&path, "stale contents").unwrap();

		write_page_object(&path, "fresh contents").unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "fresh contents");
	}

	#[test]
	fn bare_filename_needs_no_directory_creation() {
		let dir = tempfile::tempdir().unwrap();
		let previous = std::env::current_dir().unwrap();
		std::env::set_current_dir(dir.path()).unwrap();

		let result = write_page_object(Path::new("Page.js"), "class Page {}\n");

		std::env::set_current_dir(previous).unwrap();
		result.unwrap();
		assert!(dir.path().join("Page.js").exists());
	}

	#[test]
	fn unwritable_path_reports_the_attempted_path() {
		let dir = tempfile::tempdir().unwrap();
		// A file where a directory is needed makes create_dir_all fail.
		let blocker = dir.path().join("blocked");
		fs::write(&blocker, "").unwrap();
		let path = blocker.join("Page.js");

		let err = write_page_object(&path, "x").unwrap_err();
		assert_eq!(err.code(), "WRITE_FAILED");
		assert!(err.to_string().contains("blocked"));
	}
}
