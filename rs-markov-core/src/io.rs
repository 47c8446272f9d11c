use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use crate::error::{MarkovError, Result};

/// Reads a text document and returns its content as a single string.
///
/// - Reads the entire file into memory
/// - Drops blank lines
/// - Joins the remaining lines with a single space
///
/// # Errors
/// Returns [`MarkovError::InputUnavailable`] if the file cannot be opened or read.
pub fn read_document<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| MarkovError::InputUnavailable { path: path.to_path_buf(), source })?;

	Ok(contents
		.lines()
		.filter(|line| !line.trim().is_empty())
		.collect::<Vec<_>>()
		.join(" "))
}

/// Extracts the document name (file name without extension).
///
/// Examples:
/// - `"./data/alice.txt"` → `"alice"`
/// - `"alice.txt"` → `"alice"`
pub fn document_name<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists the names (without extension) of all documents with a given
/// extension in a directory, sorted alphabetically.
pub fn list_documents<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut documents = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_stem() {
				documents.push(name.to_string_lossy().to_string());
			}
		}
	}

	documents.sort();
	Ok(documents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn read_document_joins_non_blank_lines() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("doc.txt");
		fs::write(&path, "First line\n\n   \nSecond line\nThird\n").unwrap();

		assert_eq!(read_document(&path).unwrap(), "First line Second line Third");
	}

	#[test]
	fn read_document_reports_missing_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nope.txt");

		match read_document(&path) {
			Err(MarkovError::InputUnavailable { path: reported, source }) => {
				assert_eq!(reported, path);
				assert_eq!(source.kind(), io::ErrorKind::NotFound);
			}
			other => panic!("Expected InputUnavailable, got {other:?}"),
		}
	}

	#[test]
	fn document_name_strips_folder_and_extension() {
		assert_eq!(document_name("./data/alice.txt").unwrap(), "alice");
		assert_eq!(document_name("alice.txt").unwrap(), "alice");
	}

	#[test]
	fn list_documents_filters_on_extension() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "b").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();
		fs::write(dir.path().join("c.bin"), "c").unwrap();
		fs::create_dir(dir.path().join("d.txt")).unwrap();

		assert_eq!(list_documents(dir.path(), "txt").unwrap(), vec!["a", "b"]);
	}
}
