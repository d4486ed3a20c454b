use std::io::Write;
use std::path::{Path, PathBuf};

use crate::dialect::{DialectError, Source};

/// Extension of dialect header files
pub const HEADER_FILE_EXT: &str = "h";

/// Returns `path` if it is a file with the extension `ext`, or every file
/// with that extension beneath `path` if it is a directory.  Files are
/// returned in path order so that loading them is deterministic.
pub fn get_files(path: &Path, ext: &str) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = vec![];
    if path.is_dir() {
        for f in std::fs::read_dir(path)? {
            let f = f?;
            let fty = f.file_type()?;
            if fty.is_file() {
                match f.path().extension() {
                    Some(ex) if ex.to_ascii_lowercase() == ext => {
                        files.push(f.path());
                    }
                    _ => (),
                }
            } else if fty.is_dir() {
                let mut sub_files = get_files(&f.path(), ext)?;
                files.append(&mut sub_files);
            }
        }
        files.sort();
    } else {
        match path.extension() {
            Some(ex) if ex.to_ascii_lowercase() == ext => {
                files.push(path.to_path_buf());
            }
            ex => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!(
                        "Is not a dialect header, expected extension {} but got {}",
                        ext,
                        ex.map_or("none".into(), |ex| ex.to_string_lossy())
                    ),
                ));
            }
        }
    }
    Ok(files)
}

pub fn read_source(path: &Path) -> Result<Source, DialectError> {
    Source::from_file(path).map_err(|e| DialectError::Io(format!("{}", path.display()), e))
}

/// Writes `text` to the file at `output`, or to standard output if there is
/// no file.
pub fn write_output(output: Option<&str>, text: &str) -> Result<(), DialectError> {
    let result = match output {
        Some(path) => std::fs::write(path, text),
        None => std::io::stdout().write_all(text.as_bytes()),
    };
    result.map_err(|e| DialectError::Io(output.unwrap_or("<stdout>").into(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_file() {
        let files = get_files(Path::new("lint_sdcc.h"), HEADER_FILE_EXT).unwrap();
        assert_eq!(files, vec![PathBuf::from("lint_sdcc.h")]);
    }

    #[test]
    fn wrong_extension() {
        let err = get_files(Path::new("lint_sdcc.c"), HEADER_FILE_EXT).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn directory() {
        let dir = std::env::temp_dir().join(format!("dialect-shim-io-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("arm")).unwrap();
        std::fs::write(dir.join("b.h"), "#define __b\n").unwrap();
        std::fs::write(dir.join("arm").join("a.H"), "#define __a\n").unwrap();
        std::fs::write(dir.join("notes.txt"), "").unwrap();

        let files = get_files(&dir, HEADER_FILE_EXT).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(files, vec![dir.join("arm").join("a.H"), dir.join("b.h")]);
    }
}
