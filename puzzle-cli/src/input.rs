//! Loading the puzzle input

use crate::config::InputSource;
use crate::error::CliError;
use std::io::Read;
use std::path::PathBuf;

/// Read the whole input before any solver runs
pub fn read_input(source: &InputSource) -> Result<String, CliError> {
    match source {
        InputSource::Stdin => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| CliError::Input {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(input)
        }
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.clone(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn reads_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Tile 1:\n#.\n.#\n").unwrap();
        let input = read_input(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(input, "Tile 1:\n#.\n.#\n");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_input(&InputSource::File(path.clone())).unwrap_err();
        assert!(matches!(&err, CliError::Input { path: p, .. } if *p == path));
        assert!(err.to_string().contains("absent.txt"));
    }
}
