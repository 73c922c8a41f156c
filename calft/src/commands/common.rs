//! Shared utilities for calft commands.

use std::fs;
use std::io::Read as _;
use std::path::Path;

use crate::error::Result;

/// Source name recorded for standard-input runs.
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// A loaded input buffer plus the source name to record on tokens.
#[derive(Debug)]
pub struct Input {
    /// The whole input text.
    pub text: String,
    /// Source name: the file path, `<stdin>`, or a caller override.
    pub source_name: String,
}

/// Load the input for a subcommand.
///
/// A missing path or the conventional `-` reads standard input.
/// `source_name` overrides the recorded name when given.
pub fn load_input(file: Option<&Path>, source_name: Option<&str>) -> Result<Input> {
    let (text, default_name) = match file {
        Some(path) if path.as_os_str() != "-" => {
            (fs::read_to_string(path)?, path.display().to_string())
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            (buffer, STDIN_SOURCE_NAME.to_string())
        }
    };
    let source_name = source_name
        .map(str::to_string)
        .unwrap_or(default_name);
    Ok(Input { text, source_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(1 2)").unwrap();
        let input = load_input(Some(file.path()), None).unwrap();
        assert_eq!(input.text, "(1 2)");
        assert_eq!(input.source_name, file.path().display().to_string());
    }

    #[test]
    fn test_load_input_source_name_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "x").unwrap();
        let input = load_input(Some(file.path()), Some("demo.calf")).unwrap();
        assert_eq!(input.source_name, "demo.calf");
    }

    #[test]
    fn test_load_input_missing_file_is_io_error() {
        let err = load_input(Some(Path::new("/nonexistent/x.calf")), None).unwrap_err();
        assert!(matches!(err, crate::error::CalftError::Io(_)));
    }
}
