use crate::errors::ConfigError;
use std::path::{Path, PathBuf};

/// Where the game center contract address comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressSource {
    /// The address was given directly, e.g. `0x1234abc`.
    Literal(String),
    /// A text file whose first line is the address.
    File(PathBuf),
}

impl AddressSource {
    /// An address file, when present, takes precedence over the literal.
    pub fn from_args(addr: String, addr_file: Option<PathBuf>) -> Self {
        match addr_file {
            Some(path) => AddressSource::File(path),
            None => AddressSource::Literal(addr),
        }
    }

    pub fn resolve(&self) -> Result<String, ConfigError> {
        let address = match self {
            AddressSource::Literal(addr) => addr.clone(),
            AddressSource::File(path) => read_first_line(path)?,
        };
        tracing::debug!(?address, source = ?self, "resolved game center contract address");
        Ok(address)
    }
}

/// Returns the first line of `path`. Content is kept as stored, trailing
/// whitespace included, but the terminator is normalized: `\r\n`, `\r` and `\n`
/// all end the line and come back as `\n`. An empty file gives an empty string.
pub fn read_first_line(path: &Path) -> Result<String, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::ReadAddressFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(first_line(&contents))
}

fn first_line(contents: &str) -> String {
    match contents.find(['\r', '\n']) {
        Some(end) => format!("{}\n", &contents[..end]),
        None => contents.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn write_address_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address.txt");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[rstest]
    #[case::trailing_newline("0xabc\n", "0xabc\n")]
    #[case::no_newline("0xabc", "0xabc")]
    #[case::only_first_line("0xabc\n0xdef\n", "0xabc\n")]
    #[case::keeps_whitespace("  0xabc \t\n", "  0xabc \t\n")]
    #[case::crlf("0xabc\r\n0xdef\r\n", "0xabc\n")]
    #[case::lone_cr("0xabc\r0xdef\n", "0xabc\n")]
    #[case::cr_at_end("0xabc\r", "0xabc\n")]
    #[case::empty_file("", "")]
    fn test_first_line_content_kept_terminator_normalized(
        #[case] contents: &str,
        #[case] expected: &str,
    ) {
        let (_dir, path) = write_address_file(contents);
        let address = AddressSource::File(path).resolve().unwrap();
        assert_eq!(address, expected);
    }

    #[test]
    fn test_literal_resolves_to_itself() {
        let source = AddressSource::Literal("0x1234abc".to_owned());
        assert_eq!(source.resolve().unwrap(), "0x1234abc");
    }

    #[test]
    fn test_file_takes_precedence_over_literal() {
        let source = AddressSource::from_args("0x0".to_owned(), Some("addr.txt".into()));
        assert_eq!(source, AddressSource::File("addr.txt".into()));

        let source = AddressSource::from_args("0x0".to_owned(), None);
        assert_eq!(source, AddressSource::Literal("0x0".to_owned()));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");

        let err = AddressSource::File(missing.clone()).resolve().unwrap_err();
        assert_matches!(
            err,
            ConfigError::ReadAddressFile { ref path, ref source }
                if *path == missing && source.kind() == std::io::ErrorKind::NotFound
        );
    }
}
