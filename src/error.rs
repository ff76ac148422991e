use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the command-line front end.
///
/// Tokenizing itself cannot fail; these cover getting text in and tokens out.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No file given")]
    NoFile,

    #[error("File `{}` does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File `{}` cannot be opened: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    /// Stable diagnostic code. `0.x` are usage errors, `1.x` are file and I/O
    /// errors.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NoFile => "0.1",
            Error::FileNotFound { .. } => "1.0",
            Error::Unreadable { .. } => "1.1",
            Error::Config(_) => "1.2",
            Error::Output(_) => "1.3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::FileNotFound {
            path: PathBuf::from("main.zy"),
        };
        assert_eq!(err.to_string(), "File `main.zy` does not exist");
        assert_eq!(err.code(), "1.0");

        assert_eq!(Error::NoFile.to_string(), "No file given");
    }

    #[test]
    fn test_codes() {
        let errors = [
            Error::NoFile,
            Error::FileNotFound {
                path: PathBuf::from("a.zy"),
            },
            Error::Unreadable {
                path: PathBuf::from("a.zy"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            Error::Config("bad".to_string()),
            Error::Output("closed".to_string()),
        ];
        let codes: Vec<_> = errors.iter().map(Error::code).collect();
        assert_eq!(codes, vec!["0.1", "1.0", "1.1", "1.2", "1.3"]);
    }

    #[test]
    fn test_unreadable_keeps_source() {
        let err = Error::Unreadable {
            path: PathBuf::from("a.zy"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
        };
        assert_eq!(err.code(), "1.1");
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("not utf-8"));
    }
}
