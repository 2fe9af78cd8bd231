use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Source folder '{}' does not exist.", .0.display())]
    InvalidSource(PathBuf),

    #[error("Cannot store '{}' in the package: path is not valid UTF-8", .0.display())]
    InvalidEntryName(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to read source folder: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Console error: {0}")]
    Console(std::io::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    /// Process exit status reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Custom(_) | Error::Console(_) => 1,
            Error::InvalidSource(_) => 2,
            Error::Io(_) | Error::Walk(_) => 3,
            Error::Zip(_) => 4,
            Error::InvalidEntryName(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_fault() {
        let invalid = Error::InvalidSource(PathBuf::from("missing"));
        let io = Error::from(std::io::Error::other("disk full"));
        let name = Error::InvalidEntryName(PathBuf::from("bad"));

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(io.exit_code(), 3);
        assert_eq!(name.exit_code(), 5);
        assert_eq!(Error::custom("oops").exit_code(), 1);
    }

    #[test]
    fn test_invalid_source_message() {
        let err = Error::InvalidSource(PathBuf::from("lesson1"));
        assert_eq!(err.to_string(), "Source folder 'lesson1' does not exist.");
    }
}
