use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("'{}' does not exist or is not a directory", path.display()))]
    NotADirectory { path: PathBuf },

    #[snafu(display("Failed to read directory '{}': {source}", path.display()))]
    ListDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
