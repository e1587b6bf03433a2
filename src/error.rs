use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiningError {
    // The input dataset is missing, unreadable, or not CSV text.
    #[error("Failed to read dataset {}: {source}", .path.display())]
    DataFormat {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;

#[cfg(test)]
mod tests {
    use super::MiningError;
    use std::io;

    #[test]
    fn test_data_format_message_names_path() {
        let err = MiningError::DataFormat {
            path: "baskets.csv".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file").into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("baskets.csv"));
        assert!(msg.contains("no such file"));
    }
}
