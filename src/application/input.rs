use std::io::Read;
use std::path::{Path, PathBuf};

use compio::fs;
use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::debug;

const STDIN_MARKER: &str = "-";

/// Where the flat path listing comes from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputSource {
    #[display("standard input")]
    Stdin,
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new(STDIN_MARKER) => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

impl InputSource {
    /// Reads the listing and returns one path per non-empty line.
    pub async fn read_paths(&self) -> Result<Vec<String>, InputError> {
        let bytes = match self {
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context(ReadSnafu {
                        source_name: self.to_string(),
                    })?;
                bytes
            }
            InputSource::File(path) => fs::read(path).await.context(ReadSnafu {
                source_name: self.to_string(),
            })?,
        };
        debug!("Read {} bytes from {}", bytes.len(), self);

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            source_name: self.to_string(),
        })?;
        Ok(parse_paths(&contents))
    }
}

/// Splits a listing into paths. `\r\n` endings are accepted and empty lines
/// are dropped, since they would each become an empty-named top-level node.
pub fn parse_paths(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Snafu)]
pub enum InputError {
    #[snafu(display("Failed to read paths from {}", source_name))]
    ReadError {
        source_name: String,
        source: std::io::Error,
    },
    #[snafu(display("Paths read from {} are not valid UTF-8", source_name))]
    EncodingError {
        source_name: String,
        source: std::string::FromUtf8Error,
    },
}
