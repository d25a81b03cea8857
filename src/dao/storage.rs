use std::{
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};
use thiserror::Error;

use crate::dao::models::{GameEntity, GameId};

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the file-backed stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file exists but could not be read.
    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The backing file was read but does not hold a JSON array of games.
    #[error("malformed game data in `{path}`")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The directory holding the backing file could not be created.
    #[error("failed to create directory `{path}`")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Encoding the records to JSON failed.
    #[error("failed to serialize game data for `{path}`")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Writing the backing file failed.
    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Two records in a file that must hold unique ids share one.
    #[error("duplicate game id `{id}` in `{path}`")]
    DuplicateId { path: PathBuf, id: GameId },
}

/// Indentation used for every game file written by the service.
const JSON_INDENT: &[u8] = b"    ";

/// Decode a JSON array of games. Blank contents decode to an empty list.
pub fn decode_games(path: &Path, contents: &str) -> StorageResult<Vec<GameEntity>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(contents).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode games as indented UTF-8 JSON, keeping non-ASCII characters as-is.
pub fn encode_games(path: &Path, games: &[GameEntity]) -> StorageResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    games
        .serialize(&mut serializer)
        .map_err(|source| StorageError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buffer)
}
