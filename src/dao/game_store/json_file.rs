use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tokio::fs;

use crate::dao::{
    game_store::GameStore,
    models::GameEntity,
    storage::{StorageError, StorageResult, decode_games, encode_games},
};

/// Overlay store persisting the whole collection into a single JSON file.
///
/// Every save rewrites the file in full. Writes are not atomic: a crash mid-write can leave a
/// truncated file, which the next load reports as malformed.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: Arc<Path>,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(path: Arc<Path>) -> StorageResult<Vec<GameEntity>> {
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        decode_games(&path, &contents)
    }

    async fn write(path: Arc<Path>, games: Vec<GameEntity>) -> StorageResult<()> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let bytes = encode_games(&path, &games)?;
        fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        Box::pin(Self::read(self.path.clone()))
    }

    fn save(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(Self::write(self.path.clone(), games))
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
