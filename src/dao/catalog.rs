//! Sources for the read-only game catalog.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tokio::fs;

use crate::dao::{
    models::GameEntity,
    storage::{StorageError, StorageResult, decode_games},
};

/// Catalog bundled into the binary at build time.
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");
/// Pseudo-path used in errors about the bundled catalog.
const BUNDLED_CATALOG_PATH: &str = "assets/catalog.json";

/// Decode the catalog shipped with the binary.
pub fn bundled() -> StorageResult<Vec<GameEntity>> {
    let path = Path::new(BUNDLED_CATALOG_PATH);
    let games = decode_games(path, BUNDLED_CATALOG)?;
    ensure_unique_ids(path, &games)?;
    Ok(games)
}

/// Read a catalog from an external JSON file.
///
/// Unlike the overlay, a missing catalog file is an error, and so is an id used twice.
pub async fn read_from(path: &Path) -> StorageResult<Vec<GameEntity>> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Read {
            path: PathBuf::from(path),
            source,
        })?;
    let games = decode_games(path, &contents)?;
    ensure_unique_ids(path, &games)?;
    Ok(games)
}

fn ensure_unique_ids(path: &Path, games: &[GameEntity]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(games.len());
    match games.iter().find(|game| !seen.insert(game.id)) {
        Some(duplicate) => Err(StorageError::DuplicateId {
            path: PathBuf::from(path),
            id: duplicate.id,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes_with_unique_ids() {
        let games = bundled().unwrap();
        assert!(!games.is_empty());

        let ids = games.iter().map(|game| game.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn bundled_catalog_has_a_game_without_guide() {
        let games = bundled().unwrap();
        assert!(games.iter().any(|game| game.guide.is_none()));
    }

    #[tokio::test]
    async fn missing_external_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_from(&dir.path().join("catalog.json")).await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[tokio::test]
    async fn external_catalog_with_repeated_id_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "title": "Celeste", "description": "Climb", "image": "c.jpg"},
                {"id": 2, "title": "Hades", "description": "Escape", "image": "h.jpg"},
                {"id": 1, "title": "Celeste again", "description": "Climb", "image": "c.jpg"}
            ]"#,
        )
        .unwrap();

        let err = read_from(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::DuplicateId { id: 1, .. }));
    }
}
