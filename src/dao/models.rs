use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Numeric identifier shared by catalog and overlay game records.
pub type GameId = u64;

/// Game record as stored in the bundled catalog and in the overlay file.
///
/// Field order matches the on-disk layout: `id`, `title`, `description`, `image`, `guide`.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Identifier, unique within the merged catalog/overlay view.
    pub id: GameId,
    /// Display title of the game.
    pub title: String,
    /// Short description shown in listings.
    pub description: String,
    /// Image filename or path reference.
    pub image: String,
    /// Guide body. Catalog records may ship without one.
    #[serde(default)]
    pub guide: Option<String>,
}

impl GameEntity {
    /// Copy of this record with a guaranteed guide body, falling back to `placeholder`.
    pub fn with_guide_or(&self, placeholder: &str) -> Self {
        Self {
            guide: Some(
                self.guide
                    .clone()
                    .unwrap_or_else(|| placeholder.to_string()),
            ),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(guide: Option<&str>) -> GameEntity {
        GameEntity {
            id: 3,
            title: "Hollow Knight".into(),
            description: "Metroidvania".into(),
            image: "hollow.jpg".into(),
            guide: guide.map(Into::into),
        }
    }

    #[test]
    fn missing_guide_is_omitted_from_json() {
        let json = serde_json::to_value(entity(None)).unwrap();
        assert!(json.get("guide").is_none());
        assert_eq!(json["title"], "Hollow Knight");
    }

    #[test]
    fn missing_guide_deserializes_to_none() {
        let parsed: GameEntity = serde_json::from_str(
            r#"{"id": 1, "title": "T", "description": "D", "image": "i.jpg"}"#,
        )
        .unwrap();
        assert_eq!(parsed.guide, None);
    }

    #[test]
    fn with_guide_or_only_fills_missing_guides() {
        assert_eq!(
            entity(None).with_guide_or("soon").guide.as_deref(),
            Some("soon")
        );
        assert_eq!(
            entity(Some("kill the bosses")).with_guide_or("soon").guide.as_deref(),
            Some("kill the bosses")
        );
    }
}
