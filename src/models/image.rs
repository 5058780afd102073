//! Per-entity image lists and the derived thumbnail URL.

use serde::{Deserialize, Serialize};

/// Role of an image attached to an event or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageKind {
    /// Cover image shown on list cards
    Promotional,
    Gallery,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(rename = "type", alias = "imageType")]
    pub kind: ImageKind,
}

/// Pick the promotional image URL, else a non-empty legacy thumbnail URL.
pub fn resolve_thumbnail(images: &[Image], legacy: Option<&str>) -> Option<String> {
    images
        .iter()
        .find(|image| image.kind == ImageKind::Promotional)
        .map(|image| image.url.clone())
        .or_else(|| {
            legacy
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
        })
}

/// Records that carry an image list and a flat thumbnail URL.
pub trait HasImages {
    fn images(&self) -> &[Image];
    fn thumbnail_url_mut(&mut self) -> &mut Option<String>;

    /// Overwrite the flat `thumbnail_url` with the derived value.
    fn resolve_thumbnail(&mut self) {
        let legacy = self.thumbnail_url_mut().take();
        let resolved = resolve_thumbnail(self.images(), legacy.as_deref());
        *self.thumbnail_url_mut() = resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, kind: ImageKind) -> Image {
        Image {
            id: None,
            url: url.to_string(),
            kind,
        }
    }

    #[test]
    fn test_promotional_wins() {
        let images = vec![
            image("https://cdn/gallery-1.jpg", ImageKind::Gallery),
            image("https://cdn/cover.jpg", ImageKind::Promotional),
            image("https://cdn/other.jpg", ImageKind::Other),
        ];
        assert_eq!(
            resolve_thumbnail(&images, Some("https://cdn/legacy.jpg")).as_deref(),
            Some("https://cdn/cover.jpg")
        );
    }

    #[test]
    fn test_falls_back_to_legacy() {
        let images = vec![image("https://cdn/gallery-1.jpg", ImageKind::Gallery)];
        assert_eq!(
            resolve_thumbnail(&images, Some("https://cdn/legacy.jpg")).as_deref(),
            Some("https://cdn/legacy.jpg")
        );
    }

    #[test]
    fn test_absent_without_either() {
        let images = vec![image("https://cdn/gallery-1.jpg", ImageKind::Gallery)];
        assert_eq!(resolve_thumbnail(&images, None), None);
        assert_eq!(resolve_thumbnail(&images, Some("")), None);
    }

    #[test]
    fn test_unknown_kind_deserializes() {
        let img: Image =
            serde_json::from_str(r#"{"url":"u","type":"BANNER"}"#).unwrap();
        assert_eq!(img.kind, ImageKind::Other);
        let img: Image =
            serde_json::from_str(r#"{"url":"u","imageType":"PROMOTIONAL"}"#).unwrap();
        assert_eq!(img.kind, ImageKind::Promotional);
    }
}
