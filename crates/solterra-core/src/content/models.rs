//! Content API data models
//!
//! Mirrors the external API payloads. The API has no "featured" query
//! parameter, so consumers filter client-side on the featured flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub region: String,
    pub price_usd: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub featured: bool,
}

/// A published blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Full body, only present on the detail endpoint
    #[serde(default)]
    pub body: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// One image in the photo gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Content carrying a featured flag
pub trait Featured {
    fn is_featured(&self) -> bool;
}

impl Featured for Tour {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Featured for Blog {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Featured for GalleryItem {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Featured entries only, in API order
pub fn featured<T: Featured>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().filter(|item| item.is_featured())
}

// Response envelopes: every endpoint wraps its payload in { "data": ... }

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToursPayload {
    pub tours: Vec<Tour>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlogsPayload {
    pub blogs: Vec<Blog>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GalleryPayload {
    #[serde(rename = "galleryItems")]
    pub gallery_items: Vec<GalleryItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tours_envelope_deserializes() {
        let json = r#"{
            "data": {
                "tours": [{
                    "id": "t1",
                    "title": "Andean Highlands Trek",
                    "summary": "Seven days across the altiplano",
                    "region": "Peru",
                    "price_usd": 2150.0,
                    "duration_days": 7,
                    "featured": true
                }]
            }
        }"#;

        let envelope: Envelope<ToursPayload> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.tours.len(), 1);
        assert!(envelope.data.tours[0].featured);
        assert_eq!(envelope.data.tours[0].duration_days, 7);
    }

    #[test]
    fn test_blog_defaults_missing_fields() {
        // List endpoint omits body and featured
        let json = r#"{
            "id": "b1",
            "title": "Chasing the Atacama Bloom",
            "excerpt": "Once a decade the desert flowers",
            "author": "M. Reyes",
            "published_at": "2025-04-12T09:00:00Z"
        }"#;

        let blog: Blog = serde_json::from_str(json).unwrap();
        assert!(blog.body.is_empty());
        assert!(!blog.featured);
        assert!(blog.language.is_none());
    }

    #[test]
    fn test_featured_filter_preserves_order() {
        let make = |id: &str, flag: bool| GalleryItem {
            id: id.to_string(),
            title: String::new(),
            image_url: String::new(),
            caption: None,
            featured: flag,
        };
        let items = vec![make("g1", true), make("g2", false), make("g3", true)];

        let ids: Vec<&str> = featured(&items).map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["g1", "g3"]);
    }

    #[test]
    fn test_gallery_envelope_uses_camel_case_key() {
        let json = r#"{
            "data": {
                "galleryItems": [{
                    "id": "g1",
                    "title": "Salt flats at dawn",
                    "image_url": "https://cdn.example.com/g1.jpg",
                    "caption": "Uyuni, Bolivia"
                }]
            }
        }"#;

        let envelope: Envelope<GalleryPayload> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.gallery_items[0].title, "Salt flats at dawn");
    }
}
