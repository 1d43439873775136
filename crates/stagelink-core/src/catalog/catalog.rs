//! The creative catalog.

use std::sync::Arc;

use super::model::{Creative, CreativeId, ServiceOffering};

/// Immutable, read-only list of creatives.
///
/// Built once at startup and injected into the workflows that need it.
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone)]
pub struct CreativeCatalog {
    creatives: Arc<[Creative]>,
}

impl CreativeCatalog {
    pub fn new(creatives: Vec<Creative>) -> Self {
        Self {
            creatives: creatives.into(),
        }
    }

    /// The catalog the site ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Creative {
                id: CreativeId::from(1u32),
                name: "DJ Nova".to_string(),
                role: "DJ".to_string(),
                genres: vec!["Afro".into(), "EDM".into(), "House".into()],
                location: "Lagos, Nigeria".to_string(),
                rating: 4.9,
                review_count: 124,
                services: vec![
                    ServiceOffering::new("Live Performance", "$500+", "3 hours"),
                    ServiceOffering::new("Virtual DJ Set", "$200", "2 hours"),
                ],
                bio: "International DJ with 10+ years experience playing at major festivals worldwide."
                    .to_string(),
            },
            Creative {
                id: CreativeId::from(2u32),
                name: "Alex Beats".to_string(),
                role: "Producer".to_string(),
                genres: vec!["Hip Hop".into(), "R&B".into(), "Pop".into()],
                location: "Los Angeles, USA".to_string(),
                rating: 4.8,
                review_count: 89,
                services: vec![
                    ServiceOffering::new("Beat Production", "$300/track", "Custom"),
                    ServiceOffering::new("Mixing & Mastering", "$150/song", "48 hours"),
                ],
                bio: "Grammy-nominated producer with multiple platinum records.".to_string(),
            },
        ])
    }

    /// Finds a creative by id, accepting numeric or string ids.
    pub fn find_by_id(&self, id: impl Into<CreativeId>) -> Option<&Creative> {
        let id = id.into();
        self.creatives.iter().find(|c| c.id == id)
    }

    /// Creatives tagged with `genre` (case-insensitive). `"all"` matches everyone.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Creative> {
        if genre.eq_ignore_ascii_case("all") {
            return self.creatives.iter().collect();
        }
        self.creatives.iter().filter(|c| c.has_genre(genre)).collect()
    }

    pub fn len(&self) -> usize {
        self.creatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatives.is_empty()
    }
}

impl Default for CreativeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
