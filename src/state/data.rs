/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use crate::api::types::DetailRecord;

/// A single catalog entry, built from a completed detail fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// National dex id
    pub id: i64,
    pub name: String,
    /// Display-only ordering number
    pub order: i64,
    /// Type names in slot order; the first one picks the card color
    pub categories: Vec<String>,
    /// Animated sprite shown on grid cards
    pub sprite_url: Option<String>,
    /// Larger artwork shown in the detail panel
    pub artwork_url: Option<String>,
    /// Height in decimeters
    pub height_dm: u32,
    /// Weight in hectograms
    pub weight_hg: u32,
}

impl CatalogItem {
    /// The category that drives the card appearance, if any
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

impl From<DetailRecord> for CatalogItem {
    fn from(record: DetailRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            order: record.order,
            categories: record.types.into_iter().map(|slot| slot.kind.name).collect(),
            sprite_url: record.sprites.other.showdown.front_default,
            artwork_url: record.sprites.other.home.front_default,
            height_dm: record.height,
            weight_hg: record.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{NamedResource, OtherSprites, SpriteSet, Sprites, TypeSlot};

    #[test]
    fn detail_record_maps_onto_item() {
        let record = DetailRecord {
            id: 6,
            name: "charizard".to_string(),
            order: 7,
            types: vec![
                TypeSlot { kind: NamedResource { name: "fire".to_string() } },
                TypeSlot { kind: NamedResource { name: "flying".to_string() } },
            ],
            sprites: Sprites {
                other: OtherSprites {
                    home: SpriteSet { front_default: Some("home/6.png".to_string()) },
                    showdown: SpriteSet { front_default: Some("showdown/6.gif".to_string()) },
                },
            },
            height: 17,
            weight: 905,
        };

        let item = CatalogItem::from(record);

        assert_eq!(item.primary_category(), Some("fire"));
        assert_eq!(item.categories, ["fire", "flying"]);
        assert_eq!(item.sprite_url.as_deref(), Some("showdown/6.gif"));
        assert_eq!(item.artwork_url.as_deref(), Some("home/6.png"));
        assert_eq!((item.height_dm, item.weight_hg), (17, 905));
    }
}
