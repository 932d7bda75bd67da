//! Wire types for the PokeAPI list and detail endpoints.
//!
//! Only the fields the viewer renders are modeled; everything else in the
//! responses is ignored by serde.

use serde::Deserialize;

/// Response of `GET {base}/pokemon?limit=N`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListResponse {
    pub results: Vec<ListEntry>,
}

/// A lightweight reference to one catalog entry
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListEntry {
    pub name: String,
    /// Absolute URL of the detail record
    pub url: String,
}

/// Response of `GET {detail url}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DetailRecord {
    pub id: i64,
    pub name: String,
    pub order: i64,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    /// Decimeters
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OtherSprites {
    #[serde(default)]
    pub home: SpriteSet,
    #[serde(default)]
    pub showdown: SpriteSet,
}

/// The API reports missing artwork as `null`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn detail_record_keeps_type_slot_order() {
        let raw = json!({
            "id": 1,
            "name": "bulbasaur",
            "order": 1,
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
                { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
            ],
            "sprites": {
                "front_default": "https://example.test/1.png",
                "other": {
                    "home": { "front_default": "https://example.test/home/1.png" },
                    "showdown": { "front_default": "https://example.test/showdown/1.gif" }
                }
            }
        });

        let record: DetailRecord = serde_json::from_value(raw).unwrap();

        let names: Vec<_> = record.types.iter().map(|slot| slot.kind.name.as_str()).collect();
        assert_eq!(names, ["grass", "poison"]);
        assert_eq!(
            record.sprites.other.showdown.front_default.as_deref(),
            Some("https://example.test/showdown/1.gif")
        );
        assert_eq!(record.height, 7);
        assert_eq!(record.weight, 69);
    }

    #[test]
    fn null_sprites_and_missing_types_are_tolerated() {
        let raw = json!({
            "id": 10001,
            "name": "deoxys-attack",
            "order": 500,
            "sprites": { "other": { "home": { "front_default": null } } }
        });

        let record: DetailRecord = serde_json::from_value(raw).unwrap();

        assert!(record.types.is_empty());
        assert_eq!(record.sprites.other.home.front_default, None);
        assert_eq!(record.sprites.other.showdown.front_default, None);
    }
}
