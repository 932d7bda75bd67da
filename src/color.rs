/// Category color utilities
///
/// Each creature type has a card background color. The lookup is by the
/// type's name as reported by the API; anything unrecognized (or a creature
/// with no types at all) gets the neutral fallback.

use iced::Color;

/// Known categories, in the API's type id order
pub const KNOWN_CATEGORIES: [&str; 18] = [
    "normal", "fighting", "flying", "poison", "ground", "rock", "bug", "ghost", "steel", "fire",
    "water", "grass", "electric", "psychic", "ice", "dragon", "dark", "fairy",
];

/// Card background when the primary category is missing or unknown
pub fn fallback_color() -> Color {
    Color::from_rgb8(0xE2, 0xE8, 0xF0)
}

/// Background color for a card whose primary category is `category`
pub fn category_color(category: Option<&str>) -> Color {
    let Some(name) = category else {
        return fallback_color();
    };

    match name.to_ascii_lowercase().as_str() {
        "normal" => Color::from_rgb8(0xA8, 0xA7, 0x7A),
        "fighting" => Color::from_rgb8(0xC2, 0x2E, 0x28),
        "flying" => Color::from_rgb8(0xA9, 0x8F, 0xF3),
        "poison" => Color::from_rgb8(0xA3, 0x3E, 0xA1),
        "ground" => Color::from_rgb8(0xE2, 0xBF, 0x65),
        "rock" => Color::from_rgb8(0xB6, 0xA1, 0x36),
        "bug" => Color::from_rgb8(0xA6, 0xB9, 0x1A),
        "ghost" => Color::from_rgb8(0x73, 0x57, 0x97),
        "steel" => Color::from_rgb8(0xB7, 0xB7, 0xCE),
        "fire" => Color::from_rgb8(0xEE, 0x81, 0x30),
        "water" => Color::from_rgb8(0x63, 0x90, 0xF0),
        "grass" => Color::from_rgb8(0x7A, 0xC7, 0x4C),
        "electric" => Color::from_rgb8(0xF7, 0xD0, 0x2C),
        "psychic" => Color::from_rgb8(0xF9, 0x55, 0x87),
        "ice" => Color::from_rgb8(0x96, 0xD9, 0xD6),
        "dragon" => Color::from_rgb8(0x6F, 0x35, 0xFC),
        "dark" => Color::from_rgb8(0x70, 0x57, 0x46),
        "fairy" => Color::from_rgb8(0xD6, 0x85, 0xAD),
        _ => fallback_color(),
    }
}

/// Whether the category has a dedicated color (and, by convention, an icon)
pub fn is_known_category(name: &str) -> bool {
    KNOWN_CATEGORIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(name))
}
