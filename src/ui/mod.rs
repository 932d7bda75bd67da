//! Presentation layer
//!
//! `present` turns the catalog state into a plain view model; `view` turns
//! that model into iced widgets. Only the second half knows about iced
//! layout, so everything the user reads can be checked without a window.

pub mod card;
pub mod detail;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::{column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length};

use crate::color;
use crate::state::catalog::{CatalogState, Phase};
use crate::state::data::CatalogItem;
use crate::Message;

/// Downloaded sprites, keyed by source URL
pub type SpritePaths = HashMap<String, PathBuf>;

/// Locations of the bundled static images
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn logo(&self) -> PathBuf {
        self.root.join("img").join("pokedexlogo.png")
    }

    pub fn category_icon(&self, category: &str) -> PathBuf {
        self.root
            .join("img")
            .join("TypeIcons")
            .join(format!("{category}.png"))
    }
}

/// A category shown on a card or panel
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub name: String,
    /// Unknown categories have no icon and render as text
    pub icon: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: i64,
    pub name: String,
    pub order_label: String,
    pub sprite_url: Option<String>,
    pub background: Color,
    pub badges: Vec<Badge>,
    pub selected: bool,
}

impl CardModel {
    /// Text a reader sees on the card, e.g. `N° 1 bulbasaur`
    pub fn label(&self) -> String {
        format!("{} {}", self.order_label, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub name: String,
    pub order_label: String,
    pub artwork_url: Option<String>,
    pub badges: Vec<Badge>,
    pub height: String,
    pub weight: String,
}

/// Everything the window shows, as a pure value
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading {
        logo: PathBuf,
    },
    Failed {
        message: String,
    },
    Loaded {
        logo: PathBuf,
        cards: Vec<CardModel>,
        detail: Option<DetailModel>,
    },
}

/// Build the view model for the current state
pub fn present(state: &CatalogState, assets: &Assets) -> Screen {
    match state.phase() {
        Phase::Loading => Screen::Loading {
            logo: assets.logo(),
        },
        Phase::Failed(error) => Screen::Failed {
            message: error.to_string(),
        },
        Phase::Loaded => {
            let selected_id = state.selected_item().map(|item| item.id);
            let cards = state
                .items()
                .iter()
                .map(|item| card_model(item, selected_id == Some(item.id), assets))
                .collect();
            let detail = state.selected_item().map(|item| detail_model(item, assets));

            Screen::Loaded {
                logo: assets.logo(),
                cards,
                detail,
            }
        }
    }
}

fn card_model(item: &CatalogItem, selected: bool, assets: &Assets) -> CardModel {
    CardModel {
        id: item.id,
        name: item.name.clone(),
        order_label: order_label(item.order),
        sprite_url: item.sprite_url.clone(),
        background: color::category_color(item.primary_category()),
        badges: badges(item, assets),
        selected,
    }
}

fn detail_model(item: &CatalogItem, assets: &Assets) -> DetailModel {
    DetailModel {
        name: item.name.clone(),
        order_label: order_label(item.order),
        artwork_url: item.artwork_url.clone(),
        badges: badges(item, assets),
        height: format_height(item.height_dm),
        weight: format_weight(item.weight_hg),
    }
}

fn badges(item: &CatalogItem, assets: &Assets) -> Vec<Badge> {
    item.categories
        .iter()
        .map(|name| Badge {
            name: name.clone(),
            icon: color::is_known_category(name).then(|| assets.category_icon(name)),
        })
        .collect()
}

pub fn order_label(order: i64) -> String {
    format!("N° {order}")
}

/// Height from decimeters to meters, at whatever precision the division gives
pub fn format_height(decimeters: u32) -> String {
    let meters = f64::from(decimeters) / 10.0;
    format!("{} m", decimal_comma(&meters.to_string()))
}

/// Weight from hectograms to kilograms, two decimal places
pub fn format_weight(hectograms: u32) -> String {
    let kilograms = f64::from(hectograms) / 10.0;
    format!("{} kg", decimal_comma(&format!("{kilograms:.2}")))
}

fn decimal_comma(number: &str) -> String {
    number.replacen('.', ",", 1)
}

/// Capitalize the first letter, as names are shown in the grid
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the window contents
pub fn view(screen: Screen, sprites: &SpritePaths) -> Element<'_, Message> {
    let content: Element<Message> = match screen {
        Screen::Loading { logo } => column![logo_image(&logo), text("Loading...").size(20)]
            .spacing(20)
            .align_x(Alignment::Center)
            .into(),
        Screen::Failed { message } => text(message).size(18).into(),
        Screen::Loaded {
            logo,
            cards,
            detail,
        } => {
            let grid = scrollable(
                container(card::grid(cards, sprites))
                    .padding([56, 28])
                    .width(Length::Fill),
            )
            .height(Length::Fill);

            let panel: Element<Message> = match detail {
                Some(detail) => detail::panel(detail, sprites),
                None => Space::new(Length::Fixed(detail::PANEL_WIDTH), Length::Shrink).into(),
            };

            column![
                logo_image(&logo),
                row![container(grid).width(Length::FillPortion(3)), panel].spacing(24),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
        }
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb8(0xE2, 0xE8, 0xF0).into()),
            ..container::Style::default()
        })
        .into()
}

fn logo_image(path: &Path) -> Element<'static, Message> {
    image(image::Handle::from_path(path)).height(96).into()
}

/// A sprite by URL if it has been downloaded, or an empty box of the same size
pub(crate) fn sprite<'a>(url: Option<&str>, sprites: &SpritePaths, size: f32) -> Element<'a, Message> {
    match url.and_then(|url| sprites.get(url)) {
        Some(path) => image(image::Handle::from_path(path))
            .width(size)
            .height(size)
            .into(),
        None => Space::new(size, size).into(),
    }
}

/// Category icons in a row; unknown categories are spelled out
pub(crate) fn badge_row<'a>(badges: Vec<Badge>) -> Element<'a, Message> {
    let items = badges.into_iter().map(|badge| -> Element<'a, Message> {
        match badge.icon {
            Some(icon) => image(image::Handle::from_path(icon))
                .width(24)
                .height(24)
                .into(),
            None => text(badge.name).size(12).into(),
        }
    });

    iced::widget::Row::with_children(items)
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::state::catalog::tests::item;

    fn assets() -> Assets {
        Assets::new("assets")
    }

    fn loaded_state() -> CatalogState {
        let mut bulbasaur = item(1, "bulbasaur", &["grass", "poison"]);
        bulbasaur.order = 1;
        let mut ivysaur = item(2, "ivysaur", &["grass", "poison"]);
        ivysaur.order = 2;
        ivysaur.height_dm = 10;
        ivysaur.weight_hg = 130;

        let mut state = CatalogState::new();
        state.start_load();
        state.load_succeeded(vec![bulbasaur, ivysaur]);
        state
    }

    #[test]
    fn height_keeps_division_precision() {
        assert_eq!(format_height(7), "0,7 m");
        assert_eq!(format_height(10), "1 m");
        assert_eq!(format_height(1234), "123,4 m");
    }

    #[test]
    fn weight_has_two_decimals() {
        assert_eq!(format_weight(69), "6,90 kg");
        assert_eq!(format_weight(130), "13,00 kg");
        assert_eq!(format_weight(9999), "999,90 kg");
    }

    #[test]
    fn loading_screen_shows_only_the_placeholder() {
        let mut state = CatalogState::new();
        state.start_load();

        assert_eq!(
            present(&state, &assets()),
            Screen::Loading {
                logo: PathBuf::from("assets/img/pokedexlogo.png")
            }
        );
    }

    #[test]
    fn failure_screen_shows_the_message() {
        let mut state = CatalogState::new();
        state.start_load();
        state.load_failed(LoadError::Network("connection refused".to_string()));

        assert_eq!(
            present(&state, &assets()),
            Screen::Failed {
                message: "Network error: connection refused".to_string()
            }
        );
    }

    #[test]
    fn cards_follow_working_set_order() {
        let Screen::Loaded { cards, detail, .. } = present(&loaded_state(), &assets()) else {
            panic!("expected loaded screen");
        };

        let labels: Vec<_> = cards.iter().map(CardModel::label).collect();
        assert_eq!(labels, ["N° 1 bulbasaur", "N° 2 ivysaur"]);
        assert_eq!(cards[0].background, color::category_color(Some("grass")));
        assert_eq!(
            cards[0].badges[1].icon,
            Some(PathBuf::from("assets/img/TypeIcons/poison.png"))
        );
        assert!(detail.is_none());
    }

    #[test]
    fn selection_drives_the_detail_panel() {
        let mut state = loaded_state();

        state.select(1);
        let Screen::Loaded { cards, detail, .. } = present(&state, &assets()) else {
            panic!("expected loaded screen");
        };
        let detail = detail.unwrap();
        assert_eq!(detail.name, "bulbasaur");
        assert_eq!(detail.height, "0,7 m");
        assert_eq!(detail.weight, "6,90 kg");
        assert!(cards[0].selected && !cards[1].selected);

        state.select(2);
        let Screen::Loaded { detail, .. } = present(&state, &assets()) else {
            panic!("expected loaded screen");
        };
        let detail = detail.unwrap();
        assert_eq!(detail.name, "ivysaur");
        assert_eq!(detail.order_label, "N° 2");
        assert_eq!(detail.height, "1 m");
        assert_eq!(detail.weight, "13,00 kg");
    }

    #[test]
    fn empty_categories_use_fallback_appearance() {
        let mut state = CatalogState::new();
        state.start_load();
        state.load_succeeded(vec![item(10001, "mystery", &[])]);

        let Screen::Loaded { cards, .. } = present(&state, &assets()) else {
            panic!("expected loaded screen");
        };

        assert_eq!(cards[0].background, color::fallback_color());
        assert!(cards[0].badges.is_empty());
    }

    #[test]
    fn unknown_category_has_no_icon() {
        let mut state = CatalogState::new();
        state.start_load();
        state.load_succeeded(vec![item(1, "odd", &["stellar"])]);

        let Screen::Loaded { cards, .. } = present(&state, &assets()) else {
            panic!("expected loaded screen");
        };

        assert_eq!(
            cards[0].badges,
            [Badge {
                name: "stellar".to_string(),
                icon: None
            }]
        );
    }

    #[test]
    fn names_are_capitalized_for_display() {
        assert_eq!(display_name("bulbasaur"), "Bulbasaur");
        assert_eq!(display_name(""), "");
    }
}
