use iced::widget::{column, container, mouse_area, text};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Vector};
use iced_aw::Wrap;

use super::{badge_row, display_name, sprite, CardModel, SpritePaths};
use crate::Message;

const CARD_WIDTH: f32 = 208.0;
const CARD_HEIGHT: f32 = 144.0;
const SPRITE_SIZE: f32 = 96.0;

/// All cards, wrapped into rows
pub fn grid(cards: Vec<CardModel>, sprites: &SpritePaths) -> Element<'_, Message> {
    let elements = cards.into_iter().map(|card| view(card, sprites)).collect();

    Wrap::with_elements(elements)
        .spacing(24.0)
        .line_spacing(64.0)
        .into()
}

/// A single clickable card
pub fn view(card: CardModel, sprites: &SpritePaths) -> Element<'_, Message> {
    let id = card.id;
    let background = card.background;
    let selected = card.selected;

    let body = column![
        sprite(card.sprite_url.as_deref(), sprites, SPRITE_SIZE),
        text(card.order_label)
            .size(12)
            .color(Color::from_rgb8(0x73, 0x73, 0x73)),
        text(display_name(&card.name)).size(16),
        badge_row(card.badges),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    let tile = container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(12)
        .center_x(Length::Fixed(CARD_WIDTH))
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: 24.0.into(),
                width: if selected { 3.0 } else { 0.0 },
                color: Color::WHITE,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..container::Style::default()
        });

    mouse_area(tile).on_press(Message::Select(id)).into()
}
