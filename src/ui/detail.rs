use iced::widget::{column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use super::{badge_row, display_name, sprite, DetailModel, SpritePaths};
use crate::Message;

/// Width of the side panel (also reserved when nothing is selected)
pub const PANEL_WIDTH: f32 = 384.0;

const ARTWORK_SIZE: f32 = 192.0;

/// The detail panel for the selected item
pub fn panel(detail: DetailModel, sprites: &SpritePaths) -> Element<'_, Message> {
    let content = column![
        sprite(detail.artwork_url.as_deref(), sprites, ARTWORK_SIZE),
        text(detail.order_label)
            .size(12)
            .color(Color::from_rgb8(0x73, 0x73, 0x73)),
        text(display_name(&detail.name)).size(22),
        badge_row(detail.badges),
        row![measure("Height", detail.height), measure("Weight", detail.weight)].spacing(32),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fixed(PANEL_WIDTH))
        .padding(24)
        .center_x(Length::Fixed(PANEL_WIDTH))
        .style(|_theme| container::Style {
            background: Some(Color::WHITE.into()),
            border: Border {
                radius: 24.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// A labeled value in a rounded pill, e.g. "Height / 0,7 m"
fn measure<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    let pill = container(text(value).size(14).color(Color::from_rgb8(0x33, 0x41, 0x55)))
        .width(Length::Fixed(112.0))
        .height(Length::Fixed(24.0))
        .center_x(Length::Fixed(112.0))
        .center_y(Length::Fixed(24.0))
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb8(0xE2, 0xE8, 0xF0).into()),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    column![text(label), pill]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
}
