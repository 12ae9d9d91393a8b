//! Widgets for the display slots
use iced::widget::image::{Handle, Image};
use iced::widget::{container, text};
use iced::{Background, Color, Element, Font, Length, Theme};

use crate::layout::Dimensions;
use crate::state::{DisplaySlot, SlotImage};

/// Light gray behind every slot box
const BOX_COLOR: Color = Color {
    r: 211.0 / 255.0,
    g: 211.0 / 255.0,
    b: 211.0 / 255.0,
    a: 1.0,
};

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Fixed-size box with the slot's image centered, or its error message
pub fn slot_box<'a, Message: 'a>(
    slot: &'a DisplaySlot,
    bounds: Dimensions,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot.image() {
        SlotImage::Loaded(thumb) => Image::<Handle>::new(thumb.handle.clone())
            .width(Length::Fixed(thumb.dimensions.width as f32))
            .height(Length::Fixed(thumb.dimensions.height as f32))
            .into(),
        SlotImage::Failed(message) => text(message.as_str()).size(13).into(),
        SlotImage::Empty => text("").into(),
    };

    container(content)
        .padding(4)
        .center_x(Length::Fixed(bounds.width as f32))
        .center_y(Length::Fixed(bounds.height as f32))
        .style(box_style)
        .into()
}

/// Centered caption in a fixed-size row
pub fn caption<'a, Message: 'a>(
    label: &'a str,
    width: u32,
    height: u32,
) -> Element<'a, Message> {
    container(text(label).size(14))
        .center_x(Length::Fixed(width as f32))
        .center_y(Length::Fixed(height as f32))
        .into()
}

/// Bold header text
pub fn title<'a, Message: 'a>(label: impl Into<String>, size: u16) -> Element<'a, Message> {
    text(label.into()).size(size).font(BOLD).into()
}

fn box_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BOX_COLOR)),
        text_color: Some(Color::BLACK),
        ..container::Style::default()
    }
}
