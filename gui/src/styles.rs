use iced::font::Weight;
use iced::widget::{button, container, Space};
use iced::{Background, Border, Color, Element, Fill, Font, Shadow, Vector};

use crate::{ACTIVE, BORDER, MUTED, PRIMARY, SURFACE};

// -- Additional palette --

pub const ACCENT: Color = Color::from_rgb(0.059, 0.757, 0.718);
pub const DANGER: Color = Color::from_rgb(0.906, 0.192, 0.192);

const PRIMARY_HOVER: Color = Color::from_rgb(0.459, 0.384, 0.957);
const PRIMARY_PRESSED: Color = Color::from_rgb(0.318, 0.235, 0.808);
const DISABLED_TEXT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.35);

// -- Fonts --

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Default::default()
    }
}

fn outlined(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: 8.0.into(),
    }
}

fn filled(background: Option<Color>, text_color: Color, border: Border) -> button::Style {
    button::Style {
        background: background.map(Background::Color),
        text_color,
        border,
        ..Default::default()
    }
}

// -- Container styles --

pub fn card(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Network badge in the header.
pub fn pill(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACTIVE)),
        text_color: Some(MUTED),
        border: rounded(20.0),
        ..Default::default()
    }
}

// -- Button styles --

pub fn btn_primary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            shadow: Shadow {
                color: Color { a: 0.25, ..PRIMARY },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
            },
            ..filled(Some(PRIMARY), Color::WHITE, rounded(8.0))
        },
        button::Status::Hovered => filled(Some(PRIMARY_HOVER), Color::WHITE, rounded(8.0)),
        button::Status::Pressed => filled(Some(PRIMARY_PRESSED), Color::WHITE, rounded(8.0)),
        // Submit buttons sit here while a transaction is pending
        button::Status::Disabled => filled(
            Some(Color::from_rgb(0.15, 0.19, 0.25)),
            DISABLED_TEXT,
            rounded(8.0),
        ),
    }
}

pub fn btn_secondary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(
            Some(Color::TRANSPARENT),
            Color::from_rgb(0.85, 0.87, 0.90),
            outlined(BORDER),
        ),
        button::Status::Hovered => filled(Some(ACTIVE), Color::WHITE, outlined(BORDER)),
        button::Status::Pressed => filled(Some(SURFACE), Color::WHITE, outlined(BORDER)),
        button::Status::Disabled => filled(None, DISABLED_TEXT, outlined(Color { a: 0.5, ..BORDER })),
    }
}

pub fn nav_btn(active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| match (active, status) {
        (true, _) => filled(Some(ACTIVE), Color::WHITE, rounded(8.0)),
        (false, button::Status::Hovered) => filled(
            Some(Color::from_rgba(1.0, 1.0, 1.0, 0.04)),
            Color::WHITE,
            rounded(8.0),
        ),
        (false, _) => filled(None, MUTED, rounded(8.0)),
    }
}

/// Segmented selector for the token action.
pub fn toggle_btn(active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| match (active, status) {
        (true, _) => filled(Some(PRIMARY), Color::WHITE, rounded(8.0)),
        (false, button::Status::Hovered) => filled(Some(ACTIVE), Color::WHITE, outlined(BORDER)),
        (false, button::Status::Disabled) => {
            filled(Some(Color::TRANSPARENT), DISABLED_TEXT, outlined(BORDER))
        }
        (false, _) => filled(Some(Color::TRANSPARENT), MUTED, outlined(BORDER)),
    }
}

// -- Helpers --

pub fn separator<'a, M: 'a>() -> Element<'a, M> {
    container(Space::new())
        .width(Fill)
        .height(1)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color { a: 0.5, ..BORDER })),
            ..Default::default()
        })
        .into()
}
