use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Vector};

const BUTTON_RADIUS: f32 = 10.0;
const PRESSED_DARKEN: f32 = 0.85;
const HOVER_LIGHTEN: f32 = 0.08;

/// Fixed light palette used across all screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AppPalette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) header: Color,
    pub(crate) separator: Color,
    pub(crate) primary: Color,
    pub(crate) accent: Color,
    pub(crate) on_accent: Color,
    pub(crate) danger: Color,
}

impl AppPalette {
    pub(crate) const LIGHT: AppPalette = AppPalette {
        background: Color::WHITE,
        foreground: Color::BLACK,
        dim_foreground: Color::from_rgb(0.4, 0.4, 0.4),
        header: Color::from_rgb(0.96, 0.96, 0.96),
        separator: Color::from_rgb(0.85, 0.85, 0.85),
        primary: Color::from_rgb(0.0, 0.478, 1.0),
        accent: Color::from_rgb(0.204, 0.78, 0.349),
        on_accent: Color::WHITE,
        danger: Color::from_rgb(1.0, 0.231, 0.188),
    };
}

/// Solid screen background.
pub(crate) fn screen_style(
    palette: AppPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

/// Header bar background.
pub(crate) fn header_style(
    palette: AppPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(palette.header.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

/// One pixel horizontal rule.
pub(crate) fn separator_style(
    palette: AppPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(palette.separator.into()),
        ..Default::default()
    }
}

/// Rounded filled button in `fill` with optional drop shadow.
pub(crate) fn filled_button_style(
    fill: Color,
    text_color: Color,
    shadow_blur: f32,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let background = match status {
            button::Status::Active => fill,
            button::Status::Hovered => lighten(fill, HOVER_LIGHTEN),
            button::Status::Pressed => scale(fill, PRESSED_DARKEN),
            button::Status::Disabled => Color { a: 0.5, ..fill },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: BUTTON_RADIUS.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: Color {
                    a: 0.3,
                    ..Color::BLACK
                },
                offset: Vector::new(0.0, shadow_blur / 4.0),
                blur_radius: shadow_blur,
            },
            ..button::Style::default()
        }
    }
}

/// Borderless text-only button used by the header back control.
pub(crate) fn link_button_style(
    palette: AppPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => {
                scale(palette.primary, PRESSED_DARKEN)
            },
            _ => palette.primary,
        };

        button::Style {
            background: None,
            text_color,
            ..button::Style::default()
        }
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

fn scale(color: Color, factor: f32) -> Color {
    Color {
        r: color.r * factor,
        g: color.g * factor,
        b: color.b * factor,
        a: color.a,
    }
}
