use iced::widget::{button, row, text};
use iced::{Color, Element, Length, alignment};

use crate::style::{AppPalette, filled_button_style};

/// UI events emitted by a menu button.
#[derive(Debug, Clone)]
pub(crate) enum MenuButtonEvent {
    Pressed,
}

/// Visual variants for a menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuButtonVariant {
    /// Call to action (blue).
    Primary,
    /// Menu entry (green).
    Accent,
}

/// Props for rendering a full-width menu button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) glyph: Option<&'static str>,
    pub(crate) variant: MenuButtonVariant,
    pub(crate) palette: AppPalette,
}

const MENU_BUTTON_PADDING: f32 = 14.0;
const MENU_BUTTON_FONT_SIZE: f32 = 17.0;
const MENU_BUTTON_GLYPH_SIZE: f32 = 20.0;
const MENU_BUTTON_SPACING: f32 = 10.0;
const MENU_BUTTON_SHADOW_PRIMARY: f32 = 10.0;
const MENU_BUTTON_SHADOW_ACCENT: f32 = 5.0;

/// Render a wide rounded button with an optional leading glyph.
pub(crate) fn view<'a>(
    props: MenuButtonProps<'a>,
) -> Element<'a, MenuButtonEvent> {
    let (fill, shadow) = resolve_variant(props.variant, props.palette);

    let mut content = row![]
        .spacing(MENU_BUTTON_SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(glyph) = props.glyph {
        content = content.push(text(glyph).size(MENU_BUTTON_GLYPH_SIZE));
    }
    content = content.push(text(props.label).size(MENU_BUTTON_FONT_SIZE));

    let content = iced::widget::container(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(content)
        .on_press(MenuButtonEvent::Pressed)
        .padding(MENU_BUTTON_PADDING)
        .width(Length::Fill)
        .style(filled_button_style(fill, props.palette.on_accent, shadow))
        .into()
}

fn resolve_variant(
    variant: MenuButtonVariant,
    palette: AppPalette,
) -> (Color, f32) {
    match variant {
        MenuButtonVariant::Primary => {
            (palette.primary, MENU_BUTTON_SHADOW_PRIMARY)
        },
        MenuButtonVariant::Accent => {
            (palette.accent, MENU_BUTTON_SHADOW_ACCENT)
        },
    }
}
