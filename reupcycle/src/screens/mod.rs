//! Screen dispatch: every [`ScreenId`] maps to exactly one render function.

mod help;
mod home;
mod learn_more;
mod recycle;
mod upcycle;
mod welcome;

use iced::widget::{column, container, scrollable, text};
use iced::{Element, Font, Length, alignment, font};

use crate::app::{App, AppEvent};
use crate::components::primitive::menu_button;
use crate::style::AppPalette;
use crate::widgets::navigation::{NavigationEvent, NavigationIntent, ScreenId};

/// Render function for one screen.
pub(crate) type ScreenRenderer = for<'a> fn(&'a App) -> Element<'a, AppEvent>;

/// Return the render function for `screen`.
pub(crate) fn renderer(screen: ScreenId) -> ScreenRenderer {
    match screen {
        ScreenId::Welcome => welcome::view,
        ScreenId::Home => home::view,
        ScreenId::Recycle => recycle::view,
        ScreenId::LearnMore => learn_more::view,
        ScreenId::Upcycle => upcycle::view,
        ScreenId::Help => help::view,
    }
}

const PAGE_TITLE_SIZE: f32 = 30.0;
const PAGE_BODY_SIZE: f32 = 15.0;
const PAGE_SPACING: f32 = 20.0;
const PAGE_PADDING: f32 = 24.0;
const PAGE_BODY_INDENT: f32 = 20.0;

fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::default()
    }
}

fn push_event(screen: ScreenId) -> AppEvent {
    AppEvent::Navigation(NavigationEvent::Intent(NavigationIntent::Push(
        screen,
    )))
}

/// Menu button that pushes `screen` when pressed.
fn nav_button<'a>(
    label: &'a str,
    glyph: Option<&'static str>,
    variant: menu_button::MenuButtonVariant,
    palette: AppPalette,
    screen: ScreenId,
) -> Element<'a, AppEvent> {
    menu_button::view(menu_button::MenuButtonProps {
        label,
        glyph,
        variant,
        palette,
    })
    .map(move |_| push_event(screen))
}

/// Scrollable page with a bold title and a body paragraph.
fn text_page<'a>(title: &'a str, body: &'a str) -> Element<'a, AppEvent> {
    let content = column![
        text(title).size(PAGE_TITLE_SIZE).font(bold()),
        container(text(body).size(PAGE_BODY_SIZE))
            .padding([0.0, PAGE_BODY_INDENT]),
    ]
    .spacing(PAGE_SPACING)
    .align_x(alignment::Horizontal::Left)
    .padding(PAGE_PADDING)
    .width(Length::Fill);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
