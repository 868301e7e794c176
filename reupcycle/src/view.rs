use iced::widget::{column, container};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::screens;
use crate::style::screen_style;
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::navigation::view::header_bar;

/// Render the root application view: header bar over the visible screen.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let header = header_bar::view(header_bar::HeaderBarProps {
        vm: app.widgets.navigation.vm(),
        palette: app.palette,
    })
    .map(|intent| AppEvent::Navigation(NavigationEvent::Intent(intent)));

    let render = screens::renderer(app.widgets.navigation.current());
    let body = container(render(app))
        .width(Length::Fill)
        .height(Length::Fill);

    container(column![header, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(screen_style(app.palette))
        .into()
}
