use iced::widget::{column, container, text};
use iced::{Element, Length, alignment};

use super::{bold, nav_button};
use crate::app::{App, AppEvent};
use crate::components::primitive::menu_button::MenuButtonVariant;
use crate::widgets::navigation::ScreenId;

const TITLE_SIZE: f32 = 34.0;
const TITLE_BOTTOM_GAP: f32 = 40.0;
const BUTTON_MAX_WIDTH: f32 = 420.0;
const HORIZONTAL_PADDING: f32 = 40.0;

pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let title = text("Welcome to ReUpcycle Home")
        .size(TITLE_SIZE)
        .font(bold())
        .color(app.palette.foreground);

    let mut content = column![title]
        .spacing(TITLE_BOTTOM_GAP)
        .align_x(alignment::Horizontal::Center);

    for &screen in ScreenId::Welcome.destinations() {
        let button = container(nav_button(
            "Get Started",
            None,
            MenuButtonVariant::Primary,
            app.palette,
            screen,
        ))
        .max_width(BUTTON_MAX_WIDTH);
        content = content.push(button);
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, HORIZONTAL_PADDING])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
