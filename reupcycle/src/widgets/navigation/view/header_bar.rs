use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::style::{
    AppPalette, header_style, link_button_style, separator_style,
};
use crate::widgets::navigation::{NavigationIntent, NavigationViewModel};

pub(crate) const HEADER_BAR_HEIGHT: f32 = 40.0;
const HEADER_PADDING_X: f32 = 12.0;
const HEADER_TITLE_SIZE: f32 = 15.0;
const HEADER_BACK_SIZE: f32 = 14.0;
const HEADER_SIDE_WIDTH: f32 = 90.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// Props for rendering the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderBarProps {
    pub(crate) vm: NavigationViewModel,
    pub(crate) palette: AppPalette,
}

/// Render the title bar with a back control while the path is non-empty.
pub(crate) fn view<'a>(props: HeaderBarProps) -> Element<'a, NavigationIntent> {
    let back: Element<'a, NavigationIntent> = if props.vm.can_go_back {
        button(text("\u{2039} Back").size(HEADER_BACK_SIZE))
            .on_press(NavigationIntent::Pop)
            .style(link_button_style(props.palette))
            .into()
    } else {
        Space::new().into()
    };

    let back = container(back)
        .width(Length::Fixed(HEADER_SIDE_WIDTH))
        .align_x(alignment::Horizontal::Left);

    let title_text = text(props.vm.current.title()).size(HEADER_TITLE_SIZE);
    let title = container(title_text)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let trailing = Space::new().width(Length::Fixed(HEADER_SIDE_WIDTH));

    let bar = container(
        row![back, title, trailing].align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_BAR_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(header_style(props.palette));

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(separator_style(props.palette));

    column![bar, separator].width(Length::Fill).into()
}
