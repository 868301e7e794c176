use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Font, Length, alignment, font};

use crate::style::{AppPalette, filled_button_style};
use crate::widgets::upcycle::{UpcycleIntent, UpcycleViewModel};

const FORM_PADDING: f32 = 24.0;
const FORM_SPACING: f32 = 20.0;
const TITLE_SIZE: f32 = 30.0;
const INPUT_PADDING: f32 = 10.0;
const INPUT_FONT_SIZE: f32 = 15.0;
const BUTTON_PADDING: f32 = 12.0;
const RESULT_FONT_SIZE: f32 = 15.0;
const INPUT_PLACEHOLDER: &str = "Enter the waste type (e.g., plastic bottle)";

/// Props for the suggestion form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SuggestionFormProps<'a> {
    pub(crate) vm: UpcycleViewModel<'a>,
    pub(crate) palette: AppPalette,
}

/// Render the waste-type input, submit button and suggestion slot.
pub(crate) fn view(
    props: SuggestionFormProps<'_>,
) -> Element<'_, UpcycleIntent> {
    let title = text("Upcycle Suggestions").size(TITLE_SIZE).font(Font {
        weight: font::Weight::Bold,
        ..Font::default()
    });

    let input = text_input(INPUT_PLACEHOLDER, props.vm.waste_type)
        .on_input(UpcycleIntent::WasteTypeChanged)
        .on_submit(UpcycleIntent::Submit)
        .padding(INPUT_PADDING)
        .size(INPUT_FONT_SIZE);

    let submit = button(text("Get Suggestions"))
        .on_press(UpcycleIntent::Submit)
        .padding(BUTTON_PADDING)
        .style(filled_button_style(
            props.palette.primary,
            props.palette.on_accent,
            0.0,
        ));

    let mut content = column![title, input, submit]
        .spacing(FORM_SPACING)
        .align_x(alignment::Horizontal::Left);

    if props.vm.is_loading {
        content = content.push(
            text("Loading...").color(props.palette.dim_foreground),
        );
    }

    content = content.push(text(props.vm.suggestion).size(RESULT_FONT_SIZE));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(FORM_PADDING)
        .into()
}
