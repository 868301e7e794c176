use iced::widget::{Column, button, column, container, image, row, text};
use iced::{ContentFit, Element, Length, alignment};

use crate::style::{AppPalette, filled_button_style};
use crate::widgets::capture::{CaptureIntent, CaptureViewModel};

const IMAGE_SIZE: f32 = 300.0;
const CONTENT_SPACING: f32 = 16.0;
const CONTENT_PADDING: f32 = 24.0;
const ACTION_SPACING: f32 = 12.0;
const ACTION_PADDING: f32 = 10.0;
const OUTPUT_FONT_SIZE: f32 = 14.0;

/// Props for the captured image screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CapturedImageProps<'a> {
    pub(crate) vm: CaptureViewModel<'a>,
    pub(crate) palette: AppPalette,
}

/// Render the captured image, or a placeholder when there is none.
pub(crate) fn view(
    props: CapturedImageProps<'_>,
) -> Element<'_, CaptureIntent> {
    let preview: Element<'_, CaptureIntent> = match props.vm.image_path {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(IMAGE_SIZE))
            .height(Length::Fixed(IMAGE_SIZE))
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("No image captured").into(),
    };

    let mut content: Column<'_, CaptureIntent> = column![preview]
        .spacing(CONTENT_SPACING)
        .align_x(alignment::Horizontal::Center);

    if props.vm.image_path.is_some() {
        content = content.push(actions(props));
    }

    if props.vm.is_busy {
        content = content
            .push(text("Working...").color(props.palette.dim_foreground));
    }

    if let Some(output) = props.vm.output {
        content = content.push(text(output).size(OUTPUT_FONT_SIZE));
    }

    if let Some(error) = props.vm.error {
        content = content.push(
            text(error)
                .size(OUTPUT_FONT_SIZE)
                .color(props.palette.danger),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn actions(props: CapturedImageProps<'_>) -> Element<'_, CaptureIntent> {
    let palette = props.palette;

    let analyze = button(text("Analyze"))
        .on_press_maybe(props.vm.can_analyze.then_some(CaptureIntent::Analyze))
        .padding(ACTION_PADDING)
        .style(filled_button_style(palette.accent, palette.on_accent, 0.0));

    let discard = button(text("Discard"))
        .on_press_maybe((!props.vm.is_busy).then_some(CaptureIntent::Clear))
        .padding(ACTION_PADDING)
        .style(filled_button_style(palette.danger, palette.on_accent, 0.0));

    row![analyze, discard].spacing(ACTION_SPACING).into()
}
