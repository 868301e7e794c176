use iced::Element;

use crate::app::{App, AppEvent};
use crate::widgets::capture::CaptureEvent;
use crate::widgets::capture::view::captured_image;

pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let has_processor = app.config.image_processor().is_some();

    captured_image::view(captured_image::CapturedImageProps {
        vm: app.widgets.capture.vm(has_processor),
        palette: app.palette,
    })
    .map(|intent| AppEvent::Capture(CaptureEvent::Intent(intent)))
}
