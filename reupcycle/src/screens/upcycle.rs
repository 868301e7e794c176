use iced::Element;

use crate::app::{App, AppEvent};
use crate::widgets::upcycle::UpcycleEvent;
use crate::widgets::upcycle::view::suggestion_form;

pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    suggestion_form::view(suggestion_form::SuggestionFormProps {
        vm: app.widgets.upcycle.vm(),
        palette: app.palette,
    })
    .map(|intent| AppEvent::Upcycle(UpcycleEvent::Intent(intent)))
}
