use iced::Element;

use super::text_page;
use crate::app::{App, AppEvent};

const TITLE: &str = "Help & Support";

const BODY: &str = "Welcome to the Help section! ReUpcycle Home is fairly \
simple to use.

Upcycle: type the kind of waste you have, for example \"plastic bottle\", \
and press Get Suggestions. Ideas for giving it a second life appear after a \
moment.

Learn More: read why recycling and upcycling matter and how to sort your \
waste.

Captured images: start the app with --image <PATH> to open a photo of an \
item. If an image processor is configured, press Analyze to run it on the \
photo.

Use the Back button in the header or press Escape to return to the previous \
screen.";

pub(super) fn view(_app: &App) -> Element<'_, AppEvent> {
    text_page(TITLE, BODY)
}
