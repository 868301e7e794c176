use iced::Element;

use super::text_page;
use crate::app::{App, AppEvent};

const TITLE: &str = "Learn More About Recycling and Upcycling";

const BODY: &str = "Recycling and upcycling are essential practices that help \
us manage waste and protect our environment.

Recycling breaks used materials such as paper, glass, metal and many plastics \
down into raw material that manufacturers turn into new products. It saves \
energy, reduces the need to extract fresh resources and keeps waste out of \
landfills. Rinse containers, keep paper dry and check which plastics your \
local collection accepts.

Upcycling gives an item a second life without breaking it down first. A glass \
jar becomes a storage container, a plastic bottle becomes a planter, an old \
t-shirt becomes a shopping bag. Upcycling usually uses even less energy than \
recycling and often produces something more valuable than the original.

Together they reduce pollution, conserve natural resources and cut greenhouse \
gas emissions. Every item you reuse or sort correctly makes a difference.";

pub(super) fn view(_app: &App) -> Element<'_, AppEvent> {
    text_page(TITLE, BODY)
}
