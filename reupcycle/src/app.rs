#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::cli::Cli;
use crate::config::{AppConfig, load_initial_config};
use crate::style::AppPalette;
use crate::widgets::capture::{CaptureEvent, CaptureIntent, CaptureWidget};
use crate::widgets::navigation::{
    NavigationEvent, NavigationWidget, ScreenId,
};
use crate::widgets::upcycle::{UpcycleEvent, UpcycleWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation widget
    Navigation(NavigationEvent),
    // Upcycle widget
    Upcycle(UpcycleEvent),
    // Capture widget
    Capture(CaptureEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
    pub(crate) upcycle: UpcycleWidget,
    pub(crate) capture: CaptureWidget,
}

impl Widgets {
    fn new() -> Self {
        Self {
            navigation: NavigationWidget::new(),
            upcycle: UpcycleWidget::new(),
            capture: CaptureWidget::new(),
        }
    }
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) palette: AppPalette,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application from command-line arguments.
    pub(crate) fn new(cli: Cli) -> (Self, Task<AppEvent>) {
        let config = load_initial_config(cli.config.as_deref());
        let app = Self::with_config(config);

        let task = match cli.image {
            Some(image) => {
                log::info!("opening captured image {}", image.display());
                Task::done(AppEvent::Capture(CaptureEvent::Intent(
                    CaptureIntent::Open(image),
                )))
            },
            None => Task::none(),
        };

        (app, task)
    }

    /// Build an app at the root screen with the given configuration.
    pub(crate) fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            palette: AppPalette::LIGHT,
            widgets: Widgets::new(),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        let current = self.widgets.navigation.current();
        if current == ScreenId::ROOT {
            return String::from(current.title());
        }
        format!("ReUpcycle Home: {}", current.title())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
