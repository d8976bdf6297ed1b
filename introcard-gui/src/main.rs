use std::sync::Arc;

use iced::{
    Element,
    Length::{Fill, FillPortion},
    Subscription, Task, Theme, application,
    widget::{container, row},
    window,
};
use introcard_lib::{PresentationMode, WidthClass};
use parking_lot::RwLock;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        modal::modal,
        preview::{self, Preview},
        profile_form::{self, ProfileForm},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ProfileForm(profile_form::Message),
    Preview(preview::Message),
    Window(window::Event),
}

struct App {
    title: String,
    theme: Theme,
    cfg: Cfg,
    /// Unknown until the window reports its size
    width_class: Option<WidthClass>,
    // Components
    profile_form: ProfileForm,
    preview: Preview,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg: Cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let theme = cfg.read().theme();

        let (profile_form, profile_form_task) = ProfileForm::new();

        (
            Self {
                title: "個人檔案製作".into(),
                theme,
                cfg,
                width_class: None,
                profile_form,
                preview: Preview::new(),
            },
            profile_form_task.map(Message::ProfileForm),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to relevant child components
            Message::ProfileForm(message) => match self.profile_form.update(message) {
                profile_form::Action::None => Task::none(),
                profile_form::Action::Run(task) => task.map(Message::ProfileForm),
            },
            Message::Preview(message) => match self.preview.update(message) {
                preview::Action::None => Task::none(),
                preview::Action::Close => {
                    self.profile_form.set_preview_visible(false);
                    Task::none()
                }
            },
            Message::Window(event) => {
                if let window::Event::Opened { size, .. } | window::Event::Resized(size) = event {
                    let regular_width = self.cfg.read().layout.regular_width;
                    let width_class = WidthClass::from_width(size.width, regular_width);

                    if self.width_class != Some(width_class) {
                        debug!("Width class is now {width_class:?}");
                        self.width_class = Some(width_class);

                        // The card is always on screen side by side
                        if width_class == WidthClass::Regular {
                            self.profile_form.set_preview_visible(false);
                        }
                    }
                }
                Task::none()
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let mode = PresentationMode::for_width_class(self.width_class);
        let form = self.profile_form.view(mode).map(Message::ProfileForm);

        match mode {
            PresentationMode::SideBySide => row![
                container(form).width(FillPortion(1)),
                container(self.preview(false)).width(FillPortion(1)),
            ]
            .height(Fill)
            .into(),
            PresentationMode::Modal if self.profile_form.is_preview_visible() => modal(
                form,
                container(self.preview(true))
                    .width(600)
                    .height(Fill)
                    .style(container::rounded_box),
                Some(Message::Preview(preview::Message::ClosePressed)),
            ),
            PresentationMode::Modal => form,
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::events().map(|(_id, event)| Message::Window(event))
    }

    fn preview(&self, closable: bool) -> Element<'_, Message> {
        self.preview
            .view(
                self.profile_form.profile(),
                self.profile_form.avatar_handle(),
                closable,
            )
            .map(Message::Preview)
    }
}
