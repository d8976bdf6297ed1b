use iced::{
    Color, ContentFit, Element, Font,
    Length::Fill,
    Theme,
    alignment::{Horizontal, Vertical},
    border, font,
    widget::{
        Column, button, column, container, image, mouse_area, row, scrollable, space, stack, text,
    },
};
use introcard_lib::{ContactRow, Profile, ProfileCard, Url};
use tracing::{debug, warn};

use super::modal::modal;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};
const MEDIUM: Font = Font {
    weight: font::Weight::Medium,
    ..Font::DEFAULT
};
const LINK_COLOR: Color = Color::from_rgb(0.0, 0.48, 1.0);
const HEADER_HEIGHT: f32 = 300.0;

#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(Url),
    InvalidLinkPressed,
    AlertDismissed,
    ClosePressed,
}

pub enum Action {
    None,
    Close,
}

/// Renders a [`ProfileCard`] and owns the invalid link alert.
#[derive(Debug, Default)]
pub struct Preview {
    alert_visible: bool,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::LinkPressed(url) => {
                debug!("Opening {url}");
                if let Err(err) = open::that(url.as_str()) {
                    warn!("Failed to open {url}: {err}");
                }
                Action::None
            }
            Message::InvalidLinkPressed => {
                self.alert_visible = true;
                Action::None
            }
            Message::AlertDismissed => {
                self.alert_visible = false;
                Action::None
            }
            Message::ClosePressed => {
                self.alert_visible = false;
                Action::Close
            }
        }
    }

    /// Draw `profile` as a card. `closable` adds a close button to the title bar.
    pub fn view<'a>(
        &'a self,
        profile: &'a Profile,
        avatar: Option<&'a image::Handle>,
        closable: bool,
    ) -> Element<'a, Message> {
        let ProfileCard {
            name,
            occupation,
            bio,
            contacts,
            ..
        } = ProfileCard::compose(profile);

        let name_plate = container(
            column![
                text(name).size(28).font(BOLD),
                text(occupation).size(18).font(MEDIUM),
            ]
            .align_x(Horizontal::Right),
        )
        .padding(12)
        .style(name_plate_style);

        let header = stack![
            avatar_block(avatar),
            container(name_plate)
                .width(Fill)
                .height(HEADER_HEIGHT)
                .padding(16)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom),
        ];

        let about = container(
            column![
                text("關於我").size(18).font(BOLD),
                text(bio).width(Fill),
            ]
            .spacing(15),
        )
        .padding(16)
        .width(Fill)
        .style(container::rounded_box);

        let contacts = container(
            column![
                text("聯繫方式").size(18).font(BOLD),
                Column::with_children(contacts.into_iter().map(contact_row)).spacing(10),
            ]
            .spacing(10),
        )
        .padding(16)
        .width(Fill)
        .style(container::rounded_box);

        let mut title_bar = row![text("個人介紹").size(20), space::horizontal()];
        if closable {
            title_bar = title_bar.push(button(text("關閉")).on_press(Message::ClosePressed));
        }

        let content = column![
            title_bar,
            scrollable(column![header, about, contacts].spacing(20)),
        ]
        .spacing(12)
        .padding(20);

        if self.alert_visible {
            modal(content, invalid_link_alert(), None)
        } else {
            content.into()
        }
    }
}

fn avatar_block(avatar: Option<&image::Handle>) -> Element<'_, Message> {
    match avatar {
        Some(handle) => image(handle.clone())
            .width(Fill)
            .height(HEADER_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(space::horizontal())
            .width(Fill)
            .height(HEADER_HEIGHT)
            .style(|_theme: &Theme| container::Style {
                background: Some(
                    Color {
                        a: 0.3,
                        ..Color::from_rgb(0.5, 0.5, 0.5)
                    }
                    .into(),
                ),
                ..container::Style::default()
            })
            .into(),
    }
}

/// Valid links open on press. Invalid ones are plain text that explain themselves.
fn contact_row(contact: ContactRow<'_>) -> Element<'_, Message> {
    let value: Element<'_, Message> = match contact.link {
        Ok(url) => button(text(contact.value).color(LINK_COLOR))
            .style(button::text)
            .padding(0)
            .on_press(Message::LinkPressed(url))
            .into(),
        Err(err) => {
            debug!("Showing contact as plain text: {err}");
            mouse_area(text(contact.value).color(LINK_COLOR))
                .on_press(Message::InvalidLinkPressed)
                .into()
        }
    };

    row![text(contact.title).font(MEDIUM), space::horizontal(), value]
        .spacing(10)
        .into()
}

fn invalid_link_alert<'a>() -> Element<'a, Message> {
    container(
        column![
            text("無效的 URL").size(18).font(BOLD),
            text("平台與用戶名不可包含無效的 URL 字符"),
            row![
                space::horizontal(),
                button(text("確定")).on_press(Message::AlertDismissed)
            ],
        ]
        .spacing(12),
    )
    .padding(20)
    .width(320)
    .style(container::rounded_box)
    .into()
}

fn name_plate_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::WHITE
            }
            .into(),
        ),
        text_color: Some(Color::BLACK),
        border: border::rounded(10.0),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_alert_lifecycle() {
        let mut preview = Preview::new();

        assert!(matches!(
            preview.update(Message::InvalidLinkPressed),
            Action::None
        ));
        assert!(preview.alert_visible);

        preview.update(Message::AlertDismissed);
        assert!(!preview.alert_visible);
    }

    #[test]
    fn test_close_also_dismisses_alert() {
        let mut preview = Preview::new();
        preview.update(Message::InvalidLinkPressed);

        assert!(matches!(preview.update(Message::ClosePressed), Action::Close));
        assert!(!preview.alert_visible);
    }
}
