use std::collections::HashSet;

use derive_more::{Deref, DerefMut};
use iced::{
    ContentFit, Element,
    Length::Fill,
    Task,
    widget::{
        Column, button, checkbox, column, container, image, pick_list, row, scrollable, space,
        text, text_editor, text_input,
    },
};
use introcard_lib::{
    Avatar, AvatarRequest, AvatarSelection, EducationLevel, FileDecoder, Form, ImageDecoder,
    LinkId, Occupation, OccupationKind, PresentationMode, SocialLink, Year,
};
use rfd::AsyncFileDialog;
use strum::VariantArray;
use tracing::warn;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    OccupationSelected(OccupationKind),
    EducationLevelSelected(EducationLevel),
    YearIncremented,
    YearDecremented,
    PositionChanged(String),
    BioEdited(text_editor::Action),
    AddLinkPressed,
    LinkPlatformChanged(LinkId, String),
    LinkUsernameChanged(LinkId, String),
    LinkToggled(LinkId, bool),
    RemoveLinkPressed(LinkId),
    RemoveSelectedPressed,
    PickAvatarPressed,
    AvatarPicked(Option<AvatarSelection>),
    AvatarResolved(AvatarRequest, Result<Avatar, String>),
    PreviewPressed,
}

/// Action used for communicating with the parent component
pub enum Action {
    None,
    Run(Task<Message>),
}

/// The editable side of the app, wrapping the [`Form`] session.
#[derive(Deref, DerefMut)]
pub struct ProfileForm {
    #[deref]
    #[deref_mut]
    form: Form,
    decoder: FileDecoder,
    bio: text_editor::Content,
    /// Social links ticked for removal
    selected_links: HashSet<LinkId>,
    /// GPU handle for the current avatar, rebuilt whenever it changes
    avatar: Option<image::Handle>,
}

impl ProfileForm {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                form: Form::new(),
                decoder: FileDecoder,
                bio: text_editor::Content::new(),
                selected_links: HashSet::new(),
                avatar: None,
            },
            Task::none(),
        )
    }

    pub fn avatar_handle(&self) -> Option<&image::Handle> {
        self.avatar.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameChanged(name) => self.form.set_name(name),
            Message::EmailChanged(email) => self.form.set_email(email),
            Message::OccupationSelected(kind) => self.form.set_occupation_kind(kind),
            Message::EducationLevelSelected(level) => self.form.set_education_level(level),
            Message::YearIncremented => {
                self.form.increment_year();
            }
            Message::YearDecremented => {
                self.form.decrement_year();
            }
            Message::PositionChanged(position) => self.form.set_position(position),
            Message::BioEdited(action) => {
                let is_edit = action.is_edit();
                self.bio.perform(action);

                if is_edit {
                    self.form.set_bio(self.bio.text());
                }
            }
            Message::AddLinkPressed => {
                self.form.add_social_link();
            }
            Message::LinkPlatformChanged(id, platform) => {
                if let Err(err) = self.form.set_link_platform(id, platform) {
                    warn!("Dropped platform edit: {err}");
                }
            }
            Message::LinkUsernameChanged(id, username) => {
                if let Err(err) = self.form.set_link_username(id, username) {
                    warn!("Dropped username edit: {err}");
                }
            }
            Message::LinkToggled(id, selected) => {
                if selected {
                    self.selected_links.insert(id);
                } else {
                    self.selected_links.remove(&id);
                }
            }
            Message::RemoveLinkPressed(id) => self.remove_links([id]),
            Message::RemoveSelectedPressed => {
                let selected: Vec<LinkId> = self.selected_links.drain().collect();
                self.remove_links(selected);
            }
            Message::PickAvatarPressed => return Action::Run(pick_avatar()),
            // Cancelled
            Message::AvatarPicked(None) => {}
            Message::AvatarPicked(Some(selection)) => {
                return Action::Run(self.decode_avatar(selection));
            }
            Message::AvatarResolved(request, result) => {
                if self.form.resolve_avatar(request, result) {
                    self.avatar = self.form.profile().avatar().map(|avatar| {
                        image::Handle::from_rgba(
                            avatar.width(),
                            avatar.height(),
                            avatar.pixels().clone(),
                        )
                    });
                }
            }
            Message::PreviewPressed => self.form.set_preview_visible(true),
        }

        Action::None
    }

    pub fn view(&self, mode: PresentationMode) -> Element<'_, Message> {
        let profile = self.form.profile();

        let basics = section(
            "基本資料",
            column![
                text_input("姓名", profile.name()).on_input(Message::NameChanged),
                text_input("電子郵箱", profile.email()).on_input(Message::EmailChanged),
                labeled(
                    "身份",
                    pick_list(
                        OccupationKind::VARIANTS,
                        Some(profile.occupation_kind()),
                        Message::OccupationSelected,
                    ),
                ),
                self.occupation_fields(),
            ]
            .spacing(10),
        );

        let bio = section(
            "自我介紹",
            text_editor(&self.bio)
                .on_action(Message::BioEdited)
                .height(100),
        );

        let links = Column::with_children(
            profile
                .social_links()
                .iter()
                .map(|link| self.link_row(link)),
        )
        .spacing(10);

        let social = section(
            "社交媒體",
            column![
                links,
                row![
                    button(text("+ 添加社交媒體")).on_press(Message::AddLinkPressed),
                    space::horizontal(),
                    button(text("刪除所選"))
                        .style(button::danger)
                        .on_press_maybe(
                            (!self.selected_links.is_empty())
                                .then_some(Message::RemoveSelectedPressed)
                        ),
                ]
                .spacing(10),
            ]
            .spacing(10),
        );

        let mut avatar = column![button(text("選擇頭像")).on_press(Message::PickAvatarPressed)]
            .spacing(10);
        if self.form.is_avatar_pending() {
            avatar = avatar.push(text("載入中..."));
        }
        if let Some(handle) = &self.avatar {
            avatar = avatar.push(
                container(
                    image(handle.clone())
                        .height(200)
                        .content_fit(ContentFit::Contain),
                )
                .center_x(Fill),
            );
        }

        let mut content = column![
            text("個人檔案製作").size(28),
            basics,
            bio,
            social,
            section("頭像", avatar),
        ]
        .spacing(20)
        .padding(20);

        if mode.needs_preview_button() {
            content = content.push(
                container(button(text("預覽介紹")).on_press(Message::PreviewPressed))
                    .center_x(Fill),
            );
        }

        scrollable(content).into()
    }

    fn occupation_fields(&self) -> Element<'_, Message> {
        match self.form.profile().occupation() {
            Occupation::Student(details) => column![
                labeled(
                    "教育程度",
                    pick_list(
                        EducationLevel::VARIANTS,
                        Some(details.education_level()),
                        Message::EducationLevelSelected,
                    ),
                ),
                year_stepper(details.year()),
            ]
            .spacing(10)
            .into(),
            Occupation::Worker(job) => text_input("職位", job.position())
                .on_input(Message::PositionChanged)
                .into(),
        }
    }

    fn link_row<'a>(&'a self, link: &'a SocialLink) -> Element<'a, Message> {
        let id = link.id();

        row![
            checkbox(self.selected_links.contains(&id))
                .on_toggle(move |selected| Message::LinkToggled(id, selected)),
            text_input("平台", link.platform())
                .on_input(move |platform| Message::LinkPlatformChanged(id, platform)),
            text_input("用戶名", link.username())
                .on_input(move |username| Message::LinkUsernameChanged(id, username)),
            button(text("刪除"))
                .style(button::danger)
                .on_press(Message::RemoveLinkPressed(id)),
        ]
        .spacing(10)
        .into()
    }

    /// Remove links by id, translating them to their current positions first.
    fn remove_links(&mut self, ids: impl IntoIterator<Item = LinkId>) {
        let links = self.form.profile().social_links();
        let positions: Vec<usize> = ids
            .into_iter()
            .filter_map(|id| links.position(id))
            .collect();

        match self.form.remove_social_links(positions) {
            Ok(removed) => {
                for link in removed {
                    self.selected_links.remove(&link.id());
                }
            }
            Err(err) => warn!("Failed to remove social links: {err}"),
        }
    }

    fn decode_avatar(&mut self, selection: AvatarSelection) -> Task<Message> {
        let request = self.form.select_avatar(&selection);

        let decoding = self.decoder.decode(selection);
        Task::perform(
            async move { decoding.await.map_err(|err| err.to_string()) },
            move |result| Message::AvatarResolved(request, result),
        )
    }
}

fn pick_avatar() -> Task<Message> {
    Task::perform(
        async {
            AsyncFileDialog::new()
                .set_title("選擇頭像")
                .add_filter("圖片", &IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| AvatarSelection::from(handle.path().to_path_buf()))
        },
        Message::AvatarPicked,
    )
}

fn year_stepper<'a>(year: Year) -> Element<'a, Message> {
    row![
        text(format!("年級: {year}")),
        space::horizontal(),
        button(text("-")).on_press_maybe((year > Year::MIN).then_some(Message::YearDecremented)),
        button(text("+")).on_press_maybe((year < Year::MAX).then_some(Message::YearIncremented)),
    ]
    .spacing(10)
    .into()
}

fn labeled<'a>(
    label: &'a str,
    widget: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    row![text(label), space::horizontal(), widget.into()]
        .spacing(10)
        .into()
}

fn section<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![
        text(title).size(14),
        container(content)
            .padding(12)
            .width(Fill)
            .style(container::rounded_box),
    ]
    .spacing(6)
    .into()
}
