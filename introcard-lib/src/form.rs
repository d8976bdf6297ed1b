use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    Result,
    avatar::{Avatar, AvatarRequest, AvatarSelection},
    id::LinkId,
    profile::{EducationLevel, OccupationKind, Profile, Year},
    social::SocialLink,
};

/// A form session over a single [`Profile`].
///
/// All edits to the profile go through here. Besides the profile the form keeps the
/// transient state of the session: whether the preview is open and which avatar
/// selection is still being decoded.
///
/// Switching the occupation kind keeps the details of the other kind untouched, so
/// toggling back restores what was typed before.
#[derive(Debug, Clone, Default)]
pub struct Form {
    profile: Profile,
    preview_visible: bool,
    /// The most recent avatar request
    last_request: AvatarRequest,
    avatar_pending: bool,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // Fields

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.profile.name = name.into();
        trace!("Name changed");
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.profile.email = email.into();
        trace!("Email changed");
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.profile.bio = bio.into();
        trace!("Bio changed");
    }

    pub fn set_occupation_kind(&mut self, kind: OccupationKind) {
        if kind == self.profile.occupation_kind {
            return;
        }

        debug!(
            "Occupation changed from {:?} to {kind:?}",
            self.profile.occupation_kind
        );
        self.profile.occupation_kind = kind;
    }

    pub fn set_education_level(&mut self, level: EducationLevel) {
        self.profile.student.education_level = level;
        trace!("Education level changed to {level:?}");
    }

    /// Set the school year, clamping it into range. Returns the year actually stored.
    pub fn set_year(&mut self, value: i32) -> Year {
        let year = Year::new(value);
        if i32::from(year.get()) != value {
            debug!("Clamped year {value} to {year}");
        }

        self.profile.student.year = year;
        year
    }

    pub fn increment_year(&mut self) -> Year {
        self.profile.student.year = self.profile.student.year.next();
        self.profile.student.year
    }

    pub fn decrement_year(&mut self) -> Year {
        self.profile.student.year = self.profile.student.year.prev();
        self.profile.student.year
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        self.profile.job.position = position.into();
        trace!("Position changed");
    }

    // Social links

    pub fn add_social_link(&mut self) -> LinkId {
        self.profile.social_links.append()
    }

    /// Remove the social links at the given positions of the current list.
    pub fn remove_social_links<I>(&mut self, positions: I) -> Result<Vec<SocialLink>>
    where
        I: IntoIterator<Item = usize>,
    {
        self.profile.social_links.remove_at(positions)
    }

    pub fn set_link_platform(&mut self, id: LinkId, platform: impl Into<String>) -> Result<()> {
        self.profile.social_links.get_mut(id)?.platform = platform.into();
        Ok(())
    }

    pub fn set_link_username(&mut self, id: LinkId, username: impl Into<String>) -> Result<()> {
        self.profile.social_links.get_mut(id)?.username = username.into();
        Ok(())
    }

    // Avatar

    /// Record a new picker selection that is about to be decoded.
    ///
    /// The returned ticket goes back into [`Form::resolve_avatar`] with the outcome. The
    /// current avatar stays in place until then.
    pub fn select_avatar(&mut self, selection: &AvatarSelection) -> AvatarRequest {
        self.last_request = self.last_request.next();
        self.avatar_pending = true;

        debug!(
            "Avatar {:?} selected: {}",
            self.last_request,
            selection.path().display()
        );

        self.last_request
    }

    /// Whether the latest request is still waiting to be decoded.
    pub fn is_avatar_pending(&self) -> bool {
        self.avatar_pending
    }

    /// Apply the outcome of `request`.
    ///
    /// A successful decode replaces the avatar, whichever request it came from, so the
    /// last decode to finish wins. A failure leaves the avatar as it was. Returns whether
    /// the avatar changed.
    pub fn resolve_avatar<E>(
        &mut self,
        request: AvatarRequest,
        result: std::result::Result<Avatar, E>,
    ) -> bool
    where
        E: Display,
    {
        if request == self.last_request {
            self.avatar_pending = false;
        }

        match result {
            Ok(avatar) => {
                debug!("Avatar {request:?} resolved");
                self.profile.avatar = Some(avatar);
                true
            }
            Err(err) => {
                debug!("Ignoring avatar {request:?} that failed to resolve: {err}");
                false
            }
        }
    }

    // Preview

    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn set_preview_visible(&mut self, visible: bool) {
        self.preview_visible = visible;
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.preview_visible = !self.preview_visible;
        self.preview_visible
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, describe_occupation};

    fn avatar(size: u32) -> Avatar {
        let pixels = image::RgbaImage::new(size, size);
        let mut bytes = std::io::Cursor::new(Vec::new());
        pixels
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        Avatar::from_encoded(bytes.get_ref()).unwrap()
    }

    fn selection(name: &str) -> AvatarSelection {
        AvatarSelection::from(std::path::PathBuf::from(name))
    }

    #[test]
    fn test_text_fields() {
        let mut form = Form::new();

        form.set_name("林小明");
        form.set_email("not even an email");
        form.set_bio("");

        assert_eq!(form.profile().name(), "林小明");
        assert_eq!(form.profile().email(), "not even an email");
        assert_eq!(form.profile().bio(), "");
    }

    #[test]
    fn test_year_is_clamped() {
        let mut form = Form::new();
        form.set_year(3);

        assert_eq!(form.set_year(7).get(), 6);
        assert_eq!(form.profile().student().year().get(), 6);

        form.set_year(3);
        assert_eq!(form.set_year(0).get(), 1);
        assert_eq!(form.profile().student().year().get(), 1);
    }

    #[test]
    fn test_year_stepper() {
        let mut form = Form::new();

        assert_eq!(form.decrement_year().get(), 1);
        for _ in 0..10 {
            form.increment_year();
        }
        assert_eq!(form.profile().student().year().get(), 6);
        assert_eq!(form.decrement_year().get(), 5);
    }

    #[test]
    fn test_toggle_occupation_preserves_details() {
        let mut form = Form::new();
        form.set_education_level(EducationLevel::Master);
        form.set_year(2);

        form.set_occupation_kind(OccupationKind::Worker);
        form.set_position("Engineer");
        assert_eq!(describe_occupation(form.profile()), "Engineer");

        form.set_occupation_kind(OccupationKind::Student);
        assert_eq!(
            form.profile().student().education_level(),
            EducationLevel::Master
        );
        assert_eq!(form.profile().student().year().get(), 2);
        assert_eq!(describe_occupation(form.profile()), "碩士2年級");

        // Editing the student half never resets the job half
        form.set_year(4);
        form.set_education_level(EducationLevel::Phd);
        assert_eq!(form.profile().job().position(), "Engineer");

        form.set_occupation_kind(OccupationKind::Worker);
        assert_eq!(describe_occupation(form.profile()), "Engineer");
    }

    #[test]
    fn test_social_links() {
        let mut form = Form::new();

        let first = form.add_social_link();
        let second = form.add_social_link();
        form.set_link_platform(second, "github").unwrap();
        form.set_link_username(second, "octocat").unwrap();

        let removed = form.remove_social_links([0]).unwrap();
        assert_eq!(removed.first().map(SocialLink::id), Some(first));

        let remaining = form.profile().social_links();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().map(|l| l.platform().as_str()), Some("github"));

        assert!(matches!(
            form.set_link_platform(first, "gone"),
            Err(Error::UnknownLink(_))
        ));
        assert!(matches!(
            form.remove_social_links([1]),
            Err(Error::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_avatar_resolution() {
        let mut form = Form::new();
        let first = form.select_avatar(&selection("first.png"));
        assert!(form.is_avatar_pending());
        assert!(form.profile().avatar().is_none());

        assert!(form.resolve_avatar(first, Ok::<_, Error>(avatar(2))));
        assert!(!form.is_avatar_pending());
        assert_eq!(form.profile().avatar().map(Avatar::width), Some(2));
    }

    #[test]
    fn test_avatar_failure_is_ignored() {
        let mut form = Form::new();
        let good = form.select_avatar(&selection("good.png"));
        form.resolve_avatar(good, Ok::<_, Error>(avatar(3)));

        let bad = form.select_avatar(&selection("bad.png"));
        assert!(!form.resolve_avatar(bad, Err::<Avatar, _>("cancelled")));

        assert!(!form.is_avatar_pending());
        assert_eq!(form.profile().avatar().map(Avatar::width), Some(3));
    }

    #[test]
    fn test_last_resolution_wins() {
        let mut form = Form::new();
        let slow = form.select_avatar(&selection("slow.png"));
        let fast = form.select_avatar(&selection("fast.png"));

        form.resolve_avatar(fast, Ok::<_, Error>(avatar(1)));
        // The latest selection has resolved
        assert!(!form.is_avatar_pending());

        form.resolve_avatar(slow, Ok::<_, Error>(avatar(5)));
        assert_eq!(form.profile().avatar().map(Avatar::width), Some(5));
    }

    #[test]
    fn test_same_file_selected_twice_stays_pending() {
        let mut form = Form::new();
        let same = selection("same.png");

        let first = form.select_avatar(&same);
        let second = form.select_avatar(&same);
        assert_ne!(first, second);

        form.resolve_avatar(first, Err::<Avatar, _>("unsupported image format"));
        assert!(form.is_avatar_pending());

        form.resolve_avatar(second, Ok::<_, Error>(avatar(2)));
        assert!(!form.is_avatar_pending());
        assert_eq!(form.profile().avatar().map(Avatar::width), Some(2));
    }

    #[test]
    fn test_preview_flag() {
        let mut form = Form::new();
        let before = form.profile().clone();

        assert!(!form.is_preview_visible());
        assert!(form.toggle_preview());
        assert!(!form.toggle_preview());

        form.set_preview_visible(true);
        assert!(form.is_preview_visible());

        // The flag lives outside the profile
        assert_eq!(form.profile().id(), before.id());
        assert_eq!(form.profile().name(), before.name());
    }
}
