//! The read-only composition behind the preview.

use url::Url;

use crate::{
    avatar::Avatar,
    link::{InvalidLink, mail_address, resolve_link, resolve_social_link},
    occupation::describe_occupation,
    profile::Profile,
};

/// Title of the email row in the contacts section.
pub const EMAIL_TITLE: &str = "電子郵箱";

/// Everything the profile card shows, derived from a [`Profile`] snapshot.
#[derive(Debug, Clone)]
pub struct ProfileCard<'a> {
    /// `None` renders as a placeholder block.
    pub avatar: Option<&'a Avatar>,
    pub name: &'a str,
    pub occupation: String,
    /// Shown verbatim, an empty bio is an empty block.
    pub bio: &'a str,
    /// The email first, then every social link in order.
    pub contacts: Vec<ContactRow<'a>>,
}

impl<'a> ProfileCard<'a> {
    pub fn compose(profile: &'a Profile) -> Self {
        let email = ContactRow::new(
            EMAIL_TITLE,
            profile.email(),
            resolve_link(&mail_address(profile.email())),
        );
        let social = profile.social_links().iter().map(|link| {
            ContactRow::new(
                link.platform(),
                link.username(),
                resolve_social_link(link.platform(), link.username()),
            )
        });

        Self {
            avatar: profile.avatar(),
            name: profile.name(),
            occupation: describe_occupation(profile),
            bio: profile.bio(),
            contacts: std::iter::once(email).chain(social).collect(),
        }
    }
}

/// A single contact line. Each row resolves its link on its own.
#[derive(Debug, Clone)]
pub struct ContactRow<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub link: Result<Url, InvalidLink>,
}

impl<'a> ContactRow<'a> {
    fn new(title: &'a str, value: &'a str, link: Result<Url, InvalidLink>) -> Self {
        Self { title, value, link }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Form;

    #[test]
    fn test_empty_profile() {
        let profile = Profile::new();
        let card = ProfileCard::compose(&profile);

        assert!(card.avatar.is_none());
        assert_eq!(card.name, "");
        assert_eq!(card.occupation, "大學1年級");
        assert_eq!(card.bio, "");
        assert_eq!(card.contacts.len(), 1);

        let email = card.contacts.first().unwrap();
        assert_eq!(email.title, EMAIL_TITLE);
        assert!(email.link.is_ok());
    }

    #[test]
    fn test_contacts_in_order_and_independent() {
        let mut form = Form::new();
        form.set_name("Mei");
        form.set_email("mei@example.org");
        form.set_bio("Hello there");

        let github = form.add_social_link();
        form.set_link_platform(github, "github").unwrap();
        form.set_link_username(github, "mei").unwrap();

        let broken = form.add_social_link();
        form.set_link_platform(broken, "my space").unwrap();
        form.set_link_username(broken, "mei").unwrap();

        let twitter = form.add_social_link();
        form.set_link_platform(twitter, "twitter").unwrap();
        form.set_link_username(twitter, "mei_tw").unwrap();

        let card = ProfileCard::compose(form.profile());

        assert_eq!(card.name, "Mei");
        assert_eq!(card.bio, "Hello there");

        let titles: Vec<_> = card.contacts.iter().map(|row| row.title).collect();
        assert_eq!(titles, [EMAIL_TITLE, "github", "my space", "twitter"]);

        let valid: Vec<_> = card.contacts.iter().map(|row| row.link.is_ok()).collect();
        assert_eq!(valid, [true, true, false, true]);

        let twitter_row = card.contacts.last().unwrap();
        assert_eq!(twitter_row.value, "mei_tw");
        assert_eq!(
            twitter_row.link.as_ref().unwrap().as_str(),
            "https://twitter.com/mei_tw"
        );
    }

    #[test]
    fn test_platform_outside_its_host_is_invalid() {
        let mut form = Form::new();
        let link = form.add_social_link();
        form.set_link_platform(link, "me@evil").unwrap();
        form.set_link_username(link, "mei").unwrap();

        let card = ProfileCard::compose(form.profile());

        assert!(matches!(
            card.contacts.last().map(|row| &row.link),
            Some(Err(InvalidLink::ForeignHost { .. }))
        ));
    }
}
