//! Core of Introcard, a personal profile card maker.
//!
//! The [`Profile`] record is edited through a [`Form`], which is the only place that
//! mutates it. Everything the preview shows is derived on demand: the occupation
//! line through [`describe_occupation`], contact links through [`resolve_link`], and
//! the whole card through [`ProfileCard::compose`].

mod error;

pub mod avatar;
pub mod card;
pub mod form;
pub mod fs;
pub mod id;
pub mod layout;
pub mod link;
pub mod occupation;
pub mod profile;
pub mod social;

pub use avatar::{Avatar, AvatarRequest, AvatarSelection, FileDecoder, ImageDecoder};
pub use card::{ContactRow, ProfileCard};
pub use error::{Error, Result};
pub use form::Form;
pub use id::{LinkId, ProfileId};
pub use layout::{PresentationMode, WidthClass};
pub use link::{InvalidLink, resolve_link, resolve_social_link};
pub use occupation::describe_occupation;
pub use profile::{
    EducationLevel, JobDetails, Occupation, OccupationKind, Profile, StudentDetails, Year,
};
pub use social::{SocialLink, SocialLinks};
pub use url::Url;
