//! The profile record filled in by the form.
//!
//! A [`Profile`] always carries both [`StudentDetails`] and [`JobDetails`]. Only the one
//! selected by [`OccupationKind`] is shown, but the other keeps whatever was typed into
//! it so that switching back and forth never loses data. [`Profile::occupation`] is the
//! way to look at the active half.

use derive_more::Display;
use getset::{CopyGetters, Getters};
use strum::VariantArray;

use crate::{avatar::Avatar, id::ProfileId, social::SocialLinks};

#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Profile {
    #[getset(get_copy = "pub")]
    pub(crate) id: ProfileId,
    #[getset(get = "pub")]
    pub(crate) name: String,
    /// Shown as a `mailto:` contact. Not validated.
    #[getset(get = "pub")]
    pub(crate) email: String,
    #[getset(get_copy = "pub")]
    pub(crate) occupation_kind: OccupationKind,
    #[getset(get_copy = "pub")]
    pub(crate) student: StudentDetails,
    #[getset(get = "pub")]
    pub(crate) job: JobDetails,
    #[getset(get = "pub")]
    pub(crate) bio: String,
    #[getset(get = "pub")]
    pub(crate) social_links: SocialLinks,
    pub(crate) avatar: Option<Avatar>,
}

impl Profile {
    pub fn new() -> Self {
        Self {
            id: ProfileId::new(),
            name: String::new(),
            email: String::new(),
            occupation_kind: OccupationKind::default(),
            student: StudentDetails::default(),
            job: JobDetails::default(),
            bio: String::new(),
            social_links: SocialLinks::default(),
            avatar: None,
        }
    }

    pub fn avatar(&self) -> Option<&Avatar> {
        self.avatar.as_ref()
    }

    /// The details that belong to the selected [`OccupationKind`].
    pub fn occupation(&self) -> Occupation<'_> {
        match self.occupation_kind {
            OccupationKind::Student => Occupation::Student(&self.student),
            OccupationKind::Worker => Occupation::Worker(&self.job),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

/// The active half of a profile's occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupation<'a> {
    Student(&'a StudentDetails),
    Worker(&'a JobDetails),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum OccupationKind {
    #[default]
    #[display("學生")]
    Student,
    #[display("上班族")]
    Worker,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct StudentDetails {
    pub(crate) education_level: EducationLevel,
    pub(crate) year: Year,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum EducationLevel {
    #[default]
    #[display("大學")]
    Undergraduate,
    #[display("碩士")]
    Master,
    #[display("博士")]
    Phd,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct JobDetails {
    pub(crate) position: String,
}

/// A school year, always within [`Year::MIN`]..=[`Year::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Year(u8);

impl Year {
    pub const MIN: Year = Year(1);
    pub const MAX: Year = Year(6);

    /// Clamps `value` into the valid range.
    pub fn new(value: i32) -> Self {
        let saturated = u8::try_from(value).unwrap_or(if value < 0 { u8::MIN } else { u8::MAX });
        Self(saturated.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Self::new(i32::from(self.0) + 1)
    }

    pub fn prev(self) -> Self {
        Self::new(i32::from(self.0) - 1)
    }
}

impl Default for Year {
    fn default() -> Self {
        Self::MIN
    }
}
