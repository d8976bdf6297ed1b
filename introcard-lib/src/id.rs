//! Identity for profiles and social links.
//!
//! Ids are random and only ever compared for equality. They are never parsed, ordered
//! or reused once handed out.

use derive_more::Display;
use uuid::Uuid;

/// Identifies a [`Profile`](crate::Profile) for the lifetime of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct ProfileId(Uuid);

impl ProfileId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Identifies a single [`SocialLink`](crate::SocialLink) within a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct LinkId(Uuid);

impl LinkId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}
