//! The two halves of the window: the editable form and the read-only card preview.

pub mod modal;
pub mod preview;
pub mod profile_form;
