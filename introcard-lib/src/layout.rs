//! How the preview is placed next to the form.

/// Coarse width signal from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    Compact,
    Regular,
}

impl WidthClass {
    /// Classify a window width. Widths at or above `regular_width` are [`WidthClass::Regular`].
    pub fn from_width(width: f32, regular_width: f32) -> Self {
        if width >= regular_width {
            Self::Regular
        } else {
            Self::Compact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// The preview opens on demand over the form.
    Modal,
    /// The preview is always shown beside the form.
    SideBySide,
}

impl PresentationMode {
    /// An unknown width class is treated as compact.
    pub fn for_width_class(width_class: Option<WidthClass>) -> Self {
        match width_class {
            Some(WidthClass::Regular) => Self::SideBySide,
            Some(WidthClass::Compact) | None => Self::Modal,
        }
    }

    /// Whether the form needs its own button to open the preview.
    pub fn needs_preview_button(self) -> bool {
        self == Self::Modal
    }
}
