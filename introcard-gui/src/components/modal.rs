//! Overlay used for the compact preview and the invalid link alert.

use iced::{
    Color, Element,
    Length::Fill,
    Theme,
    widget::{center, container, mouse_area, opaque, stack},
};

const SCRIM: Color = Color::from_rgba(0.05, 0.07, 0.1, 0.6);

/// Lay `dialog` centred over `base`, dimming and blocking everything beneath it.
///
/// Pressing the dimmed area emits `on_dismiss` when one is given.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_dismiss: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let scrim = mouse_area(center(opaque(dialog)).style(scrim_style));
    let scrim = match on_dismiss {
        Some(message) => scrim.on_press(message),
        None => scrim,
    };

    stack![base.into(), opaque(scrim)]
        .width(Fill)
        .height(Fill)
        .into()
}

fn scrim_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SCRIM.into()),
        ..container::Style::default()
    }
}
