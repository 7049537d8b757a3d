use iced::widget::{column, text, text_input, Column, Space};
use iced::Element;
use token_dashboard_core::controller::FormStatus;

use crate::messages::Message;
use crate::{styles, MUTED};

/// Append the busy line, error, and notice for a form.
pub(crate) fn push_status<'a>(
    col: Column<'a, Message>,
    status: &'a FormStatus,
    busy_text: &'a str,
) -> Column<'a, Message> {
    let mut col = col;
    if status.is_submitting() {
        col = col.push(text(busy_text).size(13).color(MUTED));
    }
    if let Some(err) = &status.error {
        col = col.push(text(err.as_str()).size(13).color(styles::DANGER));
    }
    if let Some(msg) = &status.notice {
        col = col.push(text(msg.as_str()).size(13).color(styles::ACCENT));
    }
    col
}

/// Labelled text input. Editing is disabled while `locked`.
pub(crate) fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    locked: bool,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut input = text_input(placeholder, value).size(14);
    if !locked {
        input = input.on_input(on_input);
    }
    column![
        Space::new().height(4),
        text(label).size(12).color(MUTED),
        input,
    ]
    .spacing(4)
    .into()
}
