use token_dashboard_core::controller::Event;

use crate::state::Screen;

// -- Messages --

#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Navigation
    GoTo(Screen),

    // Everything the dashboard reducer handles: form input, submissions,
    // and their completions
    Dashboard(Event),
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Message::Dashboard(event)
    }
}
