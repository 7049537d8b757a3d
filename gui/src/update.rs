use iced::Task;
use token_dashboard_core::controller::Request;
use token_dashboard_core::DashboardError;

use crate::messages::Message;
use crate::App;

impl App {
    // -- Update --

    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoTo(screen) => {
                self.screen = screen;
                Task::none()
            }
            Message::Dashboard(event) => {
                let request = self.dashboard.update(event);
                self.dispatch(request)
            }
        }
    }

    /// Turn a reducer request into a task whose completion feeds back into
    /// `update`. Without a provider the request fails immediately.
    pub(crate) fn dispatch(&self, request: Option<Request>) -> Task<Message> {
        let Some(request) = request else {
            return Task::none();
        };
        match &self.facade {
            Some(facade) => Task::perform(request.run(facade.clone()), Message::Dashboard),
            None => {
                let err = DashboardError::NotConnected(self.connection.not_connected_reason());
                Task::done(Message::Dashboard(request.fail(err)))
            }
        }
    }
}
