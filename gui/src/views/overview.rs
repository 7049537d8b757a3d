use crate::messages::Message;
use crate::{styles, App, MUTED};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Fill};
use token_dashboard_core::amount::format_with_symbol;
use token_dashboard_core::controller::Event;
use token_dashboard_core::LoadState;

impl App {
    pub(crate) fn view_overview(&self) -> Element<'_, Message> {
        let title = text("Overview").size(24);

        let mut refresh = button(text("Refresh").size(13))
            .padding([8, 16])
            .style(styles::btn_secondary);
        if !self.dashboard.is_loading() {
            refresh = refresh.on_press(Message::Dashboard(Event::Refresh));
        }

        let header = row![title, Space::new().width(Fill), refresh]
            .align_y(iced::Alignment::Center);

        let body: Element<Message> = match self.dashboard.snapshot() {
            LoadState::Loading => text("Loading token data...").size(14).color(MUTED).into(),
            LoadState::LoadFailed(e) => text(format!("Error loading token data: {e}"))
                .size(14)
                .color(styles::DANGER)
                .into(),
            LoadState::Loaded(s) => {
                let stat = |label: &'static str, value: String| {
                    column![
                        text(label).size(12).color(MUTED),
                        text(value).size(20).font(styles::BOLD),
                    ]
                    .spacing(4)
                };
                column![
                    stat("Balance", format_with_symbol(&s.balance, &s.symbol)),
                    stat("Total supply", format_with_symbol(&s.total_supply, &s.symbol)),
                    stat("Symbol", s.symbol.clone()),
                ]
                .spacing(16)
                .into()
            }
        };

        column![
            header,
            container(body).padding(24).width(Fill).style(styles::card),
        ]
        .spacing(16)
        .into()
    }
}
