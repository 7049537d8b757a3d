use crate::helpers::{field, push_status};
use crate::messages::Message;
use crate::{styles, App};
use iced::widget::{button, column, container, row, text, Row, Space};
use iced::{Element, Fill};
use token_dashboard_core::controller::{Event, TokenAction};

impl App {
    pub(crate) fn view_transact(&self) -> Element<'_, Message> {
        let form = self.dashboard.token_form();
        let status = self.dashboard.token_status();
        let busy = status.is_submitting();

        let title = text("Transact").size(24);

        let actions = TokenAction::ALL
            .iter()
            .fold(Row::new().spacing(8), |r, &action| {
                let mut btn = button(text(action.to_string()).size(13))
                    .padding([6, 14])
                    .style(styles::toggle_btn(form.action == action));
                if !busy {
                    btn = btn.on_press(Message::Dashboard(Event::ActionSelected(action)));
                }
                r.push(btn)
            });

        let recipient = field(
            "Recipient",
            "0x... (transfer)",
            &form.recipient_address,
            busy,
            |v| Event::RecipientChanged(v).into(),
        );
        let token_id = field(
            "Token ID",
            "Token ID (deposit)",
            &form.token_id,
            busy,
            |v| Event::TokenIdChanged(v).into(),
        );
        let amount = field(
            "Amount",
            "Amount",
            &form.amount,
            busy,
            |v| Event::AmountChanged(v).into(),
        );

        let mut submit = button(text(form.action.to_string()).size(14))
            .padding([10, 24])
            .style(styles::btn_primary);
        if !busy {
            submit = submit.on_press(Message::Dashboard(Event::SubmitToken));
        }

        let col = column![
            actions,
            recipient,
            token_id,
            amount,
            Space::new().height(12),
            submit,
        ]
        .spacing(4);
        let col = push_status(col, status, "Waiting for confirmation...");

        let header = row![title, Space::new().width(Fill)].align_y(iced::Alignment::Center);

        column![
            header,
            container(col).padding(24).width(Fill).style(styles::card),
        ]
        .spacing(16)
        .into()
    }
}
