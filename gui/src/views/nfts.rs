use crate::helpers::{field, push_status};
use crate::messages::Message;
use crate::{styles, App, MUTED};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Fill};
use token_dashboard_core::controller::Event;

impl App {
    pub(crate) fn view_nfts(&self) -> Element<'_, Message> {
        let form = self.dashboard.nft_form();
        let status = self.dashboard.nft_status();
        let busy = status.is_submitting();

        let title = text("NFTs").size(24);

        let token_id = field(
            "Token ID",
            "Token ID",
            &form.token_id,
            busy,
            |v| Event::NftTokenIdChanged(v).into(),
        );

        let mut check = button(text("Check owner").size(12))
            .padding([6, 14])
            .style(styles::btn_secondary);
        if !busy && !self.dashboard.owner_pending() {
            check = check.on_press(Message::Dashboard(Event::CheckOwner));
        }

        let owner_line = if self.dashboard.owner_pending() {
            text("Looking up owner...").size(12).color(MUTED)
        } else if form.current_owner.is_empty() {
            text("Owner unknown").size(12).color(MUTED)
        } else {
            text(format!("Current owner: {}", form.current_owner))
                .size(12)
                .color(styles::ACCENT)
        };

        let from = field("From", "0x...", &form.from, busy, |v| {
            Event::NftFromChanged(v).into()
        });
        let to = field("To", "0x...", &form.to, busy, |v| Event::NftToChanged(v).into());

        let mut submit = button(text("Transfer NFT").size(14))
            .padding([10, 24])
            .style(styles::btn_primary);
        if !busy {
            submit = submit.on_press(Message::Dashboard(Event::SubmitNft));
        }

        let col = column![
            token_id,
            row![check, owner_line]
                .spacing(12)
                .align_y(iced::Alignment::Center),
            from,
            to,
            Space::new().height(12),
            submit,
        ]
        .spacing(4);
        let col = push_status(col, status, "Transferring...");

        let header = row![title, Space::new().width(Fill)].align_y(iced::Alignment::Center);

        column![
            header,
            container(col).padding(24).width(Fill).style(styles::card),
        ]
        .spacing(16)
        .into()
    }
}
