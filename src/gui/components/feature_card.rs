use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

pub fn feature_card(icon: &str, title: &str, description: &str) -> Element<'static, Message> {
    container(
        column![
            text(icon).size(30),
            text(title).size(16).font(theme::BOLD),
            text(description)
                .size(12)
                .style(theme::TEXT_SECONDARY)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    )
    .padding(24)
    .width(Length::FillPortion(1))
    .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
    .into()
}
