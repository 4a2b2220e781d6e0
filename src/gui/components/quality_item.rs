//! Selectable quality option row

use crate::extractor::QualityOption;
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

pub fn quality_item(quality: &QualityOption) -> Element<'static, Message> {
    let icon = container(text(if quality.is_audio { "♪" } else { "▶" }).size(20))
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(48.0))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            theme::FormatIconContainer {
                is_audio: quality.is_audio,
            },
        )));

    let labels = column![
        text(&quality.label).size(18).font(theme::BOLD),
        text(quality.resolution.to_uppercase())
            .size(12)
            .font(iced::Font::MONOSPACE)
            .style(theme::TEXT_MUTED),
    ]
    .spacing(2);

    let size_badge = container(text(&quality.size).size(10).font(theme::BOLD))
        .padding([4, 8])
        .style(iced::theme::Container::Custom(Box::new(theme::BadgeContainer::Size)));

    let content = row![
        icon,
        labels,
        Space::with_width(Length::Fill),
        size_badge,
        text("⬇").size(18).style(theme::CYAN_400),
    ]
    .spacing(16)
    .align_items(Alignment::Center);

    button(content)
        .on_press(Message::QualitySelected(quality.id.clone()))
        .padding([16, 20])
        .width(Length::Fill)
        .style(iced::theme::Button::Custom(Box::new(theme::QualityRowButton)))
        .into()
}
