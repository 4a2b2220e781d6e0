//! History grid tile

use crate::gui::app::Message;
use crate::gui::theme;
use crate::history::HistoryItem;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Cut `value` to `max` characters, marking the cut with an ellipsis
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let kept: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

fn badge(label: &str, style: theme::BadgeContainer) -> Element<'static, Message> {
    container(text(label).size(10).font(theme::BLACK))
        .padding([2, 6])
        .style(iced::theme::Container::Custom(Box::new(style)))
        .into()
}

pub fn history_card(item: &HistoryItem) -> Element<'static, Message> {
    let preview = container(
        column![
            Space::with_height(Length::Fill),
            row![
                badge(&item.data.duration, theme::BadgeContainer::Duration),
                Space::with_width(Length::Fill),
                badge("HD", theme::BadgeContainer::Hd),
            ]
            .align_items(Alignment::Center),
        ]
        .padding(8),
    )
    .width(Length::Fill)
    .height(Length::Fixed(140.0))
    .style(iced::theme::Container::Custom(Box::new(
        theme::ThumbnailContainer,
    )));

    let caption = column![
        text(format!("@{}", truncate(&item.data.creator, 16)))
            .size(11)
            .font(theme::BLACK)
            .style(theme::CYAN_400),
        text(truncate(&item.data.title, 22))
            .size(11)
            .style(theme::TEXT_SECONDARY),
    ]
    .spacing(4)
    .padding(10);

    button(column![preview, caption])
        .on_press(Message::OpenHistoryItem(item.id.clone()))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(iced::theme::Button::Custom(Box::new(theme::HistoryCardButton)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("user_abc", 16), "user_abc");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Conteúdo TikTok", 9), "Conteúdo…");
    }
}
