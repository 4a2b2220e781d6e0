//! Recent lookups grid

use crate::gui::app::Message;
use crate::gui::components::history_card;
use crate::gui::theme;
use crate::history::HistoryCache;
use iced::widget::{button, column, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

const CARDS_PER_ROW: usize = 5;

pub fn history_view(history: &HistoryCache) -> Element<'static, Message> {
    let header = row![
        text("ÚLTIMOS DOWNLOADS").size(24).font(theme::BLACK),
        Space::with_width(Length::Fill),
        button(text("LIMPAR TUDO").size(12).font(theme::BOLD))
            .on_press(Message::ClearHistory)
            .style(iced::theme::Button::Custom(Box::new(
                theme::LinkButton::Destructive
            ))),
    ]
    .align_items(Alignment::Center);

    let rows = history.items().chunks(CARDS_PER_ROW).map(|chunk| -> Element<'static, Message> {
        let mut cards: Vec<Element<'static, Message>> = chunk.iter().map(history_card).collect();
        // Pad the last row so cards keep the same width
        for _ in chunk.len()..CARDS_PER_ROW {
            cards.push(Space::with_width(Length::FillPortion(1)).into());
        }
        Row::with_children(cards).spacing(16).into()
    });

    column![header, Column::with_children(rows).spacing(16)]
        .spacing(32)
        .width(Length::Fill)
        .into()
}
