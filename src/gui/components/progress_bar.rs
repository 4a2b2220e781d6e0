//! Progress bar component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{column, container, progress_bar as iced_progress_bar, row, text, Space};
use iced::{Alignment, Element, Length};

/// Panel shown in place of the quality list while a download runs
pub fn download_panel(percent: u8) -> Element<'static, Message> {
    let bar = iced_progress_bar(0.0..=100.0, f32::from(percent))
        .height(Length::Fixed(16.0))
        .style(iced::theme::ProgressBar::Custom(Box::new(
            theme::ProgressBarStyle,
        )));

    container(
        column![
            row![
                text("Preparando seu arquivo...")
                    .size(16)
                    .font(theme::BOLD)
                    .style(theme::SLATE_300),
                Space::with_width(Length::Fill),
                text(format!("{}%", percent))
                    .size(26)
                    .font(theme::BLACK)
                    .style(theme::CYAN_400),
            ]
            .align_items(Alignment::End),
            bar,
            container(
                text("Isso pode levar alguns segundos dependendo da conexão.")
                    .size(12)
                    .style(theme::TEXT_MUTED),
            )
            .width(Length::Fill)
            .center_x(),
        ]
        .spacing(16),
    )
    .padding(32)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::ProgressPanelContainer,
    )))
    .into()
}
