//! Result screen: video summary with quality options or download progress

use crate::extractor::VideoInfo;
use crate::gui::app::Message;
use crate::gui::components::{download_panel, quality_item};
use crate::gui::theme;
use crate::session::Session;
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

pub fn result_view(session: &Session, video: &VideoInfo) -> Element<'static, Message> {
    let header = row![
        column![
            text("Resultado da busca").size(30).font(theme::BOLD),
            text("Escolha o formato desejado abaixo").style(theme::TEXT_SECONDARY),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        button(text("← Baixar Novo Vídeo").font(theme::BOLD))
            .on_press(Message::Reset)
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .align_items(Alignment::Center);

    let thumbnail = container(
        column![
            Space::with_height(Length::Fill),
            text(format!("Duração: {}", video.duration))
                .size(14)
                .font(theme::BOLD),
        ]
        .padding(24),
    )
    .width(Length::Fixed(256.0))
    .height(Length::Fixed(455.0))
    .style(iced::theme::Container::Custom(Box::new(
        theme::ThumbnailContainer,
    )));

    let creator = container(
        text(format!("● @{}", video.creator))
            .size(14)
            .font(theme::BOLD),
    )
    .padding([4, 12])
    .style(iced::theme::Container::Custom(Box::new(
        theme::BadgeContainer::Creator,
    )));

    let options: Element<'static, Message> = match session.active_download() {
        Some(_) => download_panel(session.progress().percent),
        None => Column::with_children(video.qualities.iter().map(quality_item))
            .spacing(12)
            .into(),
    };

    let details = column![
        text(&video.title).size(24).font(theme::BLACK),
        creator,
        Space::with_height(16),
        options,
    ]
    .spacing(8)
    .width(Length::Fill);

    let panel = container(row![thumbnail, details].spacing(40))
        .padding(40)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)));

    column![header, panel].spacing(32).width(Length::Fill).into()
}
