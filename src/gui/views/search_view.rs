//! Search screen: hero text, link input and feature cards

use crate::gui::app::Message;
use crate::gui::components::{feature_card, url_input};
use crate::gui::theme;
use crate::session::Session;
use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length, Padding};

pub fn search_view(session: &Session) -> Element<'static, Message> {
    let hero = column![
        text("Tudo do TikTok").size(56).font(theme::BLACK),
        text("Sem Marca d'Água")
            .size(56)
            .font(theme::BLACK)
            .style(theme::CYAN_400),
        container(
            text("Baixe vídeos em 1080p, 720p ou converta para MP3 instantaneamente. Grátis, rápido e ilimitado.")
                .size(18)
                .style(theme::TEXT_SECONDARY)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .max_width(640.0)
        .padding(Padding {
            top: 16.0,
            ..Padding::ZERO
        }),
    ]
    .align_items(Alignment::Center);

    let features = row![
        feature_card(
            "💎",
            "Qualidade HD",
            "Preserve cada detalhe do vídeo original em até 4K."
        ),
        feature_card(
            "🎵",
            "Conversor MP3",
            "Extraia o áudio de alta qualidade com um clique."
        ),
        feature_card(
            "🔒",
            "100% Seguro",
            "Não salvamos seus dados, apenas processamos o link."
        ),
    ]
    .spacing(24);

    column![
        hero,
        url_input(session.url(), session.is_processing(), session.error()),
        features,
    ]
    .spacing(48)
    .width(Length::Fill)
    .align_items(Alignment::Center)
    .into()
}
