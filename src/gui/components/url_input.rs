//! URL input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Create the link input bar with paste, clear and analyze buttons plus the
/// optional validation message
pub fn url_input(
    value: &str,
    is_processing: bool,
    error_message: Option<&str>,
) -> Element<'static, Message> {
    let mut input = text_input("Cole o link do vídeo aqui...", value)
        .padding(18)
        .size(18)
        .width(Length::Fill)
        .style(if error_message.is_some() {
            iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
        } else {
            iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
        });

    // Without on_input the field renders disabled
    if !is_processing {
        input = input
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::AnalyzePressed);
    }

    let analyze = button(
        text(if is_processing {
            "Analisando..."
        } else {
            "Analisar Link"
        })
        .size(18)
        .font(theme::BOLD),
    )
    .on_press_maybe((!is_processing).then_some(Message::AnalyzePressed))
    .padding([18, 36])
    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    let input_row = container(
        row![
            input,
            tooltip(
                button(text("Colar").size(14))
                    .on_press_maybe((!is_processing).then_some(Message::PasteFromClipboard))
                    .padding([8, 12])
                    .style(iced::theme::Button::Custom(Box::new(theme::LinkButton::Neutral))),
                "Colar da área de transferência",
                tooltip::Position::Bottom,
            ),
            button(text("Limpar").size(14))
                .on_press_maybe((!is_processing).then_some(Message::ClearUrlInput))
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::LinkButton::Neutral))),
            analyze,
        ]
        .spacing(8)
        .align_items(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)));

    if let Some(error) = error_message {
        column![
            input_row,
            container(text(error).size(15).font(theme::BOLD).style(theme::RED_400))
                .padding([8, 16])
                .width(Length::Fill)
                .center_x()
                .style(iced::theme::Container::Custom(Box::new(
                    theme::ErrorBannerContainer
                ))),
        ]
        .spacing(16)
        .into()
    } else {
        input_row.into()
    }
}
