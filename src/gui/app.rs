//! Main GUI application

use crate::database::LocalStorage;
use crate::downloader::{DownloadEvent, DownloadHandle, MockDownloader};
use crate::extractor::{Extractor, MockTikTokExtractor, VideoInfo};
use crate::gui::{clipboard, notification, theme};
use crate::history::{clear_persisted_history, persist_items, HistoryCache};
use crate::session::{Screen, Session};
use crate::utils::AppSettings;
use iced::{Application, Command, Element, Subscription, Theme};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Everything the GUI needs from startup
pub struct AppFlags {
    /// Runtime that owns the mock timers and storage tasks
    pub runtime: Arc<Runtime>,
    /// `None` when no storage could be opened; history then lives in memory only
    pub storage: Option<LocalStorage>,
    pub settings: AppSettings,
    pub history: HistoryCache,
}

/// Main application state
pub struct VidtikApp {
    // Core components
    runtime: Arc<Runtime>,
    storage: Option<LocalStorage>,
    extractor: Arc<MockTikTokExtractor>,
    downloader: MockDownloader,

    // UI State
    session: Session,

    // Active simulated download
    download: Option<DownloadHandle>,
    download_events: Option<mpsc::Receiver<DownloadEvent>>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    AnalyzePressed,
    PasteFromClipboard,
    ClearUrlInput,

    // Resolver events
    ResolutionCompleted(String, Result<VideoInfo, String>),

    // Download events
    QualitySelected(String),

    // Navigation
    Reset,
    OpenHistoryItem(String),
    ClearHistory,

    // System
    Tick, // Drains download progress while a download runs
}

impl Application for VidtikApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let AppFlags {
            runtime,
            storage,
            settings,
            history,
        } = flags;

        info!("Starting GUI with {} history entries", history.len());

        let app = Self {
            runtime,
            storage,
            extractor: Arc::new(MockTikTokExtractor::new(settings.resolve_delay())),
            downloader: MockDownloader::new(settings.download_config()),
            session: Session::new(history, settings.progress_step),
            download: None,
            download_events: None,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("VidTik - Baixar vídeos do TikTok")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.session.set_url(url);
                Command::none()
            }

            Message::AnalyzePressed => {
                let input = self.session.url().to_string();
                match self.session.submit(&input) {
                    Ok(url) => self.resolve(url),
                    Err(e) => {
                        debug!("Submission rejected: {}", e);
                        Command::none()
                    }
                }
            }

            Message::PasteFromClipboard => {
                match clipboard::read_link() {
                    Ok(content) => self.session.set_url(content),
                    Err(e) => warn!("Paste failed: {:#}", e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.session.set_url(String::new());
                Command::none()
            }

            // Resolver events
            Message::ResolutionCompleted(url, result) => {
                match result {
                    Ok(video_info) => {
                        self.session.complete_resolution(&url, video_info);
                        self.persist_history();
                    }
                    Err(e) => {
                        warn!("Resolution failed for {}: {}", url, e);
                        self.session.fail_resolution(e);
                    }
                }
                Command::none()
            }

            // Download events
            Message::QualitySelected(id) => {
                match self.session.select_quality(&id) {
                    Ok(quality) => {
                        let (handle, events) =
                            self.downloader.spawn_on(self.runtime.handle(), quality);
                        self.download = Some(handle);
                        self.download_events = Some(events);
                    }
                    Err(e) => warn!("Cannot start download {}: {}", id, e),
                }
                Command::none()
            }

            // Navigation
            Message::Reset => {
                self.session.reset();
                self.stop_download();
                Command::none()
            }

            Message::OpenHistoryItem(id) => {
                if let Err(e) = self.session.open_history_item(&id) {
                    warn!("{}", e);
                }
                Command::none()
            }

            Message::ClearHistory => {
                self.session.clear_history();
                let Some(storage) = self.storage.clone() else {
                    return Command::none();
                };
                self.runtime.spawn(async move {
                    if let Err(e) = clear_persisted_history(&storage).await {
                        warn!("Failed to clear persisted history: {}", e);
                    }
                });
                Command::none()
            }

            // System
            Message::Tick => {
                let mut pending = Vec::new();
                if let Some(events) = self.download_events.as_mut() {
                    while let Ok(event) = events.try_recv() {
                        pending.push(event);
                    }
                }

                for event in pending {
                    if let Some(notice) = self.session.apply_download_event(&event) {
                        self.stop_download();
                        notification::show_completion(&notice);
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::views::{history_view, result_view, search_view};
        use iced::widget::{button, column, container, row, scrollable, text, Space};
        use iced::{Alignment, Length};

        // Header
        let logo = button(
            row![
                container(text("V").size(20).font(theme::BLACK))
                    .width(Length::Fixed(40.0))
                    .height(Length::Fixed(40.0))
                    .center_x()
                    .center_y()
                    .style(iced::theme::Container::Custom(Box::new(theme::LogoContainer))),
                text("VIDTIK").size(24).font(theme::BLACK).style(theme::TEXT_PRIMARY),
            ]
            .spacing(8)
            .align_items(Alignment::Center),
        )
        .on_press(Message::Reset)
        .style(iced::theme::Button::Custom(Box::new(theme::LinkButton::Neutral)));

        let header = container(
            row![
                logo,
                Space::with_width(Length::Fill),
                text("MP4 HD").style(theme::TEXT_SECONDARY),
                text("MP3 Áudio").style(theme::TEXT_SECONDARY),
                text("App").style(theme::TEXT_SECONDARY),
            ]
            .spacing(32)
            .align_items(Alignment::Center),
        )
        .padding([16, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::HeaderContainer)));

        // Main Content Area
        let content = match (self.session.screen(), self.session.result()) {
            (Screen::Result, Some(video)) => result_view(&self.session, video),
            _ => search_view(&self.session),
        };

        let mut main = column![content].spacing(96).max_width(960);
        if !self.session.history().is_empty() {
            main = main.push(history_view(self.session.history()));
        }

        let footer = container(
            row![
                column![
                    text("VIDTIK © 2024").size(14).font(theme::BLACK).style(theme::SLATE_300),
                    text("Sua ferramenta definitiva para mídias sociais.")
                        .size(12)
                        .style(theme::TEXT_MUTED),
                ]
                .spacing(4),
                Space::with_width(Length::Fill),
                text("O VidTik não é afiliado ao TikTok ou ByteDance. Respeite os direitos autorais dos criadores.")
                    .size(10)
                    .width(Length::Fixed(280.0))
                    .style(theme::TEXT_MUTED),
            ]
            .align_items(Alignment::Center),
        )
        .padding([48, 24])
        .width(Length::Fill);

        let page = column![
            header,
            container(main).padding([64, 24]).width(Length::Fill).center_x(),
            footer,
        ]
        .width(Length::Fill);

        container(
            scrollable(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(iced::theme::Scrollable::Custom(Box::new(
                    theme::ScrollableStyle,
                ))),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::PageContainer)))
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.download.is_some() {
            iced::time::every(Duration::from_millis(50)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}

impl VidtikApp {
    /// Run the mock extractor on the app runtime and report back
    fn resolve(&self, url: String) -> Command<Message> {
        let extractor = Arc::clone(&self.extractor);
        let lookup_url = url.clone();
        let task = self
            .runtime
            .spawn(async move { extractor.extract_info(&lookup_url).await });

        Command::perform(
            async move {
                let result = match task.await {
                    Ok(result) => result.map_err(|e| e.to_string()),
                    Err(e) => Err(format!("Extractor task failed: {}", e)),
                };
                (url, result)
            },
            |(url, result)| Message::ResolutionCompleted(url, result),
        )
    }

    fn persist_history(&self) {
        let Some(storage) = self.storage.clone() else {
            return;
        };
        let items = self.session.history().items().to_vec();
        self.runtime.spawn(async move {
            if let Err(e) = persist_items(&storage, &items).await {
                warn!("Failed to persist history: {}", e);
            }
        });
    }

    /// Drop the active download; its timers stop with the handle
    fn stop_download(&mut self) {
        if let Some(handle) = self.download.take() {
            if !handle.is_finished() {
                debug!("Cancelling download {}", handle.quality_id());
            }
        }
        self.download_events = None;
    }
}
