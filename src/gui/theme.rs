//! Custom theme definitions for the application - Dark Theme

use iced::font::Weight;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Font, Gradient, Shadow, Theme, Vector};

// --- Dark Color Palette ---

// Page background
pub const SLATE_950: Color = Color::from_rgb(0.059, 0.090, 0.165); // #0f172a
pub const SLATE_900: Color = Color::from_rgb(0.071, 0.102, 0.180);
pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // #1e293b
pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333); // #334155
pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545); // #64748b
pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // #94a3b8
pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882); // #cbd5e1

// Brand colors - cyan to pink
pub const CYAN_400: Color = Color::from_rgb(0.133, 0.827, 0.933); // #22d3ee
pub const CYAN_500: Color = Color::from_rgb(0.024, 0.714, 0.831); // #06b6d4
pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.600); // #ec4899
pub const PINK_400: Color = Color::from_rgb(0.957, 0.447, 0.714); // #f472b6

// Danger color
pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443); // #f87171

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const GLASS: Color = Color::from_rgba(0.118, 0.161, 0.231, 0.6);
pub const GLASS_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.06);

// Text colors
pub const TEXT_PRIMARY: Color = WHITE;
pub const TEXT_SECONDARY: Color = SLATE_400;
pub const TEXT_MUTED: Color = SLATE_500;

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const BLACK: Font = Font {
    weight: Weight::Black,
    ..Font::DEFAULT
};

fn brand_gradient() -> Background {
    Background::Gradient(Gradient::Linear(
        iced::gradient::Linear::new(iced::Radians(0.785)) // 45 degrees
            .add_stop(0.0, CYAN_400)
            .add_stop(1.0, PINK_500),
    ))
}

// --- Container Styles ---

pub struct PageContainer;

impl container::StyleSheet for PageContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(SLATE_950)),
            ..Default::default()
        }
    }
}

pub struct HeaderContainer;

impl container::StyleSheet for HeaderContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.059, 0.090, 0.165, 0.8))),
            border: Border {
                color: Color::from_rgba(0.118, 0.161, 0.231, 0.5),
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Translucent card used for the input bar, result panel and feature cards
pub struct GlassContainer;

impl container::StyleSheet for GlassContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(GLASS)),
            border: Border {
                color: GLASS_BORDER,
                width: 1.0,
                radius: 24.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 10.0),
                blur_radius: 30.0,
            },
        }
    }
}

pub struct LogoContainer;

impl container::StyleSheet for LogoContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(brand_gradient()),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Stand-in for the remote thumbnail image
pub struct ThumbnailContainer;

impl container::StyleSheet for ThumbnailContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(3.141))
                    .add_stop(0.0, SLATE_700)
                    .add_stop(1.0, SLATE_900),
            ))),
            border: Border {
                color: SLATE_800,
                width: 4.0,
                radius: 24.0.into(),
            },
            ..Default::default()
        }
    }
}

pub enum BadgeContainer {
    Creator,
    Duration,
    Hd,
    Size,
}

impl container::StyleSheet for BadgeContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (background, text_color, border_color) = match self {
            Self::Creator => (
                Color::from_rgba(0.024, 0.714, 0.831, 0.1),
                CYAN_400,
                Color::from_rgba(0.024, 0.714, 0.831, 0.2),
            ),
            Self::Duration => (Color::from_rgba(0.0, 0.0, 0.0, 0.6), WHITE, Color::TRANSPARENT),
            Self::Hd => (CYAN_500, WHITE, Color::TRANSPARENT),
            Self::Size => (SLATE_900, SLATE_400, SLATE_800),
        };

        container::Appearance {
            text_color: Some(text_color),
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Icon tile next to each quality option
pub struct FormatIconContainer {
    pub is_audio: bool,
}

impl container::StyleSheet for FormatIconContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (background, text_color) = if self.is_audio {
            (Color::from_rgba(0.925, 0.282, 0.600, 0.2), PINK_400)
        } else {
            (Color::from_rgba(0.024, 0.714, 0.831, 0.2), CYAN_400)
        };

        container::Appearance {
            text_color: Some(text_color),
            background: Some(Background::Color(background)),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct ErrorBannerContainer;

impl container::StyleSheet for ErrorBannerContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(RED_400),
            background: Some(Background::Color(Color::from_rgba(0.973, 0.443, 0.443, 0.1))),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct ProgressPanelContainer;

impl container::StyleSheet for ProgressPanelContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(SLATE_300),
            background: Some(Background::Color(Color::from_rgba(0.071, 0.102, 0.180, 0.5))),
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.05),
                width: 1.0,
                radius: 24.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(brand_gradient()),
            text_color: WHITE,
            border: Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.024, 0.714, 0.831, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                color: Color::from_rgba(0.024, 0.714, 0.831, 0.45),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 22.0,
            },
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(SLATE_700)),
            text_color: SLATE_400,
            shadow: Shadow::default(),
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_800)),
            text_color: SLATE_300,
            border: Border {
                radius: 12.0.into(),
                color: SLATE_700,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(SLATE_700)),
            ..active
        }
    }
}

/// Borderless text button (logo, clear input, "clear all")
pub enum LinkButton {
    Neutral,
    Destructive,
}

impl button::StyleSheet for LinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: match self {
                Self::Neutral => SLATE_400,
                Self::Destructive => SLATE_500,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            text_color: match self {
                Self::Neutral => CYAN_400,
                Self::Destructive => RED_400,
            },
            ..active
        }
    }
}

/// Whole-row button for one quality option
pub struct QualityRowButton;

impl button::StyleSheet for QualityRowButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.118, 0.161, 0.231, 0.4))),
            text_color: TEXT_PRIMARY,
            border: Border {
                color: Color::from_rgba(0.200, 0.255, 0.333, 0.5),
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.118, 0.161, 0.231, 0.8))),
            border: Border {
                color: Color::from_rgba(0.024, 0.714, 0.831, 0.5),
                ..active.border
            },
            ..active
        }
    }
}

/// History grid tile
pub struct HistoryCardButton;

impl button::StyleSheet for HistoryCardButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GLASS)),
            text_color: TEXT_PRIMARY,
            border: Border {
                color: GLASS_BORDER,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            border: Border {
                color: Color::from_rgba(0.133, 0.827, 0.933, 0.5),
                ..active.border
            },
            shadow_offset: Vector::new(0.0, -2.0),
            ..active
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                radius: 16.0.into(),
                width: 2.0,
                color: Color::TRANSPARENT,
            },
            icon_color: SLATE_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: Color::from_rgba(0.024, 0.714, 0.831, 0.4),
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        WHITE
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.024, 0.714, 0.831, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }
}

pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                radius: 16.0.into(),
                width: 2.0,
                color: Color::from_rgba(0.973, 0.443, 0.443, 0.6),
            },
            icon_color: RED_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_500
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        WHITE
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.973, 0.443, 0.443, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.133, 0.827, 0.933, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.133, 0.827, 0.933, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}

// --- Progress Bar Styles ---

pub struct ProgressBarStyle;

impl iced::widget::progress_bar::StyleSheet for ProgressBarStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::progress_bar::Appearance {
        iced::widget::progress_bar::Appearance {
            background: Background::Color(SLATE_800),
            bar: Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(1.571))
                    .add_stop(0.0, CYAN_400)
                    .add_stop(0.5, PINK_500)
                    .add_stop(1.0, CYAN_400),
            )),
            border_radius: 8.0.into(),
        }
    }
}
