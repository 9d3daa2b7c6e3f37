use kurbo::{Point, Rect, Size};

use crate::{Color, Easing, Font, FontWeight};

/// Appearance and behavior of the preview bubble.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BubbleOptions {
    pub font: Font,
    pub text_color: Color,
    pub background_color: Color,
    /// Resting frame in index bar coordinates. The bubble keeps this `x` while following touches
    /// vertically.
    pub rect: Rect,
    pub fade_duration_ms: u64,
    pub fade_easing: Easing,
}

impl Default for BubbleOptions {
    fn default() -> Self {
        Self {
            font: Font::system(22.0).with_weight(FontWeight::Medium),
            text_color: Color::WHITE,
            background_color: Color::LIGHT_GRAY.with_alpha(0.6),
            rect: Rect::from_origin_size(Point::new(-80.0, 0.0), Size::new(60.0, 60.0)),
            fade_duration_ms: 200,
            fade_easing: Easing::Linear,
        }
    }
}

impl BubbleOptions {
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_fade(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.fade_duration_ms = duration_ms;
        self.fade_easing = easing;
        self
    }
}

/// Configuration for [`crate::IndexBar`].
///
/// Options are applied as a whole value: build a new one (or use
/// [`crate::IndexBar::update_options`]) and the bar re-lays-out from scratch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexBarOptions {
    /// Title color of unselected markers.
    pub title_color: Color,
    pub title_font: Font,
    pub selected_title_color: Color,
    pub selected_background_color: Color,
    /// Width and height of each marker.
    pub section_size: f64,
    /// Vertical gap after each marker.
    pub section_spacing: f64,
    pub show_bubble: bool,
    pub bubble: BubbleOptions,
}

impl Default for IndexBarOptions {
    fn default() -> Self {
        Self {
            title_color: Color::LIGHT_GRAY,
            title_font: Font::system(10.0),
            selected_title_color: Color::WHITE,
            selected_background_color: Color::BLUE,
            section_size: 16.0,
            section_spacing: 4.0,
            show_bubble: true,
            bubble: BubbleOptions::default(),
        }
    }
}

impl IndexBarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn with_title_font(mut self, font: Font) -> Self {
        self.title_font = font;
        self
    }

    pub fn with_selected_title_color(mut self, color: Color) -> Self {
        self.selected_title_color = color;
        self
    }

    pub fn with_selected_background_color(mut self, color: Color) -> Self {
        self.selected_background_color = color;
        self
    }

    pub fn with_section_size(mut self, section_size: f64) -> Self {
        self.section_size = section_size;
        self
    }

    pub fn with_section_spacing(mut self, section_spacing: f64) -> Self {
        self.section_spacing = section_spacing;
        self
    }

    pub fn with_show_bubble(mut self, show_bubble: bool) -> Self {
        self.show_bubble = show_bubble;
        self
    }

    pub fn with_bubble(mut self, bubble: BubbleOptions) -> Self {
        self.bubble = bubble;
        self
    }

    /// Replaces negative or non-finite lengths with zero.
    pub(crate) fn sanitized(mut self) -> Self {
        if !is_valid_length(self.section_size) {
            iwarn!(
                section_size = self.section_size,
                "IndexBarOptions: invalid section_size, using 0"
            );
            self.section_size = 0.0;
        }
        if !is_valid_length(self.section_spacing) {
            iwarn!(
                section_spacing = self.section_spacing,
                "IndexBarOptions: invalid section_spacing, using 0"
            );
            self.section_spacing = 0.0;
        }
        self
    }
}

fn is_valid_length(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
