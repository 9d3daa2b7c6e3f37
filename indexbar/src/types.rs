use alloc::string::String;

use kurbo::{Point, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionState {
    #[default]
    Normal,
    Selected,
}

/// One entry of the index track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionMarker {
    pub title: String,
    /// Frame in control coordinates.
    pub rect: Rect,
    pub state: SectionState,
}

impl SectionMarker {
    pub fn is_selected(&self) -> bool {
        self.state == SectionState::Selected
    }
}

/// An sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

/// Font request handed to the rendering layer. `family: None` means the platform system font.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: Option<String>,
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    pub fn system(size: f64) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Resolved paint attributes for a single marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub text_color: Color,
    pub background_color: Color,
    pub corner_radius: f64,
    pub font: Font,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// Scroll state of the host list at the time of a change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// The user's finger is moving the list.
    Dragging,
    /// The list keeps moving after the finger lifted.
    Decelerating,
    /// A programmatic (e.g. scroll-to-section) animation is running.
    Animating,
}

impl ScrollPhase {
    /// Whether the motion originates from the user rather than from code.
    pub fn is_user_driven(self) -> bool {
        matches!(self, Self::Dragging | Self::Decelerating)
    }
}

/// The part of a host scroll change the index bar cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSync {
    /// Section at the top of the host viewport, if any.
    pub section: Option<usize>,
    pub phase: ScrollPhase,
}

/// Emitted when a touch lands on a section different from the last one reached.
///
/// The adapter is expected to fire haptic feedback and scroll the host list to the start of
/// `index`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionJump {
    pub index: usize,
    pub title: String,
    /// Where the bubble was shown (control coordinates).
    pub bubble_anchor: Point,
}
