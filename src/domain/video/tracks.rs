// SPDX-License-Identifier: MPL-2.0
//! Selectable media stream types (audio and subtitle tracks).

use std::fmt;

/// Class of selectable media stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackCategory {
    Audio,
    Subtitle,
}

impl TrackCategory {
    /// All categories, in menu order.
    pub const ALL: [TrackCategory; 2] = [TrackCategory::Audio, TrackCategory::Subtitle];
}

impl fmt::Display for TrackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackCategory::Audio => write!(f, "audio"),
            TrackCategory::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// Engine-assigned identifier of a track.
///
/// Engines report "no track" with a negative raw id; that case is modelled as
/// `Option<TrackId>::None` everywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(i32);

impl TrackId {
    /// Creates a track id. Negative values are not valid track ids.
    #[must_use]
    pub fn new(raw: i32) -> Option<Self> {
        (raw >= 0).then_some(Self(raw))
    }

    /// Maps an engine-side raw id, where `-1` (or any negative) means "none".
    #[must_use]
    pub fn from_engine(raw: i32) -> Option<Self> {
        Self::new(raw)
    }

    /// Converts an optional id back to the engine convention.
    #[must_use]
    pub fn to_engine(id: Option<Self>) -> i32 {
        id.map_or(-1, |id| id.0)
    }

    /// Returns the raw id.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable entry in a track menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    /// Track id, or `None` for the synthetic "off" entry.
    pub id: Option<TrackId>,
    /// Human readable name shown in the menu.
    pub display_name: String,
    /// Whether this entry is the current selection.
    pub is_selected: bool,
}

impl TrackEntry {
    /// Creates an unselected entry for a real track.
    #[must_use]
    pub fn track(id: TrackId, display_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            display_name: display_name.into(),
            is_selected: false,
        }
    }

    /// Creates the synthetic, unselected "off" entry.
    #[must_use]
    pub fn off() -> Self {
        Self {
            id: None,
            display_name: String::from("Off"),
            is_selected: false,
        }
    }

    /// Returns true for the synthetic "off" entry.
    #[must_use]
    pub fn is_off(&self) -> bool {
        self.id.is_none()
    }
}
