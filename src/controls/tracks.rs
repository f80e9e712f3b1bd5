// SPDX-License-Identifier: MPL-2.0
//! Track menu synchronizer.
//!
//! Keeps one ordered menu per track category in step with the engine's track
//! list. A menu never has more than one selected entry, and once it holds two
//! entries it always has exactly one.

use crate::domain::video::{TrackCategory, TrackEntry, TrackId};

/// Menu for one track category.
#[derive(Debug, Clone)]
pub struct TrackMenu {
    category: TrackCategory,
    has_none_entry: bool,
    entries: Vec<TrackEntry>,
    default_applied: bool,
}

/// Messages for a track menu.
#[derive(Debug, Clone)]
pub enum Message {
    /// New media: drop every track.
    Reset,
    /// Engine announced a track.
    TrackAdded { id: TrackId, name: String },
    /// Engine switched tracks; `None` means "off".
    TrackSelected(Option<TrackId>),
    /// Engine removed a track.
    TrackDeleted(TrackId),
    /// User picked a menu entry.
    UserSelected(Option<TrackId>),
}

/// Effects produced by a track menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Entries or selection changed. `available` is set when the menu
    /// crossed the two-entry threshold in either direction.
    Changed { available: Option<bool> },
    /// User picked an entry; the engine should switch to it.
    SelectRequested(Option<TrackId>),
}

impl TrackMenu {
    /// Creates an empty menu; `has_none_entry` is fixed for its lifetime.
    #[must_use]
    pub fn new(category: TrackCategory, has_none_entry: bool) -> Self {
        let mut menu = Self {
            category,
            has_none_entry,
            entries: Vec::new(),
            default_applied: false,
        };
        menu.reset();
        menu
    }

    /// Handle a track menu message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let was_available = self.is_available();
        let changed = match msg {
            Message::Reset => {
                self.reset();
                true
            }
            Message::TrackAdded { id, name } => self.add(id, name),
            Message::TrackSelected(id) => self.select(id),
            Message::TrackDeleted(id) => self.delete(id),
            Message::UserSelected(id) => {
                if self.select(id) {
                    return Effect::SelectRequested(id);
                }
                false
            }
        };
        if !changed {
            return Effect::None;
        }
        let available = self.is_available();
        Effect::Changed {
            available: (available != was_available).then_some(available),
        }
    }

    #[must_use]
    pub fn category(&self) -> TrackCategory {
        self.category
    }

    #[must_use]
    pub fn has_none_entry(&self) -> bool {
        self.has_none_entry
    }

    #[must_use]
    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }

    /// The selected entry, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&TrackEntry> {
        self.entries.iter().find(|entry| entry.is_selected)
    }

    /// A menu is worth showing once it offers an actual choice.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.entries.len() >= 2
    }

    fn reset(&mut self) {
        self.entries.clear();
        if self.has_none_entry {
            self.entries.push(TrackEntry::off());
        }
        self.default_applied = false;
    }

    fn add(&mut self, id: TrackId, name: String) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == Some(id)) {
            log::debug!("{} track {id} announced twice, renaming", self.category);
            entry.display_name = name;
            return true;
        }
        self.entries.push(TrackEntry::track(id, name));
        if self.entries.len() >= 2 {
            if !self.default_applied {
                self.default_applied = true;
                self.apply_default();
            } else if self.selected().is_none() {
                // Emptied and refilled after the default ran.
                self.select_index(0);
            }
        }
        true
    }

    fn apply_default(&mut self) {
        let has_selection = self.selected().is_some();
        let index = match self.category {
            // Subtitles default to off.
            TrackCategory::Subtitle if self.has_none_entry => Some(0),
            TrackCategory::Subtitle => (!has_selection).then_some(0),
            // Audio defaults to the newest track.
            TrackCategory::Audio => (!has_selection).then(|| self.entries.len() - 1),
        };
        if let Some(index) = index {
            self.select_index(index);
        }
    }

    fn select(&mut self, id: Option<TrackId>) -> bool {
        match self.position(id) {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => {
                log::warn!("{} track {id:?} is not in the menu, ignoring selection", self.category);
                false
            }
        }
    }

    fn delete(&mut self, id: TrackId) -> bool {
        let Some(index) = self.position(Some(id)) else {
            log::warn!("{} track {id} is not in the menu, ignoring removal", self.category);
            return false;
        };
        let removed = self.entries.remove(index);
        if removed.is_selected {
            if let Some(first) = self.entries.first_mut() {
                first.is_selected = true;
            }
        }
        true
    }

    fn position(&self, id: Option<TrackId>) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn select_index(&mut self, index: usize) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.is_selected = i == index;
        }
    }
}

/// Audio and subtitle menus of one playback surface.
#[derive(Debug, Clone)]
pub struct TrackMenus {
    pub audio: TrackMenu,
    pub subtitle: TrackMenu,
}

impl TrackMenus {
    #[must_use]
    pub fn new(audio_off_entry: bool, subtitle_off_entry: bool) -> Self {
        Self {
            audio: TrackMenu::new(TrackCategory::Audio, audio_off_entry),
            subtitle: TrackMenu::new(TrackCategory::Subtitle, subtitle_off_entry),
        }
    }

    #[must_use]
    pub fn get(&self, category: TrackCategory) -> &TrackMenu {
        match category {
            TrackCategory::Audio => &self.audio,
            TrackCategory::Subtitle => &self.subtitle,
        }
    }

    pub fn get_mut(&mut self, category: TrackCategory) -> &mut TrackMenu {
        match category {
            TrackCategory::Audio => &mut self.audio,
            TrackCategory::Subtitle => &mut self.subtitle,
        }
    }
}

impl Default for TrackMenus {
    fn default() -> Self {
        Self::new(false, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i32) -> TrackId {
        TrackId::new(raw).expect("non-negative id")
    }

    fn add(menu: &mut TrackMenu, raw: i32, name: &str) -> Effect {
        menu.handle(Message::TrackAdded {
            id: id(raw),
            name: name.to_owned(),
        })
    }

    fn selected_name(menu: &TrackMenu) -> Option<&str> {
        menu.selected().map(|e| e.display_name.as_str())
    }

    fn selected_count(menu: &TrackMenu) -> usize {
        menu.entries().iter().filter(|e| e.is_selected).count()
    }

    #[test]
    fn reset_keeps_unselected_off_entry() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, true);
        add(&mut menu, 1, "English");
        menu.handle(Message::Reset);

        assert_eq!(menu.entries(), &[TrackEntry::off()]);
        assert!(!menu.is_available());
    }

    #[test]
    fn subtitles_default_to_off() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, true);
        add(&mut menu, 1, "English");
        add(&mut menu, 2, "French");

        assert!(menu.entries()[0].is_off());
        assert_eq!(selected_name(&menu), Some("Off"));
        assert_eq!(selected_count(&menu), 1);
    }

    #[test]
    fn subtitles_without_off_entry_keep_engine_choice() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, false);
        add(&mut menu, 1, "English");
        menu.handle(Message::TrackSelected(Some(id(1))));
        add(&mut menu, 2, "French");
        assert_eq!(selected_name(&menu), Some("English"));
    }

    #[test]
    fn subtitles_without_off_entry_fall_back_to_first() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, false);
        add(&mut menu, 1, "English");
        add(&mut menu, 2, "French");
        assert_eq!(selected_name(&menu), Some("English"));
    }

    #[test]
    fn audio_defaults_to_most_recent() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        assert_eq!(add(&mut menu, 1, "Stereo"), Effect::Changed { available: None });
        assert!(menu.selected().is_none());

        let effect = add(&mut menu, 2, "5.1");
        assert_eq!(effect, Effect::Changed { available: Some(true) });
        assert_eq!(selected_name(&menu), Some("5.1"));
    }

    #[test]
    fn audio_keeps_existing_selection() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Stereo");
        menu.handle(Message::TrackSelected(Some(id(1))));
        add(&mut menu, 2, "5.1");
        assert_eq!(selected_name(&menu), Some("Stereo"));
    }

    #[test]
    fn default_fires_only_once() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Stereo");
        add(&mut menu, 2, "5.1");
        menu.handle(Message::TrackSelected(Some(id(1))));
        add(&mut menu, 3, "Commentary");
        assert_eq!(selected_name(&menu), Some("Stereo"));
    }

    #[test]
    fn refilled_menu_selects_first_entry() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Stereo");
        add(&mut menu, 2, "5.1");
        menu.handle(Message::TrackDeleted(id(2)));
        menu.handle(Message::TrackDeleted(id(1)));
        assert!(menu.selected().is_none());

        add(&mut menu, 3, "Commentary");
        assert!(menu.selected().is_none());
        add(&mut menu, 4, "Director");
        assert!(menu.is_available());
        assert_eq!(selected_count(&menu), 1);
        assert_eq!(selected_name(&menu), Some("Commentary"));
    }

    #[test]
    fn engine_selection_is_exclusive() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, true);
        add(&mut menu, 1, "English");
        add(&mut menu, 2, "French");
        menu.handle(Message::TrackSelected(Some(id(2))));
        assert_eq!(selected_name(&menu), Some("French"));

        menu.handle(Message::TrackSelected(None));
        assert_eq!(selected_name(&menu), Some("Off"));
        assert_eq!(selected_count(&menu), 1);
    }

    #[test]
    fn none_without_off_entry_is_ignored() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Stereo");
        add(&mut menu, 2, "5.1");
        assert_eq!(menu.handle(Message::TrackSelected(None)), Effect::None);
        assert_eq!(selected_name(&menu), Some("5.1"));
    }

    #[test]
    fn deleting_selected_falls_back_to_first() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Stereo");
        add(&mut menu, 2, "5.1");
        add(&mut menu, 3, "Commentary");
        menu.handle(Message::TrackSelected(Some(id(3))));
        menu.handle(Message::TrackDeleted(id(3)));
        assert_eq!(selected_name(&menu), Some("Stereo"));
    }

    #[test]
    fn dropping_below_two_entries_reports_unavailable() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, true);
        add(&mut menu, 1, "English");
        let effect = menu.handle(Message::TrackDeleted(id(1)));
        assert_eq!(effect, Effect::Changed { available: Some(false) });
        assert_eq!(menu.entries().len(), 1);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Stereo");
        assert_eq!(menu.handle(Message::TrackDeleted(id(9))), Effect::None);
        assert_eq!(menu.handle(Message::TrackSelected(Some(id(9)))), Effect::None);
        assert_eq!(menu.handle(Message::UserSelected(Some(id(9)))), Effect::None);
        assert_eq!(menu.entries().len(), 1);
    }

    #[test]
    fn duplicate_add_renames() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, false);
        add(&mut menu, 1, "Track 1");
        add(&mut menu, 1, "Stereo");
        assert_eq!(menu.entries().len(), 1);
        assert_eq!(menu.entries()[0].display_name, "Stereo");
    }

    #[test]
    fn user_selection_requests_switch() {
        let mut menu = TrackMenu::new(TrackCategory::Subtitle, true);
        add(&mut menu, 1, "English");
        add(&mut menu, 2, "French");

        let effect = menu.handle(Message::UserSelected(Some(id(1))));
        assert_eq!(effect, Effect::SelectRequested(Some(id(1))));
        assert_eq!(selected_name(&menu), Some("English"));

        let effect = menu.handle(Message::UserSelected(None));
        assert_eq!(effect, Effect::SelectRequested(None));
    }

    #[test]
    fn at_most_one_selected_under_mixed_events() {
        let mut menu = TrackMenu::new(TrackCategory::Audio, true);
        let events = [
            Message::TrackAdded { id: id(1), name: "a".into() },
            Message::TrackSelected(Some(id(1))),
            Message::TrackAdded { id: id(2), name: "b".into() },
            Message::UserSelected(Some(id(2))),
            Message::TrackDeleted(id(2)),
            Message::TrackSelected(None),
            Message::TrackAdded { id: id(3), name: "c".into() },
            Message::TrackDeleted(id(7)),
            Message::UserSelected(Some(id(3))),
        ];
        for event in events {
            menu.handle(event);
            assert!(selected_count(&menu) <= 1);
            if menu.is_available() {
                assert_eq!(selected_count(&menu), 1);
            }
        }
    }
}
