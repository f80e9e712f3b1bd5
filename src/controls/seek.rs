// SPDX-License-Identifier: MPL-2.0
//! Seek synchronizer.
//!
//! Reconciles the seek slider with the engine. Engine position ticks drive the
//! slider and time labels unless a user seek is in progress; user changes are
//! projected onto the labels at once and committed to the engine after a
//! quiet debounce window, exactly once per window.

use super::countdown::{Countdown, TimerToken};
use super::time_text::{format_remaining, format_time};
use crate::domain::ui::{SeekDebounce, SliderScale};
use crate::domain::video::PlaybackState;
use std::time::{Duration, Instant};

/// What the slider and time labels should show.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeekDisplay {
    /// Slider value in `0..=scale.max()`.
    pub slider_value: f64,
    pub elapsed: Duration,
    pub remaining: Duration,
}

impl SeekDisplay {
    #[must_use]
    pub fn elapsed_text(&self) -> String {
        format_time(self.elapsed)
    }

    #[must_use]
    pub fn remaining_text(&self) -> String {
        format_remaining(self.remaining)
    }
}

/// An in-progress user seek.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeekSession {
    /// Last slider value sent to the engine.
    pub committed_value: Option<f64>,
    /// Slider value waiting for the debounce window to close.
    pub pending_value: Option<f64>,
    pub is_dragging: bool,
}

impl SeekSession {
    /// Whether engine ticks must leave the slider alone.
    fn holds_display(&self) -> bool {
        self.pending_value.is_some() || self.is_dragging
    }
}

/// Seek synchronizer state.
#[derive(Debug, Clone)]
pub struct State {
    scale: SliderScale,
    debounce: SeekDebounce,
    position: Duration,
    length: Duration,
    seekable: bool,
    playback: PlaybackState,
    session: Option<SeekSession>,
    last_committed: Option<f64>,
    countdown: Countdown,
    display: SeekDisplay,
}

/// Messages for the seek synchronizer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Engine position tick.
    PositionChanged(Duration),
    /// Engine reported the media length.
    LengthChanged(Duration),
    /// User moved the slider (raw slider value).
    UserValueChanged(f64),
    /// User pressed the slider thumb.
    DragStarted,
    /// User released the slider thumb.
    DragEnded,
    /// A scheduled debounce window closed.
    DebounceElapsed(TimerToken),
    /// Clock tick; commits if the debounce window closed.
    Tick,
    SeekableChanged(bool),
    PlaybackStateChanged(PlaybackState),
    /// Engine error: drop the session, clear the position, disable seeking.
    Reset,
    /// Input profile switched to a different slider scale.
    ScaleChanged(SliderScale),
}

/// Effects produced by the seek synchronizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Slider or time labels need a refresh.
    DisplayChanged(SeekDisplay),
    /// Send a seek to the engine. `fraction` is in `0..=1`.
    Commit { fraction: f64 },
}

impl Default for State {
    fn default() -> Self {
        Self::new(SliderScale::default(), SeekDebounce::default())
    }
}

impl State {
    #[must_use]
    pub fn new(scale: SliderScale, debounce: SeekDebounce) -> Self {
        Self {
            scale,
            debounce,
            position: Duration::ZERO,
            length: Duration::ZERO,
            seekable: false,
            playback: PlaybackState::default(),
            session: None,
            last_committed: None,
            countdown: Countdown::new(),
            display: SeekDisplay::default(),
        }
    }

    /// Handle a seek message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::PositionChanged(position) => {
                self.position = position;
                match self.session {
                    Some(session) if session.holds_display() => Effect::None,
                    _ => {
                        self.session = None;
                        self.refresh_from_position()
                    }
                }
            }
            Message::LengthChanged(length) => {
                self.length = length;
                match self.session {
                    Some(session) if session.holds_display() => {
                        let value = self.display.slider_value;
                        self.set_display(self.project(value))
                    }
                    _ => self.refresh_from_position(),
                }
            }
            Message::UserValueChanged(raw) => {
                let value = self.scale.clamp(raw);
                let committed = self.last_committed;
                let session = self.session.get_or_insert(SeekSession {
                    committed_value: committed,
                    ..SeekSession::default()
                });
                session.pending_value = Some(value);
                self.countdown.start(now, self.debounce.as_duration());
                self.set_display(self.project(value))
            }
            Message::DragStarted => {
                let committed = self.last_committed;
                self.session
                    .get_or_insert(SeekSession {
                        committed_value: committed,
                        ..SeekSession::default()
                    })
                    .is_dragging = true;
                Effect::None
            }
            Message::DragEnded => {
                if let Some(session) = &mut self.session {
                    session.is_dragging = false;
                    if session.pending_value.is_none() {
                        self.session = None;
                        return self.refresh_from_position();
                    }
                }
                Effect::None
            }
            Message::DebounceElapsed(token) => {
                if self.countdown.fire(token) {
                    self.commit()
                } else {
                    Effect::None
                }
            }
            Message::Tick => {
                if self.countdown.expire(now) {
                    self.commit()
                } else {
                    Effect::None
                }
            }
            Message::SeekableChanged(seekable) => {
                self.seekable = seekable;
                Effect::None
            }
            Message::PlaybackStateChanged(state) => {
                self.playback = state;
                Effect::None
            }
            Message::Reset => {
                self.countdown.cancel();
                self.session = None;
                self.position = Duration::ZERO;
                self.seekable = false;
                self.refresh_from_position()
            }
            Message::ScaleChanged(scale) => {
                let old = self.scale;
                let rescale = |value: f64| scale.from_fraction(old.to_fraction(value));
                self.scale = scale;
                self.last_committed = self.last_committed.map(rescale);
                if let Some(session) = &mut self.session {
                    session.committed_value = session.committed_value.map(rescale);
                    session.pending_value = session.pending_value.map(rescale);
                }
                let value = rescale(self.display.slider_value);
                self.set_display(SeekDisplay {
                    slider_value: value,
                    ..self.display
                })
            }
        }
    }

    /// Whether the slider should accept user input.
    #[must_use]
    pub fn is_interactable(&self) -> bool {
        self.seekable && !self.playback.blocks_seeking()
    }

    #[must_use]
    pub fn display(&self) -> SeekDisplay {
        self.display
    }

    #[must_use]
    pub fn session(&self) -> Option<&SeekSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn scale(&self) -> SliderScale {
        self.scale
    }

    /// Last slider value sent to the engine.
    #[must_use]
    pub fn last_committed(&self) -> Option<f64> {
        self.last_committed
    }

    /// Deadline of the open debounce window, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.countdown.deadline()
    }

    fn commit(&mut self) -> Effect {
        let Some(session) = &mut self.session else {
            log::warn!("seek: debounce closed without a session, nothing to commit");
            return Effect::None;
        };
        let Some(value) = session.pending_value.take() else {
            log::warn!("seek: debounce closed without a pending value");
            return Effect::None;
        };
        session.committed_value = Some(value);
        if !session.is_dragging {
            self.session = None;
        }
        self.last_committed = Some(value);
        let fraction = self.scale.to_fraction(value);
        log::debug!("seek: committing {fraction:.4}");
        Effect::Commit { fraction }
    }

    /// Maps a slider value onto the media timeline.
    fn project(&self, value: f64) -> SeekDisplay {
        if self.length.is_zero() {
            return SeekDisplay {
                slider_value: value,
                ..SeekDisplay::default()
            };
        }
        let elapsed = self.length.mul_f64(self.scale.to_fraction(value));
        SeekDisplay {
            slider_value: value,
            elapsed,
            remaining: self.length.saturating_sub(elapsed),
        }
    }

    fn refresh_from_position(&mut self) -> Effect {
        let display = if self.length.is_zero() {
            SeekDisplay::default()
        } else {
            let elapsed = self.position.min(self.length);
            let fraction = elapsed.as_secs_f64() / self.length.as_secs_f64();
            SeekDisplay {
                slider_value: self.scale.from_fraction(fraction),
                elapsed,
                remaining: self.length - elapsed,
            }
        };
        self.set_display(display)
    }

    fn set_display(&mut self, display: SeekDisplay) -> Effect {
        if self.display == display {
            Effect::None
        } else {
            self.display = display;
            Effect::DisplayChanged(display)
        }
    }
}
