// SPDX-License-Identifier: MPL-2.0
//! Auto-hide controller for the transport control surface.
//!
//! Every activity signal shows the controls immediately. The hide countdown
//! is only re-armed while media is actively playing and the signal concerns
//! the control surface; its expiry is the only way the controls get hidden.

use super::countdown::{Countdown, TimerToken};
use super::geometry::rect_contains;
use crate::application::port::SurfaceProbe;
use crate::domain::ui::{ActivitySignal, HideDelay, Region, Visibility};
use crate::domain::video::PlaybackState;
use std::time::Instant;

/// Auto-hide state.
#[derive(Debug, Clone)]
pub struct State {
    visibility: Visibility,
    enabled: bool,
    delay: HideDelay,
    playback: PlaybackState,
    countdown: Countdown,
}

/// Messages for the auto-hide sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer, touch or keyboard activity.
    Activity(ActivitySignal),
    /// A scheduled countdown fired.
    CountdownFired(TimerToken),
    /// Clock tick; hides the controls if the countdown elapsed.
    Tick,
    /// Auto-hide turned on or off.
    SetEnabled(bool),
    /// Hide delay changed. Applies from the next arming.
    SetDelay(HideDelay),
    /// Engine reported a new playback state.
    PlaybackStateChanged(PlaybackState),
}

/// Effects produced by auto-hide.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    VisibilityChanged(Visibility),
}

impl Default for State {
    fn default() -> Self {
        Self::new(true, HideDelay::default())
    }
}

impl State {
    #[must_use]
    pub fn new(enabled: bool, delay: HideDelay) -> Self {
        Self {
            visibility: Visibility::Visible,
            enabled,
            delay,
            playback: PlaybackState::default(),
            countdown: Countdown::new(),
        }
    }

    /// Handle an auto-hide message.
    ///
    /// `surface` is queried for the current control-surface bounds only when
    /// a signal has to be located.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, now: Instant, surface: &dyn SurfaceProbe) -> Effect {
        match msg {
            Message::Activity(signal) => self.on_activity(&signal, now, surface),
            Message::CountdownFired(token) => {
                if self.countdown.fire(token) {
                    self.hide()
                } else {
                    log::debug!("auto-hide: ignoring stale countdown");
                    Effect::None
                }
            }
            Message::Tick => {
                if self.countdown.expire(now) {
                    self.hide()
                } else {
                    Effect::None
                }
            }
            Message::SetEnabled(enabled) => {
                self.enabled = enabled;
                if enabled {
                    self.on_activity(&ActivitySignal::surface_interaction(), now, surface)
                } else {
                    self.countdown.cancel();
                    self.show()
                }
            }
            Message::SetDelay(delay) => {
                self.delay = delay;
                Effect::None
            }
            Message::PlaybackStateChanged(state) => {
                let was_playing = self.playback.is_playing();
                self.playback = state;
                if !state.is_playing() {
                    if self.countdown.is_armed() {
                        log::debug!("auto-hide: countdown canceled, playback is {state:?}");
                    }
                    self.countdown.cancel();
                } else if !was_playing && self.enabled && self.visibility.is_visible() {
                    self.arm(now);
                }
                Effect::None
            }
        }
    }

    /// Shows the controls and cancels any pending countdown without
    /// re-arming it. Used when an error has to stay on screen.
    pub fn force_visible(&mut self) -> Effect {
        self.countdown.cancel();
        self.show()
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Deadline of the pending countdown, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.countdown.deadline()
    }

    fn on_activity(&mut self, signal: &ActivitySignal, now: Instant, surface: &dyn SurfaceProbe) -> Effect {
        self.countdown.cancel();
        let effect = self.show();
        if self.should_rearm(signal, surface) {
            self.arm(now);
        }
        effect
    }

    fn should_rearm(&self, signal: &ActivitySignal, surface: &dyn SurfaceProbe) -> bool {
        if !self.enabled || !self.playback.is_playing() {
            return false;
        }
        let bounds = surface.control_surface();
        let inside = signal.position.is_some_and(|p| rect_contains(bounds, p));
        if signal.is_non_touch_exit() {
            // The pointer may have only moved onto a child overlay.
            return signal.source == Region::ControlSurface && !inside;
        }
        signal.source == Region::ControlSurface || inside
    }

    fn arm(&mut self, now: Instant) {
        let token = self.countdown.start(now, self.delay.as_duration());
        log::debug!("auto-hide: countdown armed for {:?}", token.deadline() - now);
    }

    fn show(&mut self) -> Effect {
        self.set_visibility(Visibility::Visible)
    }

    fn hide(&mut self) -> Effect {
        self.set_visibility(Visibility::Hidden)
    }

    fn set_visibility(&mut self, visibility: Visibility) -> Effect {
        if self.visibility == visibility {
            Effect::None
        } else {
            self.visibility = visibility;
            Effect::VisibilityChanged(visibility)
        }
    }
}
