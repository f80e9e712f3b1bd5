// SPDX-License-Identifier: MPL-2.0
//! Transport controller.
//!
//! Owns the control components of one playback surface and routes engine
//! notifications and user input between them. Every call is processed to
//! completion and returns the [`Output`]s the rendering layer should apply,
//! ending with a [`Output::DirectiveChanged`] whenever the overall
//! [`SurfaceDirective`] moved.
//!
//! Time is passed in explicitly; the controller never reads the clock. Use
//! [`TransportController::next_deadline`] to know when to call
//! [`TransportController::tick`] next.

use crate::application::port::{
    EngineCommand, EngineEvent, PlaybackEngine, SurfaceProbe, ViewModeHost,
};
use crate::controls::seek::SeekDisplay;
use crate::controls::tracks::TrackMenus;
use crate::controls::view_mode::{
    Begin, PendingTransition, ResolvedTransition, TransitionOutcome, ViewModeListener,
    ViewModeNegotiator,
};
use crate::controls::{auto_hide, seek, tracks};
use crate::domain::ui::{
    ActivitySignal, HideDelay, SeekDebounce, SliderProfile, SliderScale, ViewMode,
    ViewModeTransition, Visibility,
};
use crate::domain::video::{PlaybackState, TrackCategory, TrackId, Volume};
use std::time::Instant;

/// Resolved controller settings, usually built by
/// [`Config::settings`](crate::config::Config::settings).
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub auto_hide_enabled: bool,
    pub hide_delay: HideDelay,
    pub seek_debounce: SeekDebounce,
    pub slider_scale: SliderScale,
    pub subtitle_off_entry: bool,
    pub audio_off_entry: bool,
    pub volume: Volume,
    pub muted: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            auto_hide_enabled: true,
            hide_delay: HideDelay::default(),
            seek_debounce: SeekDebounce::default(),
            slider_scale: SliderScale::default(),
            subtitle_off_entry: true,
            audio_off_entry: false,
            volume: Volume::default(),
            muted: false,
        }
    }
}

/// Which glyph the play/pause button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButton {
    Play,
    Pause,
}

/// Status affordance of the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Normal,
    Buffering,
    Error(String),
}

/// Everything the rendering layer needs to paint the control surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDirective {
    pub visibility: Visibility,
    pub play_button: PlayButton,
    pub status: Status,
    pub seek_enabled: bool,
    pub muted: bool,
    pub volume: Volume,
    pub audio_available: bool,
    pub subtitle_available: bool,
    pub view_mode: ViewMode,
}

/// Input to the controller, from the engine or the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Notification from the playback engine.
    Engine(EngineEvent),
    /// Pointer or keyboard activity over the player.
    Activity(ActivitySignal),
    /// User moved the seek slider (raw slider value).
    SliderChanged(f64),
    SliderPressed,
    SliderReleased,
    /// User picked a track menu entry. `None` is the "off" entry.
    MenuItemClicked {
        category: TrackCategory,
        id: Option<TrackId>,
    },
    Play,
    Pause,
    TogglePlayback,
    Stop,
    ToggleMute,
    SetMuted(bool),
    SetVolume(Volume),
    SetAutoHideEnabled(bool),
    /// Input device changed; switches the slider scale.
    SetSliderProfile(SliderProfile),
}

/// Notification for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    VisibilityChanged(Visibility),
    /// Slider value or time labels changed.
    DisplayChanged(SeekDisplay),
    SeekInteractableChanged(bool),
    /// Entries or selection of a track menu changed.
    TrackMenuChanged(TrackCategory),
    TrackAvailabilityChanged {
        category: TrackCategory,
        available: bool,
    },
    MuteChanged(bool),
    VolumeChanged(Volume),
    ErrorChanged(Option<String>),
    /// A view-mode change is being negotiated.
    ViewModeChanging(ViewModeTransition),
    /// The environment switched view modes.
    ViewModeChanged(ViewModeTransition),
    /// A view-mode request ended, whatever the outcome.
    ViewModeFinished(TransitionOutcome),
    DirectiveChanged(SurfaceDirective),
}

/// Controller for one playback surface.
pub struct TransportController {
    auto_hide: auto_hide::State,
    seek: seek::State,
    tracks: TrackMenus,
    view_mode: ViewModeNegotiator,
    engine: Box<dyn PlaybackEngine>,
    surface: Box<dyn SurfaceProbe>,
    host: Box<dyn ViewModeHost>,
    playback: PlaybackState,
    muted: bool,
    volume: Volume,
    error: Option<String>,
}

impl std::fmt::Debug for TransportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportController")
            .field("auto_hide", &self.auto_hide)
            .field("seek", &self.seek)
            .field("tracks", &self.tracks)
            .field("view_mode", &self.view_mode)
            .field("playback", &self.playback)
            .field("muted", &self.muted)
            .field("volume", &self.volume)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl TransportController {
    pub fn new(
        settings: &ControllerSettings,
        engine: impl PlaybackEngine + 'static,
        surface: impl SurfaceProbe + 'static,
        host: impl ViewModeHost + 'static,
    ) -> Self {
        Self {
            auto_hide: auto_hide::State::new(settings.auto_hide_enabled, settings.hide_delay),
            seek: seek::State::new(settings.slider_scale, settings.seek_debounce),
            tracks: TrackMenus::new(settings.audio_off_entry, settings.subtitle_off_entry),
            view_mode: ViewModeNegotiator::default(),
            engine: Box::new(engine),
            surface: Box::new(surface),
            host: Box::new(host),
            playback: PlaybackState::default(),
            muted: settings.muted,
            volume: settings.volume,
            error: None,
        }
    }

    /// Sends the configured volume and mute state to the engine.
    pub fn push_audio_settings(&mut self) {
        self.send(EngineCommand::SetVolume(self.volume));
        self.send(EngineCommand::SetMuted(self.muted));
    }

    /// Registers a view-mode listener.
    pub fn subscribe_view_mode(&mut self, listener: impl ViewModeListener + 'static) {
        self.view_mode.subscribe(listener);
    }

    /// Processes one input.
    pub fn handle(&mut self, input: Input, now: Instant) -> Vec<Output> {
        self.observe(|this, out| match input {
            Input::Engine(event) => this.on_engine_event(event, now, out),
            Input::Activity(signal) => {
                this.auto_hide(auto_hide::Message::Activity(signal), now, out);
            }
            Input::SliderChanged(value) => {
                if this.seek.is_interactable() {
                    this.interacted(now, out);
                    this.seek(seek::Message::UserValueChanged(value), now, out);
                } else {
                    log::debug!("seek slider is disabled, ignoring value {value}");
                }
            }
            Input::SliderPressed => {
                if this.seek.is_interactable() {
                    this.interacted(now, out);
                    this.seek(seek::Message::DragStarted, now, out);
                }
            }
            Input::SliderReleased => {
                this.interacted(now, out);
                this.seek(seek::Message::DragEnded, now, out);
            }
            Input::MenuItemClicked { category, id } => {
                this.interacted(now, out);
                this.track(category, tracks::Message::UserSelected(id), out);
            }
            Input::Play => {
                this.interacted(now, out);
                this.send(EngineCommand::Play);
            }
            Input::Pause => {
                this.interacted(now, out);
                this.send(EngineCommand::Pause);
            }
            Input::TogglePlayback => {
                this.interacted(now, out);
                if this.playback.is_playing() {
                    this.send(EngineCommand::Pause);
                } else {
                    this.send(EngineCommand::Play);
                }
            }
            Input::Stop => {
                this.interacted(now, out);
                this.send(EngineCommand::Stop);
            }
            Input::ToggleMute => {
                this.interacted(now, out);
                let muted = !this.muted;
                this.set_muted(muted, out);
            }
            Input::SetMuted(muted) => {
                this.interacted(now, out);
                this.set_muted(muted, out);
            }
            Input::SetVolume(volume) => {
                this.interacted(now, out);
                if this.volume != volume {
                    this.volume = volume;
                    out.push(Output::VolumeChanged(volume));
                    this.send(EngineCommand::SetVolume(volume));
                }
            }
            Input::SetAutoHideEnabled(enabled) => {
                this.auto_hide(auto_hide::Message::SetEnabled(enabled), now, out);
            }
            Input::SetSliderProfile(profile) => {
                let scale = SliderScale::for_profile(profile);
                this.seek(seek::Message::ScaleChanged(scale), now, out);
            }
        })
    }

    /// Fires whichever timers elapsed at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Output> {
        self.observe(|this, out| {
            this.auto_hide(auto_hide::Message::Tick, now, out);
            this.seek(seek::Message::Tick, now, out);
        })
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.auto_hide.deadline(), self.seek.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Starts a view-mode negotiation.
    ///
    /// Returns the pending transition when a listener deferred; resolve it
    /// (without holding the controller) and pass the result to
    /// [`finish_view_mode`](Self::finish_view_mode).
    pub fn begin_view_mode(&mut self, target: ViewMode, now: Instant) -> (Vec<Output>, Option<PendingTransition>) {
        let mut pending = None;
        let outputs = self.observe(|this, out| match this.view_mode.begin(target) {
            Begin::Finished(outcome) => this.after_view_mode(outcome, now, out),
            Begin::Pending(transition) => {
                out.push(Output::ViewModeChanging(transition.transition()));
                match transition.try_resolve() {
                    Ok(resolved) => this.apply_view_mode(resolved, now, out),
                    Err(transition) => pending = Some(transition),
                }
            }
        });
        (outputs, pending)
    }

    /// Completes a negotiation started by [`begin_view_mode`](Self::begin_view_mode).
    pub fn finish_view_mode(&mut self, resolved: ResolvedTransition, now: Instant) -> Vec<Output> {
        self.observe(|this, out| this.apply_view_mode(resolved, now, out))
    }

    /// Runs a whole view-mode negotiation in place.
    ///
    /// `clock` is read once more after deferrals resolved.
    pub async fn request_view_mode(&mut self, target: ViewMode, clock: impl Fn() -> Instant) -> Vec<Output> {
        let (mut outputs, pending) = self.begin_view_mode(target, clock());
        if let Some(pending) = pending {
            let resolved = pending.resolve().await;
            outputs.extend(self.finish_view_mode(resolved, clock()));
        }
        outputs
    }

    #[must_use]
    pub fn directive(&self) -> SurfaceDirective {
        let status = if let Some(message) = &self.error {
            Status::Error(message.clone())
        } else if self.playback.is_loading() {
            Status::Buffering
        } else {
            Status::Normal
        };
        SurfaceDirective {
            visibility: self.auto_hide.visibility(),
            play_button: if self.playback.is_playing() {
                PlayButton::Pause
            } else {
                PlayButton::Play
            },
            status,
            seek_enabled: self.seek.is_interactable(),
            muted: self.muted,
            volume: self.volume,
            audio_available: self.tracks.audio.is_available(),
            subtitle_available: self.tracks.subtitle.is_available(),
            view_mode: self.view_mode.current(),
        }
    }

    #[must_use]
    pub fn display(&self) -> SeekDisplay {
        self.seek.display()
    }

    #[must_use]
    pub fn tracks(&self) -> &TrackMenus {
        &self.tracks
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Runs `f` and appends the derived outputs (seek gate, directive).
    fn observe(&mut self, f: impl FnOnce(&mut Self, &mut Vec<Output>)) -> Vec<Output> {
        let before = self.directive();
        let mut out = Vec::new();
        f(self, &mut out);
        let after = self.directive();
        if after.seek_enabled != before.seek_enabled {
            out.push(Output::SeekInteractableChanged(after.seek_enabled));
        }
        if after != before {
            out.push(Output::DirectiveChanged(after));
        }
        out
    }

    fn on_engine_event(&mut self, event: EngineEvent, now: Instant, out: &mut Vec<Output>) {
        match event {
            EngineEvent::Position(position) => {
                self.seek(seek::Message::PositionChanged(position), now, out);
            }
            EngineEvent::Length(length) => self.seek(seek::Message::LengthChanged(length), now, out),
            EngineEvent::State(state) => self.set_playback_state(state, now, out),
            EngineEvent::Seekable(seekable) => {
                self.seek(seek::Message::SeekableChanged(seekable), now, out);
            }
            EngineEvent::Muted(muted) => {
                // Engine echo: update without sending a command back.
                if self.muted != muted {
                    self.muted = muted;
                    out.push(Output::MuteChanged(muted));
                }
            }
            EngineEvent::TrackAdded { category, id, name } => {
                self.track(category, tracks::Message::TrackAdded { id, name }, out);
            }
            EngineEvent::TrackSelected { category, id } => {
                self.track(category, tracks::Message::TrackSelected(id), out);
            }
            EngineEvent::TrackDeleted { category, id } => {
                self.track(category, tracks::Message::TrackDeleted(id), out);
            }
            EngineEvent::Error(Some(message)) if !message.is_empty() => {
                self.on_error(message, now, out);
            }
            EngineEvent::Error(_) => self.set_error(None, out),
        }
    }

    fn set_playback_state(&mut self, state: PlaybackState, now: Instant, out: &mut Vec<Output>) {
        let previous = self.playback;
        self.playback = state;
        if state == PlaybackState::Opening && previous != PlaybackState::Opening {
            // New media: tracks are announced again.
            for category in TrackCategory::ALL {
                self.track(category, tracks::Message::Reset, out);
            }
        }
        self.auto_hide(auto_hide::Message::PlaybackStateChanged(state), now, out);
        self.seek(seek::Message::PlaybackStateChanged(state), now, out);
        if !state.is_error() {
            self.set_error(None, out);
        }
    }

    fn on_error(&mut self, message: String, now: Instant, out: &mut Vec<Output>) {
        log::warn!("playback error: {message}");
        self.set_error(Some(message), out);
        self.playback = PlaybackState::Error;
        self.auto_hide(auto_hide::Message::PlaybackStateChanged(PlaybackState::Error), now, out);
        if let auto_hide::Effect::VisibilityChanged(visibility) = self.auto_hide.force_visible() {
            out.push(Output::VisibilityChanged(visibility));
        }
        self.seek(seek::Message::Reset, now, out);
        self.seek(seek::Message::PlaybackStateChanged(PlaybackState::Error), now, out);
    }

    fn set_error(&mut self, error: Option<String>, out: &mut Vec<Output>) {
        if self.error != error {
            self.error.clone_from(&error);
            out.push(Output::ErrorChanged(error));
        }
    }

    fn set_muted(&mut self, muted: bool, out: &mut Vec<Output>) {
        if self.muted != muted {
            self.muted = muted;
            out.push(Output::MuteChanged(muted));
            self.send(EngineCommand::SetMuted(muted));
        }
    }

    fn apply_view_mode(&mut self, resolved: ResolvedTransition, now: Instant, out: &mut Vec<Output>) {
        let outcome = self.view_mode.finish(resolved, &mut *self.host);
        if let TransitionOutcome::Changed(transition) = &outcome {
            out.push(Output::ViewModeChanged(*transition));
        }
        self.after_view_mode(outcome, now, out);
    }

    /// Same bookkeeping for every outcome so the surface never looks stuck.
    fn after_view_mode(&mut self, outcome: TransitionOutcome, now: Instant, out: &mut Vec<Output>) {
        out.push(Output::ViewModeFinished(outcome));
        self.interacted(now, out);
    }

    fn interacted(&mut self, now: Instant, out: &mut Vec<Output>) {
        self.auto_hide(auto_hide::Message::Activity(ActivitySignal::surface_interaction()), now, out);
    }

    fn auto_hide(&mut self, msg: auto_hide::Message, now: Instant, out: &mut Vec<Output>) {
        if let auto_hide::Effect::VisibilityChanged(visibility) = self.auto_hide.handle(msg, now, &*self.surface) {
            out.push(Output::VisibilityChanged(visibility));
        }
    }

    fn seek(&mut self, msg: seek::Message, now: Instant, out: &mut Vec<Output>) {
        match self.seek.handle(msg, now) {
            seek::Effect::None => {}
            seek::Effect::DisplayChanged(display) => out.push(Output::DisplayChanged(display)),
            seek::Effect::Commit { fraction } => self.send(EngineCommand::Seek { fraction }),
        }
    }

    fn track(&mut self, category: TrackCategory, msg: tracks::Message, out: &mut Vec<Output>) {
        match self.tracks.get_mut(category).handle(msg) {
            tracks::Effect::None => {}
            tracks::Effect::Changed { available } => {
                out.push(Output::TrackMenuChanged(category));
                if let Some(available) = available {
                    out.push(Output::TrackAvailabilityChanged { category, available });
                }
            }
            tracks::Effect::SelectRequested(id) => {
                out.push(Output::TrackMenuChanged(category));
                self.send(EngineCommand::SelectTrack { category, id });
            }
        }
    }

    fn send(&mut self, command: EngineCommand) {
        if let Err(err) = self.engine.send(command.clone()) {
            log::warn!("engine command {command:?} dropped: {err}");
        }
    }
}
