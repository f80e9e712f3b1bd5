// SPDX-License-Identifier: MPL-2.0
//! View-mode negotiator.
//!
//! A view-mode change is announced to every listener before it is attempted.
//! Listeners answer at once or hand back a [`DeferralHandle`] that completes
//! later; the environment switch is only attempted once every deferral has
//! resolved and nobody canceled.
//!
//! Negotiation is split in two synchronous halves around one async wait so a
//! caller that owns other state (the controller) can keep processing events
//! while deferrals are outstanding:
//!
//! 1. [`ViewModeNegotiator::begin`] asks the listeners.
//! 2. [`PendingTransition::resolve`] waits for deferrals. It borrows nothing.
//! 3. [`ViewModeNegotiator::finish`] applies the result.

use crate::application::port::{ViewModeError, ViewModeHost};
use crate::domain::ui::{ViewMode, ViewModeTransition};
use futures_util::future::join_all;
use tokio::sync::oneshot;

/// Final answer of a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Cancel,
}

/// Immediate answer of a listener to a "changing" notification.
#[derive(Debug)]
pub enum Permission {
    Allow,
    Cancel,
    /// The listener will decide later through the matching [`Deferral`].
    Deferred(DeferralHandle),
}

/// Completion side of a deferred permission, kept by the listener.
///
/// Dropping it without calling [`Deferral::complete`] cancels the transition.
#[derive(Debug)]
pub struct Deferral(oneshot::Sender<Decision>);

/// Waiting side of a deferred permission, handed to the negotiator.
#[derive(Debug)]
pub struct DeferralHandle(oneshot::Receiver<Decision>);

impl Deferral {
    /// Creates a linked deferral pair.
    #[must_use]
    pub fn new() -> (Self, DeferralHandle) {
        let (tx, rx) = oneshot::channel();
        (Self(tx), DeferralHandle(rx))
    }

    /// Completes the deferral.
    pub fn complete(self, decision: Decision) {
        if self.0.send(decision).is_err() {
            log::debug!("view mode: deferral completed after the negotiation ended");
        }
    }
}

impl DeferralHandle {
    /// Waits for the listener's decision.
    pub async fn resolve(self) -> Decision {
        match self.0.await {
            Ok(decision) => decision,
            Err(_) => {
                log::warn!("view mode: deferral dropped without a decision, canceling");
                Decision::Cancel
            }
        }
    }
}

/// Observer of view-mode changes.
pub trait ViewModeListener: Send {
    /// Called before the switch is attempted.
    fn on_changing(&mut self, transition: &ViewModeTransition) -> Permission;

    /// Called after a successful switch.
    fn on_changed(&mut self, transition: &ViewModeTransition) {
        let _ = transition;
    }
}

impl<F> ViewModeListener for F
where
    F: FnMut(&ViewModeTransition) -> Permission + Send,
{
    fn on_changing(&mut self, transition: &ViewModeTransition) -> Permission {
        self(transition)
    }
}

/// How a view-mode request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The environment switched modes.
    Changed(ViewModeTransition),
    /// A listener canceled; the environment was not asked.
    Canceled(ViewModeTransition),
    /// The environment could not switch. Handled like a cancellation.
    Failed {
        transition: ViewModeTransition,
        error: ViewModeError,
    },
    /// The requested mode is already active.
    AlreadyActive(ViewMode),
    /// Another negotiation is still waiting for deferrals.
    Busy,
}

impl TransitionOutcome {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Result of [`ViewModeNegotiator::begin`].
#[derive(Debug)]
pub enum Begin {
    /// Listeners were asked; resolve, then finish.
    Pending(PendingTransition),
    /// Nothing to negotiate.
    Finished(TransitionOutcome),
}

/// A transition whose listeners have been asked.
#[derive(Debug)]
pub struct PendingTransition {
    transition: ViewModeTransition,
    canceled: bool,
    deferrals: Vec<DeferralHandle>,
}

impl PendingTransition {
    #[must_use]
    pub fn transition(&self) -> ViewModeTransition {
        self.transition
    }

    /// Returns the resolved transition if no listener deferred.
    ///
    /// # Errors
    ///
    /// Gives the pending transition back when deferrals are outstanding.
    pub fn try_resolve(self) -> Result<ResolvedTransition, Self> {
        if self.deferrals.is_empty() {
            Ok(ResolvedTransition {
                transition: self.transition,
                allowed: !self.canceled,
            })
        } else {
            Err(self)
        }
    }

    /// Waits for every deferral.
    pub async fn resolve(self) -> ResolvedTransition {
        let decisions = join_all(self.deferrals.into_iter().map(DeferralHandle::resolve)).await;
        let allowed = !self.canceled && decisions.iter().all(|d| *d == Decision::Allow);
        ResolvedTransition {
            transition: self.transition,
            allowed,
        }
    }
}

/// A transition whose listeners have all answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTransition {
    pub transition: ViewModeTransition,
    pub allowed: bool,
}

/// Coordinates view-mode changes between listeners and the environment.
pub struct ViewModeNegotiator {
    current: ViewMode,
    listeners: Vec<Box<dyn ViewModeListener>>,
    in_flight: Option<ViewModeTransition>,
}

impl std::fmt::Debug for ViewModeNegotiator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModeNegotiator")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl Default for ViewModeNegotiator {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}

impl ViewModeNegotiator {
    #[must_use]
    pub fn new(current: ViewMode) -> Self {
        Self {
            current,
            listeners: Vec::new(),
            in_flight: None,
        }
    }

    /// Registers a listener. Listeners are asked in registration order.
    pub fn subscribe(&mut self, listener: impl ViewModeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub fn current(&self) -> ViewMode {
        self.current
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<ViewModeTransition> {
        self.in_flight
    }

    /// Announces a transition to `target` and collects permissions.
    pub fn begin(&mut self, target: ViewMode) -> Begin {
        if self.in_flight.is_some() {
            log::debug!("view mode: {target} requested while another change is pending");
            return Begin::Finished(TransitionOutcome::Busy);
        }
        if target == self.current {
            return Begin::Finished(TransitionOutcome::AlreadyActive(target));
        }

        let mut transition = ViewModeTransition::new(self.current, target);
        let mut canceled = false;
        let mut deferrals = Vec::new();
        for listener in &mut self.listeners {
            match listener.on_changing(&transition) {
                Permission::Allow => {}
                Permission::Cancel => canceled = true,
                Permission::Deferred(handle) => deferrals.push(handle),
            }
        }
        transition.deferred = !deferrals.is_empty();
        self.in_flight = Some(transition);

        Begin::Pending(PendingTransition {
            transition,
            canceled,
            deferrals,
        })
    }

    /// Applies a resolved transition against the environment.
    pub fn finish(&mut self, resolved: ResolvedTransition, host: &mut dyn ViewModeHost) -> TransitionOutcome {
        let transition = resolved.transition;
        if self.in_flight != Some(transition) {
            log::warn!("view mode: finishing a transition that was not in flight");
        }
        self.in_flight = None;

        if !resolved.allowed {
            log::debug!("view mode: change to {} canceled by a listener", transition.to);
            return TransitionOutcome::Canceled(transition);
        }

        let result = if host.is_supported(transition.to) {
            host.try_switch(transition.to)
        } else {
            Err(ViewModeError::Unsupported(transition.to))
        };
        if let Err(error) = result {
            log::warn!("view mode: {error}");
            return TransitionOutcome::Failed { transition, error };
        }

        self.current = transition.to;
        for listener in &mut self.listeners {
            listener.on_changed(&transition);
        }
        TransitionOutcome::Changed(transition)
    }

    /// Runs a whole negotiation, waiting for deferrals in place.
    pub async fn request_transition(&mut self, target: ViewMode, host: &mut dyn ViewModeHost) -> TransitionOutcome {
        match self.begin(target) {
            Begin::Finished(outcome) => outcome,
            Begin::Pending(pending) => {
                let resolved = pending.resolve().await;
                self.finish(resolved, host)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FixedViewModeHost;
    use std::sync::{Arc, Mutex};

    fn host() -> FixedViewModeHost {
        FixedViewModeHost::new([ViewMode::CompactOverlay, ViewMode::FullScreen])
    }

    /// Records every "changed" notification.
    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<ViewModeTransition>>>);

    impl ViewModeListener for Recorder {
        fn on_changing(&mut self, _: &ViewModeTransition) -> Permission {
            Permission::Allow
        }

        fn on_changed(&mut self, transition: &ViewModeTransition) {
            self.0.lock().unwrap().push(*transition);
        }
    }

    #[tokio::test]
    async fn allowed_transition_switches_and_notifies() {
        let mut negotiator = ViewModeNegotiator::default();
        let recorder = Recorder::default();
        negotiator.subscribe(recorder.clone());
        let mut host = host();

        let outcome = negotiator.request_transition(ViewMode::CompactOverlay, &mut host).await;

        assert!(outcome.is_changed());
        assert_eq!(negotiator.current(), ViewMode::CompactOverlay);
        assert_eq!(host.active(), ViewMode::CompactOverlay);
        assert_eq!(recorder.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn synchronous_cancel_skips_environment_and_changed() {
        let mut negotiator = ViewModeNegotiator::default();
        let recorder = Recorder::default();
        negotiator.subscribe(recorder.clone());
        negotiator.subscribe(|_: &ViewModeTransition| Permission::Cancel);
        let mut host = host();

        let outcome = negotiator.request_transition(ViewMode::CompactOverlay, &mut host).await;

        assert!(matches!(outcome, TransitionOutcome::Canceled(_)));
        assert_eq!(host.active(), ViewMode::Default);
        assert_eq!(negotiator.current(), ViewMode::Default);
        assert!(recorder.0.lock().unwrap().is_empty());
        assert!(negotiator.in_flight().is_none());
    }

    #[tokio::test]
    async fn waits_for_deferred_decision() {
        let mut negotiator = ViewModeNegotiator::default();
        let slot: Arc<Mutex<Option<Deferral>>> = Arc::default();
        let listener_slot = Arc::clone(&slot);
        negotiator.subscribe(move |_: &ViewModeTransition| {
            let (deferral, handle) = Deferral::new();
            *listener_slot.lock().unwrap() = Some(deferral);
            Permission::Deferred(handle)
        });

        let Begin::Pending(pending) = negotiator.begin(ViewMode::FullScreen) else {
            panic!("expected a pending transition");
        };
        assert!(pending.transition().deferred);
        let pending = pending.try_resolve().expect_err("deferral is outstanding");

        assert_eq!(
            negotiator.begin(ViewMode::CompactOverlay).finished(),
            Some(TransitionOutcome::Busy)
        );

        let deferral = slot.lock().unwrap().take().unwrap();
        tokio::spawn(async move { deferral.complete(Decision::Allow) });
        let resolved = pending.resolve().await;
        assert!(resolved.allowed);

        let outcome = negotiator.finish(resolved, &mut host());
        assert!(outcome.is_changed());
        assert_eq!(negotiator.current(), ViewMode::FullScreen);
    }

    #[tokio::test]
    async fn dropped_deferral_cancels() {
        let mut negotiator = ViewModeNegotiator::default();
        negotiator.subscribe(|_: &ViewModeTransition| {
            let (_deferral, handle) = Deferral::new();
            Permission::Deferred(handle)
        });

        let outcome = negotiator.request_transition(ViewMode::FullScreen, &mut host()).await;
        assert!(matches!(outcome, TransitionOutcome::Canceled(_)));
    }

    #[tokio::test]
    async fn environment_failure_is_reported_without_changed() {
        let mut negotiator = ViewModeNegotiator::default();
        let recorder = Recorder::default();
        negotiator.subscribe(recorder.clone());
        let mut host = FixedViewModeHost::new([ViewMode::FullScreen]);

        let outcome = negotiator.request_transition(ViewMode::CompactOverlay, &mut host).await;

        assert_eq!(
            outcome,
            TransitionOutcome::Failed {
                transition: ViewModeTransition::new(ViewMode::Default, ViewMode::CompactOverlay),
                error: ViewModeError::Unsupported(ViewMode::CompactOverlay),
            }
        );
        assert!(recorder.0.lock().unwrap().is_empty());
        assert_eq!(negotiator.current(), ViewMode::Default);
    }

    #[test]
    fn requesting_active_mode_does_not_notify() {
        let mut negotiator = ViewModeNegotiator::new(ViewMode::FullScreen);
        negotiator.subscribe(|_: &ViewModeTransition| -> Permission {
            panic!("listener must not be asked");
        });
        assert_eq!(
            negotiator.begin(ViewMode::FullScreen).finished(),
            Some(TransitionOutcome::AlreadyActive(ViewMode::FullScreen))
        );
    }

    impl Begin {
        fn finished(self) -> Option<TransitionOutcome> {
            match self {
                Begin::Finished(outcome) => Some(outcome),
                Begin::Pending(_) => None,
            }
        }
    }
}
