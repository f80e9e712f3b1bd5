// SPDX-License-Identifier: MPL-2.0
//! Transport control components.
//!
//! Each component is a small state machine following the same pattern:
//! a `State` (or named struct), a `Message` enum it handles, and an `Effect`
//! enum it returns for the owner to act on. Components never talk to each
//! other directly; [`crate::controller::TransportController`] routes between
//! them.
//!
//! - [`geometry`]: point-in-region tests
//! - [`auto_hide`]: show/hide decisions for the control surface
//! - [`seek`]: slider/engine position reconciliation with debounced commits
//! - [`tracks`]: audio and subtitle menus
//! - [`view_mode`]: cancelable, deferrable view-mode negotiation
//! - [`countdown`]: single-shot restartable timer bookkeeping
//! - [`time_text`]: elapsed/remaining labels

pub mod auto_hide;
pub mod countdown;
pub mod geometry;
pub mod seek;
pub mod time_text;
pub mod tracks;
pub mod view_mode;

pub use countdown::{Countdown, TimerToken};
pub use seek::{SeekDisplay, SeekSession};
pub use tracks::{TrackMenu, TrackMenus};
pub use view_mode::{
    Begin, Decision, Deferral, DeferralHandle, PendingTransition, Permission, ResolvedTransition,
    TransitionOutcome, ViewModeListener, ViewModeNegotiator,
};
