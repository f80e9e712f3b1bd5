// SPDX-License-Identifier: MPL-2.0
//! Tokio driver for a [`TransportController`].
//!
//! The controller runs on its own task. Inputs arrive over an unbounded
//! channel, outputs leave over another, and the task sleeps until the
//! controller's next timer deadline in between. View-mode deferrals are
//! awaited on separate tasks, so inputs keep flowing while a negotiation is
//! suspended.

use crate::controller::{Input, Output, TransportController};
use crate::controls::view_mode::ResolvedTransition;
use crate::domain::ui::ViewMode;
use crate::error::{Error, Result};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Commands sent to the controller task.
#[derive(Debug)]
enum Command {
    Input(Input),
    RequestViewMode(ViewMode),
    Shutdown,
}

/// Handle for feeding a running controller task.
/// This is cloneable so engine callbacks and UI code can each hold one.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl ControllerHandle {
    /// Queues an input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControllerClosed`] once the task has stopped.
    pub fn send(&self, input: Input) -> Result<()> {
        self.command(Command::Input(input))
    }

    /// Queues a view-mode request. The outcome arrives as
    /// [`Output::ViewModeFinished`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControllerClosed`] once the task has stopped.
    pub fn request_view_mode(&self, mode: ViewMode) -> Result<()> {
        self.command(Command::RequestViewMode(mode))
    }

    /// Asks the task to stop after the commands already queued.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControllerClosed`] if the task has already stopped.
    pub fn shutdown(&self) -> Result<()> {
        self.command(Command::Shutdown)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn command(&self, command: Command) -> Result<()> {
        self.tx.send(command).map_err(|_| Error::ControllerClosed)
    }
}

/// Spawns the controller task on the current tokio runtime.
///
/// The configured volume and mute state are pushed to the engine first.
/// The task ends on [`ControllerHandle::shutdown`] or when every handle has
/// been dropped.
pub fn spawn(
    controller: TransportController,
) -> (ControllerHandle, mpsc::UnboundedReceiver<Output>, JoinHandle<()>) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (output_tx, output_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(controller, command_rx, output_tx));
    (ControllerHandle { tx: command_tx }, output_rx, task)
}

async fn run(
    mut controller: TransportController,
    mut commands: mpsc::UnboundedReceiver<Command>,
    outputs: mpsc::UnboundedSender<Output>,
) {
    let (resolved_tx, mut resolved_rx) = mpsc::unbounded_channel::<ResolvedTransition>();
    controller.push_audio_settings();

    loop {
        let deadline = controller.next_deadline();
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    log::debug!("controller task: all handles dropped");
                    break;
                };
                match command {
                    Command::Input(input) => emit(&outputs, controller.handle(input, now())),
                    Command::RequestViewMode(mode) => {
                        let (produced, pending) = controller.begin_view_mode(mode, now());
                        emit(&outputs, produced);
                        if let Some(pending) = pending {
                            let tx = resolved_tx.clone();
                            tokio::spawn(async move {
                                let resolved = pending.resolve().await;
                                if tx.send(resolved).is_err() {
                                    log::debug!("view-mode negotiation resolved after the controller stopped");
                                }
                            });
                        }
                    }
                    Command::Shutdown => break,
                }
            }

            Some(resolved) = resolved_rx.recv() => {
                emit(&outputs, controller.finish_view_mode(resolved, now()));
            }

            () = sleep_until(deadline) => {
                emit(&outputs, controller.tick(now()));
            }
        }
    }
}

/// Runtime clock, so paused-time tests stay deterministic.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

fn emit(outputs: &mpsc::UnboundedSender<Output>, produced: Vec<Output>) {
    for output in produced {
        if outputs.send(output).is_err() {
            // Nobody is rendering; keep driving the engine anyway.
            log::debug!("output receiver dropped, discarding controller outputs");
            break;
        }
    }
}
