// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Debounced recalculation while the user is typing.
//!
//! Inputs arrive on an mpsc channel as the form changes. Only the latest
//! input is kept, and it is projected once no newer input has arrived for
//! the debounce window. Each new input restarts the window.

use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::PlanError;
use crate::models::{GoalInput, GoalOutcome};
use crate::services::calculator::project_goal;

/// Outcome of one recalculation, as delivered to the view.
pub type Recalculation = Result<GoalOutcome, PlanError>;

/// Channels connecting a view to a running recalculation worker.
pub struct RecalcHandle {
    /// Send every form change here
    pub inputs: mpsc::UnboundedSender<GoalInput>,
    /// Debounced results arrive here
    pub results: mpsc::UnboundedReceiver<Recalculation>,
    pub task: JoinHandle<()>,
}

/// Spawn a recalculation worker using the configured debounce window.
///
/// Must be called from within a tokio runtime.
pub fn spawn_recalc_worker<F>(config: &Config, today: F) -> RecalcHandle
where
    F: Fn() -> NaiveDate + Send + 'static,
{
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (result_tx, result_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(recalc_worker(input_rx, result_tx, config.debounce, today));

    RecalcHandle {
        inputs: input_tx,
        results: result_rx,
        task,
    }
}

/// Runs the recalculation loop until the input channel closes or the
/// result receiver is dropped.
///
/// A pending input is projected immediately when the input channel closes.
async fn recalc_worker<F>(
    mut rx: mpsc::UnboundedReceiver<GoalInput>,
    tx: mpsc::UnboundedSender<Recalculation>,
    debounce: Duration,
    today: F,
) where
    F: Fn() -> NaiveDate,
{
    tracing::info!(debounce_ms = debounce.as_millis() as u64, "Recalculation worker started");

    let mut pending: Option<GoalInput> = None;

    loop {
        if pending.is_some() {
            tokio::select! {
                input = rx.recv() => {
                    match input {
                        Some(input) => {
                            // Newer input replaces the pending one and restarts the window
                            pending = Some(input);
                        }
                        None => {
                            if let Some(input) = pending.take() {
                                publish(&tx, &input, today());
                            }
                            tracing::info!("Recalculation worker shutting down");
                            return;
                        }
                    }
                }
                _ = tokio::time::sleep(debounce) => {
                    if let Some(input) = pending.take() {
                        if !publish(&tx, &input, today()) {
                            tracing::info!("Result receiver dropped, recalculation worker exiting");
                            return;
                        }
                    }
                }
                _ = tx.closed() => {
                    tracing::info!("Result receiver dropped, recalculation worker exiting");
                    return;
                }
            }
        } else {
            tokio::select! {
                input = rx.recv() => {
                    match input {
                        Some(input) => pending = Some(input),
                        None => {
                            tracing::info!("Recalculation worker shutting down");
                            return;
                        }
                    }
                }
                _ = tx.closed() => {
                    tracing::info!("Result receiver dropped, recalculation worker exiting");
                    return;
                }
            }
        }
    }
}

/// Project `input` and send the result. Returns false if nobody is listening.
fn publish(tx: &mpsc::UnboundedSender<Recalculation>, input: &GoalInput, today: NaiveDate) -> bool {
    let result = project_goal(input, today);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "Recalculation failed");
    }
    tx.send(result).is_ok()
}
