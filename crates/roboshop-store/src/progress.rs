//! Order progress rendering.
//!
//! Pure derivation of per-stage UI state from an order snapshot. All
//! lifecycle transitions happen upstream; this module never mutates
//! anything.

use crate::model::{Order, OrderStatus, ORDER_STAGES};

/// Rendered state of one stage in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStep {
    pub status: OrderStatus,
    pub state: StepState,
}

/// Classify each stage of [`ORDER_STAGES`] for the given order.
///
/// A stage with a timeline entry is completed. Without one, the stage at
/// the current status's position is current, stages before it are filled in
/// as completed (intermediate stages may go unlogged), and everything after
/// is pending.
///
/// A cancelled order collapses to exactly two steps — the first stage and
/// the cancelled terminal — suppressing the linear progression entirely.
pub fn progress_steps(order: &Order) -> Vec<ProgressStep> {
    if order.status == OrderStatus::Cancelled {
        return vec![
            ProgressStep {
                status: ORDER_STAGES[0],
                state: StepState::Completed,
            },
            ProgressStep {
                status: OrderStatus::Cancelled,
                state: StepState::Current,
            },
        ];
    }

    let current = order.status.stage_index();
    ORDER_STAGES
        .iter()
        .enumerate()
        .map(|(index, &status)| {
            let logged = order.timeline.iter().any(|entry| entry.status == status);
            let state = if logged {
                StepState::Completed
            } else {
                match current {
                    Some(at) if index == at => StepState::Current,
                    Some(at) if index < at => StepState::Completed,
                    _ => StepState::Pending,
                }
            };
            ProgressStep { status, state }
        })
        .collect()
}
