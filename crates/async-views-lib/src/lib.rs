//! Async Views Library - Background View Inflation
//!
//! This library builds large view hierarchies off the UI thread and hands the
//! finished result back to the UI thread through a message channel. It does not
//! depend on any UI toolkit: the application crate renders the containers.
//!
//! # Architecture
//!
//! - **[`Rgb`]**: Opaque colors from [`random_color`]
//! - **[`RowTemplate`]**: Validated description of the cells in a row
//! - **[`Row`]** / **[`Container`]**: Immutable rows and the vertical container holding them
//! - **[`inflate_batch`]**: Sequential construction of a full offscreen container
//! - **[`spawn_worker`]**: Runs the inflation on a dedicated thread and reports back
//! - **[`InflateController`]**: UI-side owner of the visible container and progress indicator
//!
//! # Flow
//!
//! 1. The UI calls [`InflateController::inflate`], which clears the visible container
//!    and starts a worker tagged with a new generation.
//! 2. The worker sends `ShowProgress`, builds all rows, then sends `WorkComplete`
//!    with the container, moving ownership to the UI thread.
//! 3. The UI calls [`InflateController::poll`] once per frame to apply messages.
//!    Messages from superseded generations are dropped.

mod color;
mod controller;
mod inflate;
mod template;
mod view;
mod worker;

// Public API exports
pub use color::{Rgb, random_color};
pub use controller::{InflateConfig, InflateController, ProgressIndicator, ProgressStrings, UiEffect};
pub use inflate::{MAX_VIEWS, build_row, inflate_batch};
pub use template::{CellSpec, RowTemplate, TemplateError};
pub use view::{Cell, Container, Dimension, LayoutParams, Row, VisibleContainer};
pub use worker::{InflateJob, Waker, WorkerEvent, WorkerMessage, WorkerState, spawn_worker};

/// Error types for the inflation pipeline
#[derive(Debug, thiserror::Error)]
pub enum InflateError {
    #[error("Invalid row template: {0}")]
    Template(#[from] TemplateError),

    #[error("Failed to spawn inflate worker: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InflateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _: fn(InflateConfig) -> InflateController = InflateController::new;
        let _: fn() -> RowTemplate = RowTemplate::default;
        assert_eq!(MAX_VIEWS, 10_000);
    }

    #[test]
    fn test_error_display() {
        let err = InflateError::from(TemplateError::NoCells);
        assert!(err.to_string().starts_with("Invalid row template"));
    }
}
