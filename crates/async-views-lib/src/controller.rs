//! UI-side controller
//!
//! Owns the visible container and the progress indicator, starts workers and
//! applies their messages. All methods are meant to be called from the UI
//! thread; the only cross-thread traffic is the message channel.

use crate::template::RowTemplate;
use crate::view::{LayoutParams, VisibleContainer};
use crate::worker::{InflateJob, Waker, WorkerEvent, WorkerMessage, WorkerState, spawn_worker};
use crate::{InflateError, MAX_VIEWS, Result};
use once_cell::unsync::OnceCell;
use std::thread::JoinHandle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// What an inflate action builds
#[derive(Debug, Clone)]
pub struct InflateConfig {
    /// Rows built per inflate action
    pub rows: usize,
    pub template: RowTemplate,
    /// Layout of the visible container, copied into every offscreen container
    pub layout: LayoutParams,
}

impl Default for InflateConfig {
    fn default() -> Self {
        Self {
            rows: MAX_VIEWS,
            template: RowTemplate::default(),
            layout: LayoutParams::default(),
        }
    }
}

/// Title and message shown by the progress indicator
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStrings {
    pub title: String,
    pub message: String,
}

impl Default for ProgressStrings {
    fn default() -> Self {
        Self {
            title: "Please wait".to_string(),
            message: "Inflating views...".to_string(),
        }
    }
}

/// Busy indicator shown while a worker runs. It cannot be dismissed by the
/// user and does not report a percentage.
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    strings: ProgressStrings,
    visible: bool,
}

impl ProgressIndicator {
    fn new(strings: ProgressStrings) -> Self {
        Self {
            strings,
            visible: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.strings.title
    }

    pub fn message(&self) -> &str {
        &self.strings.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_cancelable(&self) -> bool {
        false
    }

    pub fn is_indeterminate(&self) -> bool {
        true
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// A change applied to UI state while draining worker messages
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    ProgressShown,
    Attached { rows: usize },
    ProgressHidden,
    Failed { reason: String },
}

pub struct InflateController {
    config: InflateConfig,
    visible: VisibleContainer,
    progress: OnceCell<ProgressIndicator>,
    generation: u64,
    state: WorkerState,
    worker: Option<JoinHandle<()>>,
    sender: UnboundedSender<WorkerMessage>,
    receiver: UnboundedReceiver<WorkerMessage>,
    waker: Option<Waker>,
    last_error: Option<String>,
    #[cfg(test)]
    fail_next_spawn: bool,
}

impl InflateController {
    pub fn new(config: InflateConfig) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            visible: VisibleContainer::new(config.layout.clone()),
            config,
            progress: OnceCell::new(),
            generation: 0,
            state: WorkerState::Idle,
            worker: None,
            sender,
            receiver,
            waker: None,
            last_error: None,
            #[cfg(test)]
            fail_next_spawn: false,
        }
    }

    /// Set the callback workers use to wake the UI thread
    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// Construct the progress indicator. Only the first call has an effect.
    pub fn setup_progress(&mut self, strings: ProgressStrings) {
        if self.progress.get().is_some() {
            tracing::trace!("Progress indicator already set up");
            return;
        }
        let _ = self.progress.set(ProgressIndicator::new(strings));
    }

    /// Clear the visible container and start a new worker.
    ///
    /// A worker that is still running is not waited for; its messages will be
    /// ignored once they arrive.
    pub fn inflate(&mut self) -> Result<()> {
        self.clear();

        self.generation += 1;
        if self.state == WorkerState::Running {
            tracing::info!(
                "Superseding running worker with generation {}",
                self.generation
            );
        }

        let job = InflateJob {
            generation: self.generation,
            count: self.config.rows,
            layout: self.visible.layout().clone(),
            template: self.config.template.clone(),
        };

        match self.start_worker(job) {
            Ok(handle) => {
                self.worker = Some(handle);
                self.state = WorkerState::Running;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to start inflate worker: {e}");
                // The previous worker's messages are stale now and would never hide it
                self.set_progress_visible(false);
                self.worker = None;
                self.state = WorkerState::Idle;
                self.last_error = Some(e.to_string());
                Err(InflateError::Spawn(e))
            }
        }
    }

    fn start_worker(&mut self, job: InflateJob) -> std::io::Result<JoinHandle<()>> {
        #[cfg(test)]
        if std::mem::take(&mut self.fail_next_spawn) {
            return Err(std::io::Error::other("thread limit reached"));
        }
        spawn_worker(job, self.sender.clone(), self.waker.clone())
    }

    /// Remove every row from the visible container. No-op when already empty.
    pub fn clear(&mut self) {
        if self.visible.clear() {
            tracing::debug!("Cleared visible container");
        }
    }

    /// Apply every pending worker message without blocking.
    pub fn poll(&mut self) -> Vec<UiEffect> {
        profiling::scope!("InflateController::poll");

        // Observed before draining: once the thread has finished, all of its
        // messages are already queued.
        let finished = self.worker.as_ref().is_some_and(JoinHandle::is_finished);

        let mut effects = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            effects.extend(self.handle(message));
        }

        if finished {
            self.reap_worker(&mut effects);
        }
        effects
    }

    /// Apply one worker message. Messages from superseded generations are dropped.
    pub fn handle(&mut self, message: WorkerMessage) -> Vec<UiEffect> {
        if message.generation != self.generation {
            tracing::debug!(
                "Ignoring stale message from generation {} (current {})",
                message.generation,
                self.generation
            );
            return Vec::new();
        }

        match message.event {
            WorkerEvent::ShowProgress => {
                if self.set_progress_visible(true) {
                    vec![UiEffect::ProgressShown]
                } else {
                    Vec::new()
                }
            }
            WorkerEvent::WorkComplete(container) => {
                let rows = container.len();
                self.visible.attach(container);
                self.state = WorkerState::Done;
                tracing::info!("Attached {rows} rows (generation {})", self.generation);

                let mut effects = vec![UiEffect::Attached { rows }];
                if self.set_progress_visible(false) {
                    effects.push(UiEffect::ProgressHidden);
                }
                effects
            }
        }
    }

    fn reap_worker(&mut self, effects: &mut Vec<UiEffect>) {
        let Some(handle) = self.worker.take() else {
            return;
        };
        let panicked = handle.join().is_err();

        if self.state != WorkerState::Running {
            return;
        }

        let reason = if panicked {
            format!("inflate worker {} panicked", self.generation)
        } else {
            format!("inflate worker {} exited without a result", self.generation)
        };
        tracing::error!("{reason}");

        self.state = WorkerState::Failed;
        self.last_error = Some(reason.clone());
        effects.push(UiEffect::Failed { reason });
        if self.set_progress_visible(false) {
            effects.push(UiEffect::ProgressHidden);
        }
    }

    /// Returns whether the indicator exists; hiding or showing a missing one is a no-op.
    fn set_progress_visible(&mut self, visible: bool) -> bool {
        match self.progress.get_mut() {
            Some(progress) => {
                if visible {
                    progress.show();
                } else {
                    progress.hide();
                }
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &VisibleContainer {
        &self.visible
    }

    pub fn progress(&self) -> Option<&ProgressIndicator> {
        self.progress.get()
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &InflateConfig {
        &self.config
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.state == WorkerState::Running
    }
}
