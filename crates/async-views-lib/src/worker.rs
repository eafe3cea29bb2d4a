//! Background inflate worker
//!
//! Each inflate action runs on its own named OS thread. The worker only sends:
//! `ShowProgress` before building, then `WorkComplete` carrying the finished
//! container. Ownership of the container moves to the receiver with the message.

use crate::inflate::inflate_batch;
use crate::template::RowTemplate;
use crate::view::{Container, LayoutParams};
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::mpsc::UnboundedSender;

/// Callback used to wake the UI thread after a message was sent
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Lifecycle of the most recent worker, as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerState {
    #[default]
    Idle,
    Running,
    Done,
    /// The worker exited without delivering its result
    Failed,
}

#[derive(Debug)]
pub enum WorkerEvent {
    ShowProgress,
    WorkComplete(Container),
}

/// A worker event tagged with the generation of the inflate action that produced it
#[derive(Debug)]
pub struct WorkerMessage {
    pub generation: u64,
    pub event: WorkerEvent,
}

/// Everything a worker needs, copied out of the UI state before spawning
#[derive(Debug, Clone)]
pub struct InflateJob {
    pub generation: u64,
    pub count: usize,
    pub layout: LayoutParams,
    pub template: RowTemplate,
}

/// Start a worker thread for `job`.
///
/// Sending never blocks. If the receiving side is gone the message is dropped.
pub fn spawn_worker(
    job: InflateJob,
    sender: UnboundedSender<WorkerMessage>,
    waker: Option<Waker>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name(format!("inflate-worker-{}", job.generation))
        .spawn(move || run_job(job, &sender, waker.as_deref()))
}

fn run_job(
    job: InflateJob,
    sender: &UnboundedSender<WorkerMessage>,
    waker: Option<&(dyn Fn() + Send + Sync)>,
) {
    profiling::register_thread!("inflate-worker");

    let generation = job.generation;
    let send = |event: WorkerEvent| {
        if sender.send(WorkerMessage { generation, event }).is_err() {
            tracing::debug!("Worker {generation}: receiver closed, message dropped");
            return;
        }
        if let Some(wake) = waker {
            wake();
        }
    };

    tracing::debug!("Worker {generation}: inflating {} rows", job.count);
    send(WorkerEvent::ShowProgress);

    let container = inflate_batch(
        job.count,
        job.layout,
        &job.template,
        &mut rand::thread_rng(),
    );

    send(WorkerEvent::WorkComplete(container));
    tracing::debug!("Worker {generation}: done");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc::unbounded_channel;

    fn job(generation: u64, count: usize) -> InflateJob {
        InflateJob {
            generation,
            count,
            layout: LayoutParams::default(),
            template: RowTemplate::default(),
        }
    }

    #[test]
    fn test_worker_sends_progress_then_result() {
        let (tx, mut rx) = unbounded_channel();
        let handle = spawn_worker(job(3, 250), tx, None).unwrap();
        handle.join().unwrap();

        let first = rx.try_recv().unwrap();
        assert_eq!(first.generation, 3);
        assert!(matches!(first.event, WorkerEvent::ShowProgress));

        let second = rx.try_recv().unwrap();
        assert_eq!(second.generation, 3);
        match second.event {
            WorkerEvent::WorkComplete(container) => assert_eq!(container.len(), 250),
            other => panic!("unexpected event {other:?}"),
        }

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_worker_wakes_once_per_message() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let waker: Waker = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let (tx, _rx) = unbounded_channel();
        spawn_worker(job(1, 10), tx, Some(waker))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_worker_survives_closed_receiver() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        let handle = spawn_worker(job(1, 10), tx, None).unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_worker_thread_name() {
        let (tx, _rx) = unbounded_channel();
        let handle = spawn_worker(job(17, 1), tx, None).unwrap();
        assert_eq!(handle.thread().name(), Some("inflate-worker-17"));
        handle.join().unwrap();
    }
}
