//! Worker pool execution.
//!
//! A pool of OS threads shares one queue of [`CheckerItem`]s. Each worker
//! pops items with a non-blocking receive and evaluates them until it
//! observes the queue empty, then returns; workers never wait for items
//! that might arrive later. The producer must finish enqueuing before the
//! pool is expected to drain, which [`WorkerPool::start`] guarantees by
//! enqueuing the whole batch before spawning the first thread.
//!
//! Ownership of a dequeued item transfers exclusively to the worker that
//! received it, so items need no locking. Evaluated items travel back on a
//! result channel and are handed to the caller by [`WorkerPool::join`].

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, warn};

use crate::checks::evaluate_item;
use crate::endpoint::EndpointClient;
use crate::engine::classify::ClassificationConfig;
use crate::CheckerItem;

/// Pool size used when the caller has no reason to choose one.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// One validation worker bound to a shared queue.
///
/// Workers are normally created through [`WorkerPool::start`], which gives
/// every worker the same classification config; constructing workers
/// directly allows a per-worker config.
pub struct Worker {
    index: usize,
    queue: Receiver<CheckerItem>,
    results: Sender<CheckerItem>,
    client: Arc<dyn EndpointClient>,
    config: ClassificationConfig,
}

impl Worker {
    /// Create a worker draining `queue` and reporting on `results`.
    pub fn new(
        index: usize,
        queue: Receiver<CheckerItem>,
        results: Sender<CheckerItem>,
        client: Arc<dyn EndpointClient>,
        config: ClassificationConfig,
    ) -> Self {
        Worker {
            index,
            queue,
            results,
            client,
            config,
        }
    }

    /// Schedule [`Worker::run`] on its own OS thread.
    pub fn start(self) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    /// Drain the queue until it is observed empty, then return.
    ///
    /// Every dequeued item is evaluated in place and sent to the result
    /// channel. A probe failure only marks the item; it never interrupts
    /// the worker or its siblings.
    pub fn run(self) {
        debug!(worker = self.index, "worker started");
        let mut processed = 0usize;

        while let Ok(mut item) = self.queue.try_recv() {
            evaluate_item(&mut item, self.client.as_ref(), &self.config);
            processed += 1;
            if self.results.send(item).is_err() {
                // Receiver dropped; nobody is waiting for verdicts anymore.
                warn!(worker = self.index, "result channel closed, stopping");
                return;
            }
        }

        debug!(worker = self.index, processed, "queue empty, worker finished");
    }
}

/// N workers sharing one queue, created fresh per validation batch.
pub struct WorkerPool {
    handles: Vec<thread::JoinHandle<()>>,
    results: Receiver<CheckerItem>,
}

impl WorkerPool {
    /// Enqueue `items` and start `worker_count` workers draining them.
    ///
    /// A count of zero is treated as one worker. All workers share `client`
    /// and receive a copy of `config`.
    pub fn start(
        items: Vec<CheckerItem>,
        worker_count: usize,
        client: Arc<dyn EndpointClient>,
        config: ClassificationConfig,
    ) -> Self {
        let (work_tx, work_rx) = unbounded();
        let (result_tx, result_rx) = unbounded();

        let batch_size = items.len();
        for item in items {
            // Cannot fail: work_rx is alive until the last worker returns.
            let _ = work_tx.send(item);
        }
        drop(work_tx);

        let worker_count = worker_count.max(1);
        debug!(workers = worker_count, items = batch_size, "starting validation pool");

        let handles = (0..worker_count)
            .map(|index| {
                Worker::new(
                    index,
                    work_rx.clone(),
                    result_tx.clone(),
                    Arc::clone(&client),
                    config.clone(),
                )
                .start()
            })
            .collect();
        drop(result_tx);

        WorkerPool {
            handles,
            results: result_rx,
        }
    }

    /// Block until every worker has returned, then collect the verdicts.
    ///
    /// Completion order across items is unspecified. A panicking worker
    /// loses the item it was evaluating but not the rest of the batch.
    pub fn join(self) -> Vec<CheckerItem> {
        for handle in self.handles {
            if handle.join().is_err() {
                warn!("validation worker panicked");
            }
        }
        self.results.try_iter().collect()
    }
}
