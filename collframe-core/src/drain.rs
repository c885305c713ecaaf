//! Channel draining worker pool.
//!
//! A drain splits an owned snapshot of a collection into partitions and puts
//! them on a shared queue. Producer threads pull whole partitions off the
//! queue and push their elements through a single bounded channel. Each
//! producer owns a sender clone, so the channel closes exactly when the last
//! producer is done and never earlier.
//!
//! The queue is filled before any producer starts. A producer that fails to
//! start leaves its partition to the ones that did, so nothing is lost; if
//! none starts, the drain reports [`Error::ProducerSpawn`].
//!
//! Producers are plain OS threads, capped at the available parallelism.
//! Receivers can be consumed from async code with `recv().await` or from sync
//! code with `blocking_recv()`, and no runtime has to be running.

use crate::error::{Error, Result};
use std::io;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Splits `items` into at most `parts` contiguous, non-empty partitions whose
/// sizes differ by at most one.
///
/// Concatenating the partitions gives back `items` in its original order.
/// An empty input yields no partitions, and `parts` is capped at the number
/// of elements.
#[must_use]
pub fn partition<T>(mut items: Vec<T>, parts: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    let parts = parts.clamp(1, items.len());
    let base = items.len() / parts;
    let extra = items.len() % parts;

    // Split from the back so every split_off moves only the tail.
    let mut out = Vec::with_capacity(parts);
    for idx in (0..parts).rev() {
        let size = base + usize::from(idx < extra);
        let tail = items.split_off(items.len() - size);
        out.push(tail);
    }
    out.reverse();
    out
}

/// Number of producers a drain of `elements` with `workers` requested will
/// run: at least one per non-empty drain, at most one per element, and never
/// more than the available parallelism.
#[must_use]
pub fn producer_count(workers: usize, elements: usize) -> usize {
    let ceiling = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    workers.clamp(1, ceiling).min(elements)
}

/// Drains `items` through one producer, preserving their order.
pub fn drain_ordered<T>(items: Vec<T>, buffer_size: usize) -> Result<mpsc::Receiver<T>>
where
    T: Send + 'static,
{
    drain_parallel(items, buffer_size, 1)
}

/// Drains `items` through up to `workers` producers sharing one channel of
/// capacity `buffer_size`.
///
/// Order is kept within each partition but not across partitions. Zero
/// arguments are clamped to 1, and `workers` is capped by
/// [`producer_count`].
pub fn drain_parallel<T>(
    items: Vec<T>,
    buffer_size: usize,
    workers: usize,
) -> Result<mpsc::Receiver<T>>
where
    T: Send + 'static,
{
    let buffer_size = at_least_one(buffer_size, "buffer_size");
    let workers = at_least_one(workers, "workers");
    let producers = producer_count(workers, items.len());
    if producers < workers && !items.is_empty() {
        debug!(requested = workers, producers, "Capped drain producers");
    }
    start(items, buffer_size, producers, spawn_thread)
}

fn spawn_thread(name: String, job: Job) -> io::Result<()> {
    thread::Builder::new().name(name).spawn(job).map(drop)
}

fn start<T, S>(
    items: Vec<T>,
    buffer_size: usize,
    producers: usize,
    mut spawn: S,
) -> Result<mpsc::Receiver<T>>
where
    T: Send + 'static,
    S: FnMut(String, Job) -> io::Result<()>,
{
    let (tx, rx) = mpsc::channel(buffer_size);
    let elements = items.len();

    debug!(elements, buffer_size, producers, "Starting drain");
    if elements == 0 {
        return Ok(rx);
    }

    let queue = Arc::new(Mutex::new(partition(items, producers)));
    let mut started = 0;
    let mut last_error = None;

    for worker in 0..producers {
        let queue = Arc::clone(&queue);
        let tx = tx.clone();
        let job: Job = Box::new(move || produce(worker, &queue, &tx));
        match spawn(format!("collframe-drain-{worker}"), job) {
            Ok(()) => started += 1,
            Err(e) => {
                warn!(worker, error = %e, "Failed to spawn drain producer, leaving its partition to the others");
                last_error = Some(e);
            }
        }
    }

    // Our own sender drops here; the producers hold the rest.
    match (started, last_error) {
        (0, Some(e)) => Err(Error::ProducerSpawn(e)),
        _ => Ok(rx),
    }
}

fn produce<T>(worker: usize, queue: &Mutex<Vec<Vec<T>>>, tx: &mpsc::Sender<T>) {
    let mut sent = 0usize;
    loop {
        let next = queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        let Some(chunk) = next else {
            break;
        };
        for elem in chunk {
            if tx.blocking_send(elem).is_err() {
                debug!(worker, sent, "Drain receiver dropped, producer stopping");
                return;
            }
            sent += 1;
        }
    }
    trace!(worker, sent, "Drain producer finished");
}

fn at_least_one(value: usize, argument: &'static str) -> usize {
    if value == 0 {
        warn!(argument, "Zero drain argument clamped to 1");
        1
    } else {
        value
    }
}
