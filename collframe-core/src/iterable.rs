use crate::coll::Coll;
use crate::drain;
use crate::error::Result;
use crate::options::DrainOptions;
use tokio::sync::mpsc;

/// A collection that supports iterating over its elements.
///
/// Besides borrowing iteration, an iterable collection can be drained through
/// a bounded channel. Drains work on a snapshot taken when they are called:
/// the collection is free to change while the receiver is being consumed.
///
/// Drains fail only when no producer thread can be started at all, in which
/// case nothing has been sent.
pub trait IterableColl<T: PartialEq + Clone>: Coll<T> {
    /// Returns a single-pass iterator over the elements.
    ///
    /// Order is up to the implementor but is stable for one call.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns a channel that yields every element in iteration order and
    /// closes after the last one.
    ///
    /// A `buff_size` of zero is treated as one.
    fn ch(&self, buff_size: usize) -> Result<mpsc::Receiver<T>>
    where
        T: Send + 'static,
    {
        drain::drain_ordered(self.iter().cloned().collect(), buff_size)
    }

    /// Returns a channel fed by up to `workers` concurrent producers, each
    /// sending whole partitions of the elements.
    ///
    /// Every element is delivered exactly once and the channel closes after
    /// all producers are done, but elements from different partitions
    /// interleave in no particular order. The producer count is capped by
    /// [`drain::producer_count`].
    fn ch_parallel(&self, buff_size: usize, workers: usize) -> Result<mpsc::Receiver<T>>
    where
        T: Send + 'static,
    {
        drain::drain_parallel(self.iter().cloned().collect(), buff_size, workers)
    }

    /// Drains according to `options`: ordered for a single worker, fanned out
    /// otherwise.
    fn ch_with(&self, options: &DrainOptions) -> Result<mpsc::Receiver<T>>
    where
        T: Send + 'static,
    {
        if options.is_parallel() {
            self.ch_parallel(options.buffer_size, options.workers)
        } else {
            self.ch(options.buffer_size)
        }
    }
}
