//! Capability traits for generic collections.
//!
//! This crate defines the root of the collection hierarchy:
//!
//! - [`Coll<T>`] — membership, equality, size and snapshot export
//! - [`ExtensibleColl<T>`] — insertion
//! - [`RemovableColl<T>`] — deletion
//! - [`MutableColl<T>`] — insertion and deletion together
//! - [`IterableColl<T>`] — lazy iteration and channel draining
//!
//! No concrete collection lives here. Implementors provide a handful of
//! primitives (`len`, `visit`, `add`, `remove`, `remove_if`, `iter`) and get
//! the wide operations (`contains_all`, `equals`, `add_all`, `retain_all`,
//! `ch_parallel`, ...) as provided methods, which they may override.
//!
//! Every trait is dyn-compatible, so "the other collection" arguments are
//! taken as `&dyn Coll<T>` and any implementor can be mixed with any other.

mod coll;
pub mod drain;
mod error;
mod extensible;
mod iterable;
mod mutable;
mod options;
mod removable;

pub use coll::Coll;
pub use error::{Error, Result};
pub use extensible::ExtensibleColl;
pub use iterable::IterableColl;
pub use mutable::MutableColl;
pub use options::{DEFAULT_BUFFER_SIZE, DrainOptions};
pub use removable::RemovableColl;

/// Receiving half of a drain channel.
pub use tokio::sync::mpsc::Receiver as DrainReceiver;
