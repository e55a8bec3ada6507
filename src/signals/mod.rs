//! Reactive signals - single-value observable containers.
//!
//! A [`Signal`] holds one current value and a list of subscribers:
//! - `get()` returns the current value (clone, no side effect)
//! - `set()` stores the value, then synchronously notifies every subscriber
//!   in subscription order
//! - `subscribe()` delivers the current value immediately, then every
//!   subsequent value
//!
//! Everything is single-threaded and push-based. There is no dependency
//! tracking, no batching, no scheduler: a `set` → notify → recompute chain
//! completes fully before `set` returns.
//!
//! # Example
//!
//! ```
//! use listing_form::signals::signal;
//!
//! let count = signal(0);
//! let doubled = signal(0);
//!
//! let doubled_clone = doubled.clone();
//! let sub = count.subscribe(move |v| doubled_clone.set(v * 2));
//!
//! count.set(21);
//! assert_eq!(doubled.get(), 42);
//!
//! sub.unsubscribe();
//! count.set(100);
//! assert_eq!(doubled.get(), 42);
//! ```

mod signal;

pub use signal::{signal, Signal, Subscription};
