//! Function values of any arity with transparent memoization.
//!
//! A [`Function`] wraps a closure over a tuple of arguments. It knows its
//! arity and can be curried, tupled, reversed, partially applied and
//! composed. Calling [`memoized`](Function::memoized) turns it into a function
//! value that computes every distinct tuple of arguments only once.
//!
//! ```
//! use memofn::Function;
//!
//! let slow: Function<(u64, u32), u64> = Function::of(|(a, b): (u64, u32)| Ok(a.pow(b)));
//! let fast = slow.memoized();
//! assert_eq!(fast.call((2, 10)), 1024); // Computed.
//! assert_eq!(fast.call((2, 10)), 1024); // Replayed from the cache.
//! ```

mod args;
mod cache;
mod curry;
mod function;
mod hash;
#[cfg(feature = "testing")]
mod testing;

pub use crate::args::{Arguments, Split};
pub use crate::curry::Curry;
pub use crate::function::Function;

#[cfg(feature = "macros")]
pub use memofn_macros::memoize;

/// These are implementation details. Do not rely on them!
#[doc(hidden)]
pub mod internal;
