use std::hash::Hash;

use crate::Function;
use crate::args::Arguments;

#[cfg(feature = "testing")]
pub use crate::testing::last_was_hit;

/// Ensure a type is suitable as an argument of a memoized function.
pub fn assert_argument<T: Hash + Eq + Clone + Send + Sync + 'static>() {}

/// Ensure a type is suitable as the output of a memoized function.
pub fn assert_output<T: Clone + Send + Sync + 'static>() {}

/// Create the memoized function value backing a `#[memoize]` function.
pub fn memoized<Args, Out, F>(func: F) -> Function<Args, Out>
where
    Args: Arguments + Hash + Eq + Clone + Send + Sync + 'static,
    Out: Clone + Send + Sync + 'static,
    F: Fn(Args) -> Out + Send + Sync + 'static,
{
    Function::<Args, Out>::of(move |args: Args| Ok(func(args))).memoized()
}
