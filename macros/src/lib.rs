extern crate proc_macro;

macro_rules! bail {
    ($item:expr, $fmt:literal $($tts:tt)*) => {
        return Err(Error::new_spanned(
            &$item,
            format!(concat!("memofn: ", $fmt) $($tts)*)
        ))
    }
}

mod memoize;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Result, parse_quote};

/// Memoize a pure function.
///
/// The function computes its body at most once for every distinct
/// combination of arguments. Later calls with equal arguments return a clone
/// of the first result. Recursive calls go through the cache as well.
///
/// ```ignore
/// #[memofn::memoize]
/// fn fib(n: u64) -> u64 {
///     if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
/// }
///
/// assert_eq!(fib(90), 2880067194370816120);
/// ```
///
/// The arguments must be owned values that are `Hash + Eq + Clone + Send +
/// Sync`, and the output must be `Clone + Send + Sync`. Methods, generic
/// functions and functions with more than eight arguments are not supported.
#[proc_macro_attribute]
pub fn memoize(_: TokenStream, stream: TokenStream) -> TokenStream {
    let func = syn::parse_macro_input!(stream as syn::ItemFn);
    memoize::expand(func)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
