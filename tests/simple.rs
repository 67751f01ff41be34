use std::sync::atomic::{AtomicUsize, Ordering};

use memofn::memoize;

static CALLS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn test_simple() {
    assert_eq!(empty(), "The world is big"); // [Miss] The cache is empty.
    assert_eq!(empty(), "The world is big"); // [Hit] Always a hit from now on.
    assert_eq!(empty(), "The world is big"); // [Hit] Always a hit from now on.

    assert_eq!(double(2), 4); // [Miss] The cache is empty.
    assert_eq!(double(4), 8); // [Miss] Different number.
    assert_eq!(double(2), 4); // [Hit] Same number as initially.

    assert_eq!(sum(2, 4), 6); // [Miss] The cache is empty.
    assert_eq!(sum(2, 3), 5); // [Miss] Different numbers.
    assert_eq!(sum(2, 3), 5); // [Hit]  Same numbers
    assert_eq!(sum(4, 2), 6); // [Miss] Different numbers.

    assert_eq!(CALLS.load(Ordering::SeqCst), 6);
}

/// Build a string.
#[memoize]
fn empty() -> String {
    CALLS.fetch_add(1, Ordering::SeqCst);
    format!("The world is {}", "big")
}

/// Double a number.
#[memoize]
fn double(x: u32) -> u32 {
    CALLS.fetch_add(1, Ordering::SeqCst);
    2 * x
}

/// Compute the sum of two numbers.
#[memoize]
fn sum(a: u32, b: u32) -> u32 {
    CALLS.fetch_add(1, Ordering::SeqCst);
    a + b
}
