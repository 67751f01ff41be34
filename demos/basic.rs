//! This example demonstrates memoized free functions and function values.

use memofn::{Function, memoize};

fn main() {
    empty(); // [Miss] The cache is empty.
    empty(); // [Hit] Always a hit from now on.
    empty(); // [Hit] Always a hit from now on.

    double(2); // [Miss] The cache is empty.
    double(4); // [Miss] Different number.
    double(2); // [Hit] Same number as initially.

    sum(2, 4); // [Miss] The cache is empty.
    sum(2, 3); // [Miss] Different numbers.
    sum(2, 3); // [Hit]  Same numbers
    sum(4, 2); // [Miss] Different numbers.

    // The same, but as a function value that can be curried and composed.
    let sum: Function<(u32, u32), u32> = Function::of(|(a, b): (u32, u32)| Ok(a + b));
    let memo = sum.memoized();
    let add_two = memo.curried().call((2,));
    println!("2 + 3 = {}", add_two.call((3,))); // [Miss]
    println!("2 + 3 = {}", memo.call((2, 3))); // [Hit]
}

/// Build a string.
#[memoize]
fn empty() -> String {
    format!("The world is {}", "big")
}

/// Double a number.
#[memoize]
fn double(x: u32) -> u32 {
    2 * x
}

/// Compute the sum of two numbers.
#[memoize]
fn sum(a: u32, b: u32) -> u32 {
    a + b
}
