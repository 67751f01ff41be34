use std::hash::Hash;

use log::trace;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::args::Arguments;
use crate::hash::hash;

/// The cache of a single memoized function value.
///
/// Entries are bucketed by the 128-bit hash of their argument tuple. Within
/// a bucket, tuples are compared by equality, so a hash collision can never
/// return the result of a different call.
pub struct Cache<Args, Out> {
    map: RwLock<FxHashMap<u128, Vec<Entry<Args, Out>>>>,
}

/// A memoized result.
struct Entry<Args, Out> {
    /// The arguments the function was called with.
    args: Args,
    /// The function's successful output.
    output: Out,
}

impl<Args, Out> Cache<Args, Out>
where
    Args: Arguments + Hash + Eq + Clone,
    Out: Clone,
{
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { map: RwLock::new(FxHashMap::default()) }
    }

    /// Executes a function, trying to use a cached result for it.
    ///
    /// Only successful outputs are stored. A failure is returned as is and
    /// the next call with the same arguments executes the function again.
    pub fn memoize<E, F>(&self, args: Args, func: F) -> Result<Out, E>
    where
        F: FnOnce(Args) -> Result<Out, E>,
    {
        let key = hash(&args);

        // Check if there is a cached output.
        if let Some(output) = self.lookup(key, &args) {
            trace!("hit for {}-ary call {key:032x}", Args::ARITY);

            #[cfg(feature = "testing")]
            crate::testing::register_hit();

            return Ok(output);
        }

        // No lock is held here, so the function may call back into the
        // same cache.
        let result = func(args.clone());

        match &result {
            Ok(output) => {
                trace!("miss for {}-ary call {key:032x}", Args::ARITY);
                self.insert(key, args, output.clone());
            }
            Err(_) => {
                trace!("failed {}-ary call {key:032x}, not cached", Args::ARITY);
            }
        }

        #[cfg(feature = "testing")]
        crate::testing::register_miss();

        result
    }

    /// Look for a matching entry in the cache.
    fn lookup(&self, key: u128, args: &Args) -> Option<Out> {
        self.map
            .read()
            .get(&key)?
            .iter()
            .find(|entry| entry.args == *args)
            .map(|entry| entry.output.clone())
    }

    /// Insert an entry into the cache.
    fn insert(&self, key: u128, args: Args, output: Out) {
        let mut map = self.map.write();
        let bucket = map.entry(key).or_default();

        // A reentrant or concurrent call with the same arguments may have
        // inserted a value in the meantime. The first one stays.
        if bucket.iter().all(|entry| entry.args != args) {
            bucket.push(Entry { args, output });
        }
    }

    /// The number of memoized results.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.map.read().values().map(Vec::len).sum()
    }
}

impl<Args, Out> Default for Cache<Args, Out>
where
    Args: Arguments + Hash + Eq + Clone,
    Out: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_hit_and_miss() {
        let cache = Cache::<(u32, u32), u32>::new();
        let calls = Cell::new(0);
        let sum = |(a, b): (u32, u32)| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(a + b)
        };

        assert_eq!(cache.memoize((1, 2), sum), Ok(3));
        assert_eq!(cache.memoize((1, 2), sum), Ok(3));
        assert_eq!(cache.memoize((2, 1), sum), Ok(3));
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_none_is_a_value() {
        let cache = Cache::<(Option<u8>,), Option<u8>>::new();
        let calls = Cell::new(0);
        let none = |_| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(None)
        };

        assert_eq!(cache.memoize((None,), none), Ok(None));
        assert_eq!(cache.memoize((None,), none), Ok(None));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let cache = Cache::<(), u8>::new();
        let calls = Cell::new(0);
        let fail = |()| {
            calls.set(calls.get() + 1);
            Err::<u8, _>("boom")
        };

        assert_eq!(cache.memoize((), fail), Err("boom"));
        assert_eq!(cache.memoize((), fail), Err("boom"));
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.memoize((), |()| Ok::<_, &str>(7)), Ok(7));
        assert_eq!(cache.memoize((), fail), Ok(7));
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = Cache::<(u8,), &str>::new();
        let key = hash(&(1u8,));
        cache.insert(key, (1,), "first");
        cache.insert(key, (1,), "second");
        assert_eq!(cache.lookup(key, &(1,)), Some("first"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_colliding_keys_stay_apart() {
        let cache = Cache::<(u8,), u8>::new();
        cache.insert(0, (1,), 10);
        cache.insert(0, (2,), 20);
        assert_eq!(cache.lookup(0, &(1,)), Some(10));
        assert_eq!(cache.lookup(0, &(2,)), Some(20));
        assert_eq!(cache.lookup(0, &(3,)), None);
    }
}
