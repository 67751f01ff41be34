use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::sync::Arc;

use log::debug;

use crate::args::{Arguments, Split};
use crate::cache::Cache;
use crate::curry::Curry;

/// The type-erased callable behind a function value.
type Callable<Args, Out, E> = dyn Fn(Args) -> Result<Out, E> + Send + Sync;

/// A function value taking the argument tuple `Args` and producing an `Out`
/// or failing with an `E`.
///
/// With the default `E = Infallible` the function cannot fail and
/// [`call`](Self::call) returns the output directly.
///
/// Function values are cheap handles: cloning shares the underlying callable
/// and, for memoized functions, its cache.
///
/// ```
/// use memofn::Function;
///
/// let sum: Function<(u32, u32), u32> = Function::of(|(a, b): (u32, u32)| Ok(a + b));
/// assert_eq!(sum.arity(), 2);
/// assert_eq!(sum.call((2, 3)), 5);
/// assert_eq!(sum.partial(2).call((3,)), 5);
/// ```
pub struct Function<Args, Out, E = Infallible>(Arc<Repr<Args, Out, E>>);

/// The shared representation of a function value.
struct Repr<Args, Out, E> {
    /// What to execute when the function is applied.
    func: Box<Callable<Args, Out, E>>,
    /// Whether `func` consults a cache before doing any work.
    memoized: bool,
}

impl<Args, Out, E> Function<Args, Out, E>
where
    Args: Arguments + 'static,
    Out: 'static,
    E: 'static,
{
    /// Create a function value from a closure, function item or method.
    ///
    /// The closure receives all arguments as one tuple. A method can be
    /// turned into a function value by moving its receiver into the closure.
    pub fn of<F>(func: F) -> Self
    where
        F: Fn(Args) -> Result<Out, E> + Send + Sync + 'static,
    {
        Self(Arc::new(Repr { func: Box::new(func), memoized: false }))
    }

    /// Apply the function to a tuple of arguments.
    #[inline]
    pub fn apply(&self, args: Args) -> Result<Out, E> {
        (self.0.func)(args)
    }

    /// The number of arguments the function takes.
    pub fn arity(&self) -> usize {
        Args::ARITY
    }

    /// Whether this function value caches its results.
    pub fn is_memoized(&self) -> bool {
        self.0.memoized
    }

    /// Whether two function values are the same instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Return a function value that computes each distinct tuple of
    /// arguments at most once and replays the result afterwards.
    ///
    /// Memoizing an already memoized function returns the very same
    /// instance. Otherwise, the result has its own, initially empty cache.
    ///
    /// Only successful results are cached: a failing call is executed again
    /// the next time it is made.
    pub fn memoized(&self) -> Self
    where
        Args: Hash + Eq + Clone + Send + Sync,
        Out: Clone + Send + Sync,
    {
        if self.is_memoized() {
            return self.clone();
        }

        debug!("memoizing {}-ary function", Args::ARITY);

        let inner = self.clone();
        let cache = Cache::<Args, Out>::new();
        Self(Arc::new(Repr {
            func: Box::new(move |args: Args| cache.memoize(args, |args| inner.apply(args))),
            memoized: true,
        }))
    }

    /// Transform the function into a chain of single-argument functions.
    ///
    /// Every stage but the last returns the next stage. Applying the last
    /// stage runs the original function with all collected arguments.
    pub fn curried(&self) -> <Args as Curry<Out, E>>::Curried
    where
        Args: Curry<Out, E>,
    {
        Args::curry(self.clone())
    }

    /// Transform the function into one that takes all arguments as a single
    /// tuple.
    pub fn tupled(&self) -> Function<(Args,), Out, E> {
        let func = self.clone();
        Function::of(move |(args,): (Args,)| func.apply(args))
    }

    /// Transform the function into one that takes its arguments in reverse
    /// order.
    pub fn reversed(&self) -> Function<Args::Reversed, Out, E> {
        let func = self.clone();
        Function::of(move |args: Args::Reversed| func.apply(args.reverse()))
    }

    /// Fix the first argument, returning a function of the remaining ones.
    pub fn partial(&self, head: Args::Head) -> Function<Args::Tail, Out, E>
    where
        Args: Split,
        Args::Head: Clone + Send + Sync + 'static,
        Args::Tail: 'static,
    {
        let func = self.clone();
        Function::of(move |tail: Args::Tail| func.apply(Args::join(head.clone(), tail)))
    }

    /// Feed the output of this function into `after`.
    ///
    /// If this function fails, `after` is not executed and the failure is
    /// returned as is.
    pub fn and_then<Next>(&self, after: &Function<(Out,), Next, E>) -> Function<Args, Next, E>
    where
        Next: 'static,
    {
        let (before, after) = (self.clone(), after.clone());
        Function::of(move |args: Args| after.apply((before.apply(args)?,)))
    }
}

impl<A, Out, E> Function<(A,), Out, E>
where
    A: 'static,
    Out: 'static,
    E: 'static,
{
    /// Feed the output of `before` into this function.
    pub fn compose<V>(&self, before: &Function<(V,), A, E>) -> Function<(V,), Out, E>
    where
        V: 'static,
    {
        before.and_then(self)
    }
}

impl<T, E> Function<(T,), T, E>
where
    T: 'static,
    E: 'static,
{
    /// The function that returns its argument.
    pub fn identity() -> Self {
        Self::of(|(value,): (T,)| Ok(value))
    }
}

impl<Args, Out> Function<Args, Out>
where
    Args: Arguments + 'static,
    Out: 'static,
{
    /// Apply a function that cannot fail.
    #[inline]
    pub fn call(&self, args: Args) -> Out {
        match self.apply(args) {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }
}

impl<Args, Out> Function<Args, Option<Out>>
where
    Args: Arguments + 'static,
    Out: 'static,
{
    /// Turn a fallible function into one that returns `None` instead of
    /// failing.
    pub fn lift<E>(partial: &Function<Args, Out, E>) -> Self
    where
        E: 'static,
    {
        let partial = partial.clone();
        Self::of(move |args: Args| Ok(partial.apply(args).ok()))
    }
}

impl<Args, Out, E> Clone for Function<Args, Out, E> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<Args: Arguments, Out, E> Debug for Function<Args, Out, E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("arity", &Args::ARITY)
            .field("memoized", &self.0.memoized)
            .finish()
    }
}
