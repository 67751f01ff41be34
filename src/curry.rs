use crate::Function;

/// Argument tuples whose functions can be curried.
///
/// The curried form of a function over `(A, B, C)` is a function over `(A,)`
/// returning a function over `(B,)` returning a function over `(C,)`, which
/// finally runs the original function. Functions of zero or one argument are
/// their own curried form.
pub trait Curry<Out, E>: Sized {
    /// The chain of single-argument functions.
    type Curried;

    /// Curry a function.
    fn curry(func: Function<Self, Out, E>) -> Self::Curried;
}

impl<Out, E> Curry<Out, E> for () {
    type Curried = Function<(), Out, E>;

    fn curry(func: Function<Self, Out, E>) -> Self::Curried {
        func
    }
}

impl<A, Out, E> Curry<Out, E> for (A,) {
    type Curried = Function<(A,), Out, E>;

    fn curry(func: Function<Self, Out, E>) -> Self::Curried {
        func
    }
}

macro_rules! curry {
    ($head:ident $($tail:ident)+) => {
        impl<Out, E, $head, $($tail),+> Curry<Out, E> for ($head, $($tail,)+)
        where
            Out: 'static,
            E: 'static,
            $head: Clone + Send + Sync + 'static,
            $($tail: 'static,)+
            ($($tail,)+): Curry<Out, E>,
            <($($tail,)+) as Curry<Out, E>>::Curried: 'static,
        {
            type Curried = Function<($head,), <($($tail,)+) as Curry<Out, E>>::Curried, E>;

            fn curry(func: Function<Self, Out, E>) -> Self::Curried {
                Function::of(move |(head,): ($head,)| Ok(func.partial(head).curried()))
            }
        }
    };
}

curry! { A B }
curry! { A B C }
curry! { A B C D }
curry! { A B C D F }
curry! { A B C D F G }
curry! { A B C D F G H }
curry! { A B C D F G H I }
