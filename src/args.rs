/// A tuple of arguments to a function value.
///
/// This is implemented for `()` and tuples up to length eight. The tuple is
/// the unit of everything a [`Function`](crate::Function) does: it is
/// applied as a whole, hashed as a whole for memoization and reversed as a
/// whole.
pub trait Arguments: Sized {
    /// The number of arguments.
    const ARITY: usize;

    /// The same arguments in reverse order.
    type Reversed: Arguments<Reversed = Self>;

    /// Reverse the order of the arguments.
    fn reverse(self) -> Self::Reversed;
}

/// A non-empty tuple of arguments that can be split into its first element
/// and the rest.
pub trait Split: Arguments {
    /// The first argument.
    type Head;

    /// The remaining arguments.
    type Tail: Arguments;

    /// Split off the first argument.
    fn split(self) -> (Self::Head, Self::Tail);

    /// Put the first argument back in front of the rest.
    fn join(head: Self::Head, tail: Self::Tail) -> Self;
}

impl Arguments for () {
    const ARITY: usize = 0;

    type Reversed = ();

    fn reverse(self) {}
}

macro_rules! arguments {
    ($arity:literal: $head:ident $($tail:ident)* => $($rev:ident)+) => {
        #[allow(non_snake_case)]
        impl<$head, $($tail),*> Arguments for ($head, $($tail,)*) {
            const ARITY: usize = $arity;

            type Reversed = ($($rev,)+);

            fn reverse(self) -> Self::Reversed {
                let ($head, $($tail,)*) = self;
                ($($rev,)+)
            }
        }

        #[allow(non_snake_case)]
        impl<$head, $($tail),*> Split for ($head, $($tail,)*) {
            type Head = $head;
            type Tail = ($($tail,)*);

            fn split(self) -> (Self::Head, Self::Tail) {
                let ($head, $($tail,)*) = self;
                ($head, ($($tail,)*))
            }

            fn join(head: Self::Head, tail: Self::Tail) -> Self {
                let ($($tail,)*) = tail;
                (head, $($tail,)*)
            }
        }
    };
}

arguments! { 1: A => A }
arguments! { 2: A B => B A }
arguments! { 3: A B C => C B A }
arguments! { 4: A B C D => D C B A }
arguments! { 5: A B C D E => E D C B A }
arguments! { 6: A B C D E F => F E D C B A }
arguments! { 7: A B C D E F G => G F E D C B A }
arguments! { 8: A B C D E F G H => H G F E D C B A }
