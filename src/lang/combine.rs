//! N-ary combination of independent `Maybe` values.

use crate::lang::maybe::Maybe;

/// Tuples of `Maybe` values which can be combined into a single `Maybe` of a tuple.
///
/// Implemented for tuples of arity 1 through 9.
pub trait Combine {
    /// The mapper wrapping the combined tuple.
    type Mapper;

    fn combine(self) -> Self::Mapper;
}

/// Combine several independent `Maybe` values.
///
/// The result is present only if every input is present. Inputs are checked
/// left to right and the scan stops at the first empty one.
///
/// ```
/// use microroute::lang::{all, Maybe};
///
/// let sum = all((Maybe::present(1), Maybe::present(2))).map(|a, b| a + b);
/// assert_eq!(sum, Maybe::present(3));
/// ```
pub fn all<C: Combine>(ops: C) -> C::Mapper {
    ops.combine()
}

macro_rules! combine_impl {
    ($mapper:ident; $($t:ident $op:ident $v:ident),+) => {
        /// Combined tuple ready for further transformation with spread arguments.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $mapper<$($t),+>(Maybe<($($t,)+)>);

        impl<$($t),+> $mapper<$($t),+> {
            /// The combined tuple.
            pub fn id(self) -> Maybe<($($t,)+)> {
                self.0
            }

            pub fn map<R>(self, mapper: impl FnOnce($($t),+) -> R) -> Maybe<R> {
                self.0.map(|($($v,)+)| mapper($($v),+))
            }

            pub fn flat_map<R>(self, mapper: impl FnOnce($($t),+) -> Maybe<R>) -> Maybe<R> {
                self.0.flat_map(|($($v,)+)| mapper($($v),+))
            }
        }

        impl<$($t),+> Combine for ($(Maybe<$t>,)+) {
            type Mapper = $mapper<$($t),+>;

            fn combine(self) -> Self::Mapper {
                let ($($op,)+) = self;
                $(
                    let $v = match $op {
                        Maybe::Present(value) => value,
                        Maybe::Absent => return $mapper(Maybe::Absent),
                    };
                )+
                $mapper(Maybe::Present(($($v,)+)))
            }
        }
    };
}

combine_impl!(Mapper1; T1 op1 v1);
combine_impl!(Mapper2; T1 op1 v1, T2 op2 v2);
combine_impl!(Mapper3; T1 op1 v1, T2 op2 v2, T3 op3 v3);
combine_impl!(Mapper4; T1 op1 v1, T2 op2 v2, T3 op3 v3, T4 op4 v4);
combine_impl!(Mapper5; T1 op1 v1, T2 op2 v2, T3 op3 v3, T4 op4 v4, T5 op5 v5);
combine_impl!(Mapper6; T1 op1 v1, T2 op2 v2, T3 op3 v3, T4 op4 v4, T5 op5 v5, T6 op6 v6);
combine_impl!(Mapper7; T1 op1 v1, T2 op2 v2, T3 op3 v3, T4 op4 v4, T5 op5 v5, T6 op6 v6, T7 op7 v7);
combine_impl!(Mapper8; T1 op1 v1, T2 op2 v2, T3 op3 v3, T4 op4 v4, T5 op5 v5, T6 op6 v6, T7 op7 v7, T8 op8 v8);
combine_impl!(
    Mapper9;
    T1 op1 v1, T2 op2 v2, T3 op3 v3, T4 op4 v4, T5 op5 v5, T6 op6 v6, T7 op7 v7, T8 op8 v8, T9 op9 v9
);

/// Lazily combine `Maybe` expressions into a `Maybe` of a tuple.
///
/// Expressions are evaluated in order; once one yields `Absent` the remaining
/// ones are never evaluated.
///
/// ```
/// use microroute::{all, lang::Maybe};
///
/// let pair = all!(Maybe::present("a"), Maybe::present(1));
/// assert_eq!(pair, Maybe::present(("a", 1)));
///
/// let none = all!(Maybe::<i32>::empty(), Maybe::present(2));
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! all {
    ($($op:expr),+ $(,)?) => {
        'all: {
            $crate::lang::Maybe::Present((
                $(
                    match $op {
                        $crate::lang::Maybe::Present(value) => value,
                        $crate::lang::Maybe::Absent => break 'all $crate::lang::Maybe::Absent,
                    },
                )+
            ))
        }
    };
}
