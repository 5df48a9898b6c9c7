//! The `Maybe` sum type and its inherent combinators.

use serde::{Deserialize, Serialize};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// Absence is a variant, not an error and not a null sentinel. Combinators
/// consume `self` and return a new `Maybe`; the payload is never mutated in
/// place.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Maybe<T> {
    /// Exactly one value.
    Just(T),
    /// No value.
    Nothing,
}

use self::Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    /// Convert the ambient nullable (`Option`) into the explicit sum type:
    /// `None` becomes `Nothing`, `Some(v)` becomes `Just(v)`.
    ///
    /// This is the single boundary where nullability enters the type; `Just`
    /// itself never inspects its payload, so `Just(None)` and nested
    /// `Maybe`s stay as written and nothing auto-flattens.
    pub fn of(value: Option<T>) -> Maybe<T> {
        match value {
            Some(v) => Just(v),
            None => Nothing,
        }
    }

    /// True iff the value is present.
    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// True iff the value is absent. Exact negation of [`Maybe::is_just`].
    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Borrowing view: `&Maybe<T>` as `Maybe<&T>`, so the combinators can be
    /// used without consuming the original.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(v) => Just(v),
            Nothing => Nothing,
        }
    }

    /// Apply `f` to a present value; pass `Nothing` through untouched.
    /// `f` is not invoked on the absent side, and anything it panics with
    /// propagates to the caller unmodified.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Just(v) => Just(f(v)),
            Nothing => Nothing,
        }
    }

    /// Monadic bind: sequence a computation that may itself come up empty.
    /// `Nothing` short-circuits without invoking `f`; `Just(v)` returns
    /// `f(v)` directly, with no re-wrapping, so a chain stops at the first
    /// absent link.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Just(v) => f(v),
            Nothing => Nothing,
        }
    }

    /// Applicative application of a possibly-absent function to a
    /// possibly-absent argument. Either side being `Nothing` yields
    /// `Nothing`. The function side is checked first; both operands are
    /// already-evaluated values, so the order carries no side-effect
    /// guarantee.
    pub fn ap<U, F>(self, f: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match f {
            Just(f) => self.map(f),
            Nothing => Nothing,
        }
    }

    /// Unwrap with a fallback: the payload of `Just`, or `default` for
    /// `Nothing`. The only wrapper-removing operation, and it never requires
    /// the caller to branch.
    pub fn with_default(self, default: T) -> T {
        match self {
            Just(v) => v,
            Nothing => default,
        }
    }
}

// `Nothing` regardless of `T`; the derive would demand `T: Default`.
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(m: Maybe<T>) -> Self {
        match m {
            Just(v) => Some(v),
            Nothing => None,
        }
    }
}
