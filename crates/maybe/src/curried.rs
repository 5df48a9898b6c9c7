//! Curried forms of the combinators.
//!
//! Each function here takes only its first logical argument and returns a
//! reusable transformer awaiting the `Maybe` subject, so call sites can
//! build a specialized `Maybe<A> -> Maybe<B>` once and apply it many times.
//! The direct two-argument application is the inherent method on [`Maybe`].

use crate::types::Maybe;

/// Curried [`Maybe::map`]: `map(f)` is a reusable
/// `Maybe<T> -> Maybe<U>` transformer.
pub fn map<T, U, F>(f: F) -> impl Fn(Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> U,
{
    move |m| m.map(&f)
}

/// Curried [`Maybe::and_then`]: `and_then(f)` is a reusable
/// `Maybe<T> -> Maybe<U>` transformer that short-circuits on `Nothing`.
pub fn and_then<T, U, F>(f: F) -> impl Fn(Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> Maybe<U>,
{
    move |m| m.and_then(&f)
}

/// Curried [`Maybe::ap`]: `ap(mf)` is a reusable transformer applying a
/// possibly-absent function. The captured function is cloned per
/// application, which is what keeps the transformer reusable.
pub fn ap<T, U, F>(mf: Maybe<F>) -> impl Fn(Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> U + Clone,
{
    move |m| m.ap(mf.clone())
}

/// Curried [`Maybe::with_default`]: `with_default(d)` is a reusable
/// `Maybe<T> -> T` unwrapper. The default is cloned per application.
pub fn with_default<T>(default: T) -> impl Fn(Maybe<T>) -> T
where
    T: Clone,
{
    move |m| m.with_default(default.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Maybe::{Just, Nothing};

    #[test]
    fn partially_applied_map_is_reusable() {
        let double = map(|x: i32| x * 2);
        assert_eq!(double(Just(21)), Just(42));
        assert_eq!(double(Nothing), Nothing);
        assert_eq!(double(Just(4)), Just(8));
    }

    #[test]
    fn partially_applied_and_then_is_reusable() {
        let positive = and_then(|x: i64| if x > 0 { Just(x) } else { Nothing });
        assert_eq!(positive(Just(3)), Just(3));
        assert_eq!(positive(Just(-3)), Nothing);
        assert_eq!(positive(Nothing), Nothing);
    }

    #[test]
    fn partially_applied_ap_is_reusable() {
        let apply_inc = ap(Just(|x: i32| x + 1));
        assert_eq!(apply_inc(Just(5)), Just(6));
        assert_eq!(apply_inc(Just(9)), Just(10));
        assert_eq!(apply_inc(Nothing), Nothing);

        let apply_absent = ap::<i32, i32, fn(i32) -> i32>(Nothing);
        assert_eq!(apply_absent(Just(5)), Nothing);
    }

    #[test]
    fn partially_applied_with_default_is_reusable() {
        let or_empty = with_default(String::new());
        assert_eq!(or_empty(Just(String::from("x"))), "x");
        assert_eq!(or_empty(Nothing), "");
    }

    #[test]
    fn curried_and_direct_applications_agree() {
        let f = |x: i32| x + 10;
        let curried = map(f);
        for m in [Just(1), Nothing] {
            assert_eq!(curried(m), m.map(f));
        }
    }
}
