//! Free-function forms of the lens operations.
//!
//! These mirror the methods on [`Lens`] with the argument order
//! `(lens, value or transform, state)`, which reads well when lenses are
//! passed around as plain values.

use crate::optic::Lens;

/// Build a lens from a getter and a setter
pub fn lens<S, A, G, P>(getter: G, setter: P) -> Lens<S, A>
where
    G: Fn(&S) -> A + Send + Sync + 'static,
    P: Fn(A, &S) -> S + Send + Sync + 'static,
{
    Lens::new(getter, setter)
}

/// Read the value `lens` focuses on in `state`
pub fn view<S, A>(lens: &Lens<S, A>, state: &S) -> A {
    lens.view(state)
}

/// Replace the value `lens` focuses on, returning the new state
pub fn set<S, A>(lens: &Lens<S, A>, value: A, state: &S) -> S {
    lens.set(value, state)
}

/// Apply `transform` to the focused value and write the result back
pub fn over<S, A, F>(lens: &Lens<S, A>, transform: F, state: &S) -> S
where
    F: FnOnce(A) -> A,
{
    lens.over(transform, state)
}

/// Apply a fallible `transform` to the focused value
///
/// The transform's error is returned as is.
pub fn try_over<S, A, E, F>(lens: &Lens<S, A>, transform: F, state: &S) -> Result<S, E>
where
    F: FnOnce(A) -> Result<A, E>,
{
    lens.try_over(transform, state)
}
