use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Reads the focus out of a state
pub type Getter<S, A> = dyn Fn(&S) -> A + Send + Sync;

/// Builds a new state with the focus replaced
pub type Setter<S, A> = dyn Fn(A, &S) -> S + Send + Sync;

/// A getter/setter pair focusing on an `A` inside an immutable `S`.
///
/// A lens carries no data of its own. Cloning it only bumps two reference
/// counts, and the same lens can be used from any number of threads.
///
/// Well-behaved lenses satisfy the lens laws:
///
/// 1. `lens.view(&lens.set(a, &s)) == a`
/// 2. `lens.set(lens.view(&s), &s) == s`
/// 3. `lens.set(a2, &lens.set(a1, &s)) == lens.set(a2, &s)`
///
/// None of these are checked. Getting them right is up to whoever supplies
/// the getter and setter.
pub struct Lens<S, A> {
    label: Option<&'static str>,
    getter: Arc<Getter<S, A>>,
    setter: Arc<Setter<S, A>>,
}

impl<S, A> Lens<S, A> {
    /// Create a lens from a getter and a setter
    pub fn new<G, P>(getter: G, setter: P) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        P: Fn(A, &S) -> S + Send + Sync + 'static,
    {
        Self {
            label: None,
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    /// Create a lens with a label that shows up in `Debug` output and trace events
    pub fn labeled<G, P>(label: &'static str, getter: G, setter: P) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        P: Fn(A, &S) -> S + Send + Sync + 'static,
    {
        Self {
            label: Some(label),
            ..Self::new(getter, setter)
        }
    }

    /// The label given to [`Lens::labeled`], if any
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Read the focused value
    pub fn view(&self, state: &S) -> A {
        trace!(lens = self.label, "view");
        (self.getter)(state)
    }

    /// Return a new state with the focused value replaced by `value`
    ///
    /// `state` is only borrowed, so the caller's value is never touched.
    /// How much of it the result shares is decided by the setter.
    pub fn set(&self, value: A, state: &S) -> S {
        trace!(lens = self.label, "set");
        (self.setter)(value, state)
    }

    /// Read the focused value, transform it and write it back
    ///
    /// Same as `self.set(transform(self.view(state)), state)`. The state comes
    /// last, as it does for [`Lens::set`].
    pub fn over<F>(&self, transform: F, state: &S) -> S
    where
        F: FnOnce(A) -> A,
    {
        trace!(lens = self.label, "over");
        let focus = (self.getter)(state);
        (self.setter)(transform(focus), state)
    }

    /// Like [`Lens::over`] with a fallible transform
    ///
    /// An error from `transform` is handed back untouched and the setter is
    /// not called.
    pub fn try_over<F, E>(&self, transform: F, state: &S) -> Result<S, E>
    where
        F: FnOnce(A) -> Result<A, E>,
    {
        trace!(lens = self.label, "try_over");
        let focus = transform((self.getter)(state))?;
        Ok((self.setter)(focus, state))
    }
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<S, A> fmt::Debug for Lens<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "Lens({})", label),
            None => write!(
                f,
                "Lens<{}, {}>",
                std::any::type_name::<S>(),
                std::any::type_name::<A>()
            ),
        }
    }
}
