//! Trailing arguments of the emit operations

use std::fmt;

/// What an emit call does after printing
///
/// An async callable is just a `Callable` whose `T` is a future: invoking
/// it hands back the un-polled future and nothing awaits it.
pub enum Continuation<'a, T> {
    /// Invoked exactly once, before the emit call returns
    Callable(Box<dyn FnOnce() -> T + 'a>),
    /// Handed back unchanged
    Value(T),
    Absent,
}

impl<'a, T> Continuation<'a, T> {
    pub fn call<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Continuation::Callable(Box::new(f))
    }

    pub fn value(value: T) -> Self {
        Continuation::Value(value)
    }

    /// Resolve as a trailing callback: a callable runs and its result is
    /// dropped, a value is returned.
    pub fn resolve(self) -> Option<T> {
        match self {
            Continuation::Callable(f) => {
                let _ = f();
                None
            }
            Continuation::Value(value) => Some(value),
            Continuation::Absent => None,
        }
    }

    /// Resolve as a data argument: a callable runs and its result is
    /// returned.
    pub fn take(self) -> Option<T> {
        match self {
            Continuation::Callable(f) => Some(f()),
            Continuation::Value(value) => Some(value),
            Continuation::Absent => None,
        }
    }
}

impl Continuation<'static, ()> {
    /// Absent continuation for calls whose result is ignored
    pub fn none() -> Self {
        Continuation::Absent
    }
}

impl<T> Default for Continuation<'_, T> {
    fn default() -> Self {
        Continuation::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Continuation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Continuation::Callable(_) => f.write_str("Callable(..)"),
            Continuation::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Continuation::Absent => f.write_str("Absent"),
        }
    }
}
