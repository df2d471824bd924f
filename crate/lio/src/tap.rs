//! Side effects on a value without breaking a method chain.

use std::borrow::Borrow;

impl<S> Tap for S {}

pub trait Tap: Sized {
    fn tap_ok<T, E>(self, block: impl FnOnce(&T)) -> Self
    where
        Self: Borrow<Result<T, E>>,
    {
        if let Ok(t) = self.borrow() {
            block(t);
        }
        self
    }

    fn tap_err<T, E>(self, block: impl FnOnce(&E)) -> Self
    where
        Self: Borrow<Result<T, E>>,
    {
        if let Err(e) = self.borrow() {
            block(e);
        }
        self
    }
}
