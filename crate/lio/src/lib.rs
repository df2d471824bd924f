#![doc = include_str!("../doc/crate.md")]

use std::io;

mod buffer;
pub mod copy;
pub mod error;
pub mod generator;
pub mod hash;
mod limit;
mod strategy;
pub mod stream;
pub mod tap;

pub use {
    buffer::Buffer,
    error::StreamError,
    limit::{
        Limit,
        LimitExt,
    },
    strategy::{
        CopyStrategy,
        SClone,
        SCopy,
    },
};

pub type IO<T = usize> = io::Result<T>;

/// Something that can fill a caller supplied slice.
///
/// `Ok(n)` is the number of items placed at the front of `into`. `Ok(0)`
/// for a non-empty `into` is final: the source has nothing more to give.
pub trait Source<T> {
    fn source(&mut self, into: &mut [T]) -> IO;
}

/// Something that can accept items from a caller supplied slice.
///
/// `Ok(n)` is the number of items taken from the front of `from`.
pub trait Sink<T> {
    fn sink(&mut self, from: &[T]) -> IO;
}
