//! Adapters between [`Source`]/[`Sink`] and the things that already move data.

use {
    crate::{
        Sink,
        Source,
        IO,
    },
    std::{
        cmp::min,
        io,
    },
};

impl<'a, S: Source<T> + ?Sized, T> Source<T> for &'a mut S {
    fn source(&mut self, into: &mut [T]) -> IO {
        <S as Source<T>>::source(self, into)
    }
}

impl<'a, S: Sink<T> + ?Sized, T> Sink<T> for &'a mut S {
    fn sink(&mut self, from: &[T]) -> IO {
        <S as Sink<T>>::sink(self, from)
    }
}

/// A byte source over any [`io::Read`].
pub struct Read<R: io::Read>(pub R);

impl<R: io::Read> Source<u8> for Read<R> {
    fn source(&mut self, into: &mut [u8]) -> IO {
        self.0.read(into)
    }
}

/// A byte sink over any [`io::Write`].
pub struct Write<W: io::Write>(pub W);

impl<W: io::Write> Sink<u8> for Write<W> {
    fn sink(&mut self, from: &[u8]) -> IO {
        self.0.write(from)
    }
}

/// A source made from a closure.
pub struct Delegate<F>(pub F);

impl<F, T> Source<T> for Delegate<F>
where
    F: FnMut(&mut [T]) -> IO,
{
    fn source(&mut self, into: &mut [T]) -> IO {
        (self.0)(into)
    }
}

fn sink_into_slice<T: Clone>(source: &[T], sink: &mut [T]) -> usize {
    let n = min(source.len(), sink.len());
    sink[..n].clone_from_slice(&source[..n]);
    n
}

/// Reading consumes the front of the slice.
impl<'a, T: Clone> Source<T> for &'a [T] {
    fn source(&mut self, into: &mut [T]) -> IO {
        let rest: &'a [T] = *self;
        let n = sink_into_slice(rest, into);
        *self = &rest[n..];
        Ok(n)
    }
}

impl<T: Clone> Sink<T> for Vec<T> {
    fn sink(&mut self, from: &[T]) -> IO {
        self.extend_from_slice(from);
        Ok(from.len())
    }
}
