use {
    crate::{
        tap::Tap,
        Source,
        IO,
    },
    log::{
        debug,
        trace,
        warn,
    },
    std::io,
};

/// A source that gives out at most a fixed number of items of `S`.
///
/// Once `remaining` reaches zero every read returns `Ok(0)`, whatever `S`
/// could still produce. Errors from `S` are passed through untouched and do
/// not count against the limit.
///
/// Pass `&mut source` to keep ownership of the wrapped source.
#[derive(Debug)]
pub struct Limit<S> {
    source: S,
    remaining: u64,
}

impl<S> Limit<S> {
    pub fn new(source: S, n: u64) -> Self {
        Self {
            source,
            remaining: n,
        }
    }

    /// Items this source may still produce.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Replaces the remaining quota.
    pub fn set_limit(&mut self, n: u64) {
        self.remaining = n;
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Reading through this reference bypasses the limit.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Source<T>, T> Source<T> for Limit<S> {
    fn source(&mut self, into: &mut [T]) -> IO {
        if self.remaining == 0 {
            return Ok(0);
        }

        // Anything above usize::MAX is as good as unbounded for one slice.
        let effective = usize::try_from(self.remaining)
            .map_or(into.len(), |remaining| remaining.min(into.len()));

        self.source
            .source(&mut into[..effective])
            .map(|produced| {
                // A source cannot have written past the slice it was given.
                if produced > effective {
                    warn!("limit: source claimed {produced} items for a slice of {effective}");
                }
                produced.min(effective)
            })
            .tap_ok(|&produced: &usize| {
                self.remaining -= produced as u64;
                trace!(
                    "limit: requested {effective}, produced {produced}, remaining {}",
                    self.remaining
                );
                if self.remaining == 0 {
                    debug!("limit: quota spent");
                }
            })
            .tap_err(|e: &io::Error| {
                debug!("limit: source failed with {} left: {e}", self.remaining);
            })
    }
}

impl<S: Source<u8>> io::Read for Limit<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.source(buf)
    }
}

/// `source.limit(n)` for every [`Source`].
pub trait LimitExt<T>: Source<T> + Sized {
    fn limit(self, n: u64) -> Limit<Self> {
        Limit::new(self, n)
    }
}

impl<S: Source<T>, T> LimitExt<T> for S {}
