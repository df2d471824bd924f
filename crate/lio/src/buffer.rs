use {
    crate::{
        tap::Tap,
        CopyStrategy,
        SClone,
        SCopy,
        Sink,
        Source,
        IO,
    },
    log::trace,
    std::{
        cmp::min,
        marker::PhantomData,
        ops::Range,
    },
};

/// Fixed storage with a readable window `span`.
///
/// Items enter at `span.end` and leave at `span.start`. `C` picks how items
/// are moved, see [`SCopy`] and [`SClone`].
pub struct Buffer<D, T, C> {
    data: D,
    span: Range<usize>,
    _item_evidence: PhantomData<T>,
    _copy_strategy: PhantomData<C>,
}

impl<D, T, C> Buffer<D, T, C> {
    fn new(data: D) -> Self {
        Self {
            data,
            span: 0..0,
            _item_evidence: PhantomData,
            _copy_strategy: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        self.span = 0..0;
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }
}

impl<D, T: Copy> Buffer<D, T, SCopy> {
    pub fn from_copy(data: D) -> Self {
        Self::new(data)
    }
}

impl<D, T: Clone> Buffer<D, T, SClone> {
    pub fn from_clone(data: D) -> Self {
        Self::new(data)
    }
}

impl<D, T, C> Buffer<D, T, C>
where
    D: AsRef<[T]>,
{
    /// Marks the whole storage as readable.
    pub fn as_source(mut self) -> Self {
        self.span = 0..self.data.as_ref().len();
        self
    }

    pub fn as_read(&self) -> &[T] {
        let Self { data, span, .. } = self;
        &data.as_ref()[span.clone()]
    }

    pub fn is_full(&self) -> bool {
        self.span.end == self.data.as_ref().len()
    }

    /// Drains the readable window into `into`.
    pub fn write(&mut self, mut into: impl Sink<T>) -> IO {
        into.sink(self.as_read()).tap_ok(|n| self.span.start += n)
    }
}

impl<D, T, C> Buffer<D, T, C>
where
    D: AsMut<[T]>,
{
    pub fn as_write(&mut self) -> &mut [T] {
        let Self {
            data,
            span: Range { end, .. },
            ..
        } = self;
        &mut data.as_mut()[*end..]
    }

    /// Fills the free tail from `from`.
    pub fn read(&mut self, mut from: impl Source<T>) -> IO {
        from.source(self.as_write()).tap_ok(|n| self.span.end += n)
    }
}

impl<C: CopyStrategy<T>, D, T> Buffer<D, T, C> {
    fn copy_slice(dest: &mut [T], src: &[T]) -> usize {
        let n = min(dest.len(), src.len());
        C::copy_slice(&mut dest[..n], &src[..n]);
        n
    }
}

impl<C: CopyStrategy<T>, D, T> Buffer<D, T, C>
where
    D: AsRef<[T]>,
{
    pub fn copy_into(&mut self, into: &mut [T]) -> IO {
        let n = Self::copy_slice(into, self.as_read());
        self.span.start += n;
        Ok(n)
    }
}

impl<C: CopyStrategy<T>, D, T> Buffer<D, T, C>
where
    D: AsMut<[T]>,
{
    pub fn copy_from(&mut self, from: &[T]) -> IO {
        let n = Self::copy_slice(self.as_write(), from);
        self.span.end += n;
        Ok(n)
    }

    pub fn compact(&mut self) {
        let Self {
            span: Range { start, end },
            data,
            ..
        } = self;
        C::compact_within(data.as_mut(), *start..*end);
        *end -= *start;
        *start = 0;
    }
}

impl<C: CopyStrategy<T>, D, T> Buffer<D, T, C>
where
    D: AsMut<[T]> + AsRef<[T]>,
{
    /// Moves items from `source` to `sink` through this buffer.
    ///
    /// Stops once the source has ended and the buffer cannot make progress
    /// into the sink. Items the sink refused stay in the buffer. Returns the
    /// number of items written to the sink.
    pub fn transfuse(&mut self, mut source: impl Source<T>, mut sink: impl Sink<T>) -> IO {
        let mut source_done = false;
        let mut total = 0;

        loop {
            self.compact();

            // A source is not read again after it has returned Ok(0) into
            // free space.
            let read = if source_done || self.is_full() {
                0
            } else {
                let read = self.read(&mut source)?;
                source_done = read == 0;
                read
            };
            let write = self.write(&mut sink)?;
            total += write;

            trace!("transfuse: read {read}, wrote {write}, total {total}");

            if read == 0 && write == 0 {
                break Ok(total);
            }
        }
    }
}

impl<C: CopyStrategy<T>, D, T> Source<T> for Buffer<D, T, C>
where
    D: AsRef<[T]>,
{
    fn source(&mut self, into: &mut [T]) -> IO {
        self.copy_into(into)
    }
}

impl<C: CopyStrategy<T>, D, T> Sink<T> for Buffer<D, T, C>
where
    D: AsMut<[T]>,
{
    fn sink(&mut self, from: &[T]) -> IO {
        self.copy_from(from)
    }
}
