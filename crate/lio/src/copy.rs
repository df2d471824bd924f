//! Whole-stream helpers built on [`Buffer::transfuse`].

use {
    crate::{
        Buffer,
        Limit,
        Sink,
        Source,
        StreamError,
        IO,
    },
    log::debug,
};

/// Scratch size used when moving a stream through memory.
pub const DEFAULT_CHUNK: usize = 32 * 1024;

/// Copies `source` into `sink` until the source ends.
///
/// Returns the number of items written.
pub fn copy<T>(sink: impl Sink<T>, source: impl Source<T>) -> IO<u64>
where
    T: Copy + Default,
{
    copy_with_chunk(sink, source, DEFAULT_CHUNK)
}

/// Copies exactly `n` items, failing with [`StreamError::UnexpectedEnd`] if
/// the source ends first. Items copied before the failure stay in the sink.
pub fn copy_n<T>(sink: impl Sink<T>, source: impl Source<T>, n: u64) -> IO<u64>
where
    T: Copy + Default,
{
    let chunk = usize::try_from(n).map_or(DEFAULT_CHUNK, |n| n.min(DEFAULT_CHUNK));
    let written = copy_with_chunk(sink, Limit::new(source, n), chunk)?;

    if written < n {
        return Err(StreamError::UnexpectedEnd {
            read: written,
            expected: n,
        }
        .into());
    }
    Ok(written)
}

/// Collects everything `source` produces.
pub fn read_all<T>(source: impl Source<T>) -> IO<Vec<T>>
where
    T: Copy + Default,
{
    let mut items = Vec::new();
    copy(&mut items, source)?;
    Ok(items)
}

/// Reads into `buf` until at least `min` items are there.
///
/// Fails with [`StreamError::ShortBuffer`] without reading if `buf` cannot
/// hold `min` items, and with [`StreamError::UnexpectedEnd`] if the source
/// ends early. Returns the number of items read, which may exceed `min`.
pub fn read_at_least<T>(mut source: impl Source<T>, buf: &mut [T], min: usize) -> IO {
    if buf.len() < min {
        return Err(StreamError::ShortBuffer {
            min,
            len: buf.len(),
        }
        .into());
    }

    let mut read = 0;
    while read < min {
        match source.source(&mut buf[read..])? {
            0 => {
                return Err(StreamError::UnexpectedEnd {
                    read: read as u64,
                    expected: min as u64,
                }
                .into())
            }
            n => read += n,
        }
    }
    Ok(read)
}

fn copy_with_chunk<T>(mut sink: impl Sink<T>, mut source: impl Source<T>, chunk: usize) -> IO<u64>
where
    T: Copy + Default,
{
    let mut buffer = Buffer::from_copy(vec![T::default(); chunk.max(1)]);
    let written = buffer.transfuse(&mut source, &mut sink)? as u64;

    if !buffer.is_empty() {
        debug!("copy: sink stalled after {written} items");
        return Err(StreamError::SinkStalled {
            pending: buffer.len(),
        }
        .into());
    }
    Ok(written)
}
