//! An endless source of pseudo random bytes.

use {
    crate::{
        copy::copy_n,
        Buffer,
        SCopy,
        Sink,
        Source,
        IO,
    },
    fastrand::Rng,
};

const DRAW: usize = std::mem::size_of::<u64>();

/// Fills destinations with bytes from a seeded generator.
///
/// Every byte of every 64-bit draw is handed out exactly once, so the
/// produced stream depends on the seed only, not on how it is read.
pub struct RandomBytes {
    rng: Rng,
    spare: Buffer<[u8; DRAW], u8, SCopy>,
}

impl RandomBytes {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            spare: Buffer::from_copy([0; DRAW]),
        }
    }

    fn draw(&mut self) -> [u8; DRAW] {
        self.rng.u64(..).to_le_bytes()
    }

    /// Writes `n` generated bytes into `sink`.
    pub fn dump(&mut self, n: u64, sink: impl Sink<u8>) -> IO<u64> {
        copy_n(sink, self, n)
    }
}

impl Source<u8> for RandomBytes {
    fn source(&mut self, into: &mut [u8]) -> IO {
        let used = self.spare.copy_into(into)?;

        let mut words = into[used..].chunks_exact_mut(DRAW);
        for word in &mut words {
            word.copy_from_slice(&self.draw());
        }

        let tail = words.into_remainder();
        if !tail.is_empty() {
            let draw = self.draw();
            self.spare.clear();
            self.spare.copy_from(&draw)?;
            self.spare.copy_into(tail)?;
        }

        Ok(into.len())
    }
}
