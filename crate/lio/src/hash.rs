//! A toy one-byte hash that anything can be written into.

use {
    crate::{
        Sink,
        IO,
    },
    std::io,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteHash {
    state: u8,
}

impl ByteHash {
    pub fn new(init: u8) -> Self {
        Self { state: init }
    }

    pub fn hash(&self) -> u8 {
        self.state
    }

    fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = ((self.state ^ b) << 1).wrapping_add(b % 2);
        }
    }
}

impl Sink<u8> for ByteHash {
    fn sink(&mut self, from: &[u8]) -> IO {
        self.update(from);
        Ok(from.len())
    }
}

impl io::Write for ByteHash {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
