use {
    lio::{
        copy,
        stream,
        Limit,
        LimitExt,
        Source,
        IO,
    },
    rstest::rstest,
    std::io,
};

const TEXT: &str = "some io.Reader stream to be read\n";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hands out at most `step` items per call and records what it was asked for.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
    asked: Vec<usize>,
}

impl<'a> Trickle<'a> {
    fn new(data: &'a [u8], step: usize) -> Self {
        Self {
            data,
            step,
            asked: Vec::new(),
        }
    }
}

impl Source<u8> for Trickle<'_> {
    fn source(&mut self, into: &mut [u8]) -> IO {
        self.asked.push(into.len());
        let n = into.len().min(self.step);
        self.data.source(&mut into[..n])
    }
}

/// Gives `good` items, then fails once, then carries on.
struct Hiccup<'a> {
    data: &'a [u8],
    good: usize,
    failed: bool,
}

impl Source<u8> for Hiccup<'_> {
    fn source(&mut self, into: &mut [u8]) -> IO {
        if self.good == 0 && !self.failed {
            self.failed = true;
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "hiccup"));
        }
        let n = if self.failed {
            into.len()
        } else {
            into.len().min(self.good)
        };
        let n = self.data.source(&mut into[..n])?;
        self.good = self.good.saturating_sub(n);
        Ok(n)
    }
}

fn drain(source: &mut impl Source<u8>, capacity: usize) -> IO<Vec<u8>> {
    let mut out = Vec::new();
    let mut dest = vec![0u8; capacity];
    loop {
        match source.source(&mut dest)? {
            0 => break Ok(out),
            n => out.extend_from_slice(&dest[..n]),
        }
    }
}

#[test]
fn copies_exactly_the_prefix() -> IO<()> {
    init();
    let mut out = Vec::new();

    let n = copy::copy(&mut out, stream::Read(TEXT.as_bytes()).limit(4))?;

    assert_eq!(n, 4);
    assert_eq!(out, b"some");
    Ok(())
}

#[test]
fn exhausted_after_the_quota() -> IO<()> {
    init();
    let mut source = Limit::new(TEXT.as_bytes(), 4);
    let mut dest = [0u8; 64];

    assert_eq!(source.source(&mut dest)?, 4);
    assert_eq!(&dest[..4], b"some");

    for capacity in [64, 1, 0, 8] {
        assert_eq!(source.source(&mut dest[..capacity])?, 0);
    }
    assert_eq!(source.remaining(), 0);
    Ok(())
}

#[test]
fn zero_limit_is_exhausted_at_once() -> IO<()> {
    init();
    let mut source = TEXT.as_bytes().limit(0);
    assert_eq!(source.source(&mut [0u8; 16])?, 0);
    assert_eq!(source.into_inner(), TEXT.as_bytes());
    Ok(())
}

#[test]
fn short_source_is_relayed() -> IO<()> {
    init();
    let mut source = b"abcdef".as_slice().limit(10);

    let out = drain(&mut source, 4)?;

    assert_eq!(out, b"abcdef");
    assert_eq!(source.remaining(), 4);
    Ok(())
}

#[test]
fn short_reads_are_counted_exactly() -> IO<()> {
    init();
    let mut source = Trickle::new(TEXT.as_bytes(), 3).limit(7);
    let mut dest = [0u8; 5];

    assert_eq!(source.source(&mut dest)?, 3);
    assert_eq!(source.remaining(), 4);
    assert_eq!(source.source(&mut dest)?, 3);
    assert_eq!(source.remaining(), 1);
    assert_eq!(source.source(&mut dest)?, 1);
    assert_eq!(source.source(&mut dest)?, 0);

    assert_eq!(source.get_ref().asked, [5, 4, 1]);

    // Going around the limit reaches the rest of the stream.
    source.get_mut().step = 64;
    let rest = drain(source.get_mut(), 64)?;
    assert_eq!(rest, TEXT.as_bytes()[7..]);
    Ok(())
}

#[rstest]
#[case(0, 1)]
#[case(5, 1)]
#[case(5, 2)]
#[case(12, 5)]
#[case(33, 7)]
#[case(100, 16)]
fn never_exceeds_the_limit(#[case] limit: u64, #[case] step: usize) -> IO<()> {
    init();
    for capacity in [1, 3, 8, 64] {
        let mut source = Trickle::new(TEXT.as_bytes(), step).limit(limit);

        let out = drain(&mut source, capacity)?;

        let expected = TEXT.len().min(limit as usize);
        assert_eq!(out, TEXT.as_bytes()[..expected]);
    }
    Ok(())
}

#[test]
fn failure_is_passed_through() -> IO<()> {
    init();
    let mut source = Hiccup {
        data: TEXT.as_bytes(),
        good: 2,
        failed: false,
    }
    .limit(6);
    let mut dest = [0u8; 16];

    assert_eq!(source.source(&mut dest)?, 2);

    let err = source.source(&mut dest).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    assert_eq!(source.remaining(), 4);

    // No retry happened inside; the caller retries and the quota still holds.
    assert_eq!(source.source(&mut dest)?, 4);
    assert_eq!(&dest[..4], b"me i");
    assert_eq!(source.source(&mut dest)?, 0);
    Ok(())
}

#[test]
fn borrowed_source_stays_with_the_caller() -> IO<()> {
    init();
    let mut text = TEXT.as_bytes();

    let mut head = [0u8; 4];
    assert_eq!((&mut text).limit(4).source(&mut head)?, 4);

    let rest = copy::read_all(text)?;
    assert_eq!(&head, b"some");
    assert_eq!(rest, b" io.Reader stream to be read\n");
    Ok(())
}

#[test]
fn limits_chain() -> IO<()> {
    init();
    let mut source = TEXT.as_bytes().limit(10).limit(7).limit(12);
    let out = drain(&mut source, 64)?;
    assert_eq!(out, b"some io");
    Ok(())
}
