use {
    anyhow::{
        Context,
        Result,
    },
    lio::{
        copy::{
            copy,
            copy_n,
        },
        generator::RandomBytes,
        hash::ByteHash,
        stream,
        LimitExt,
    },
    log::info,
    std::{
        fs::File,
        io::{
            self,
            BufWriter,
            Write,
        },
        path::Path,
        time::{
            SystemTime,
            UNIX_EPOCH,
        },
    },
};

pub fn limit(text: &str, bytes: u64, out: &mut impl Write) -> Result<u64> {
    let n = copy(stream::Write(&mut *out), stream::Read(text.as_bytes()).limit(bytes))?;
    out.flush()?;

    info!("printed {n} of {} bytes", text.len());
    Ok(n)
}

pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        // Only the low 64 bits of the nanosecond count vary between runs.
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

pub fn random(seed: u64, bytes: u64, dump_to: Option<&Path>, out: &mut impl Write) -> Result<u64> {
    let mut generator = RandomBytes::new(seed);
    info!("seed {seed}");

    match dump_to {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Couldn't create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let n = generator.dump(bytes, stream::Write(&mut writer))?;
            writer.flush()?;
            writeln!(out, "Dumped {n} bytes to {}", path.display())?;
            Ok(n)
        }
        None => {
            let mut buf = Vec::new();
            let n = copy_n(&mut buf, &mut generator, bytes)?;
            writeln!(out, "Generate bytes: {buf:?} size({n})")?;
            Ok(n)
        }
    }
}

pub fn hash(init: u8, file: Option<&Path>, out: &mut impl Write) -> Result<u8> {
    let mut hasher = ByteHash::new(init);

    let n = match file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Couldn't open {}", path.display()))?;
            copy(&mut hasher, stream::Read(file))?
        }
        None => copy(&mut hasher, stream::Read(io::stdin().lock()))?,
    };

    info!("hashed {n} bytes");
    writeln!(out, "Hash: {}", hasher.hash())?;
    Ok(hasher.hash())
}

pub fn copy_file(src: &Path, dst: &Path, out: &mut impl Write) -> Result<u64> {
    let src_file =
        File::open(src).with_context(|| format!("Couldn't open {}", src.display()))?;
    let dst_file =
        File::create(dst).with_context(|| format!("Couldn't create {}", dst.display()))?;

    let n = copy(stream::Write(dst_file), stream::Read(src_file))?;

    writeln!(out, "Copied {n} bytes from {} to {}", src.display(), dst.display())?;
    Ok(n)
}
