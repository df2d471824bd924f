use {
    anyhow::Result,
    clap::{
        Parser,
        Subcommand,
    },
    env_logger::Env,
    std::{
        io,
        path::PathBuf,
    },
};

mod commands;

const SAMPLE_TEXT: &str = "some io.Reader stream to be read\n";

#[derive(Parser, Debug)]
#[command(name = "lio")]
#[command(about = "Play with bounded byte streams", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print at most BYTES bytes of TEXT
    Limit {
        #[arg(short = 'n', long, default_value_t = 4)]
        bytes: u64,

        #[arg(default_value = SAMPLE_TEXT)]
        text: String,
    },

    /// Generate pseudo random bytes
    Random {
        /// Defaults to the current time
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short = 'n', long, default_value_t = 16)]
        bytes: u64,

        /// Write raw bytes here instead of printing them
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Hash a file, or stdin
    Hash {
        #[arg(long, default_value_t = 0)]
        init: u8,

        file: Option<PathBuf>,
    },

    /// Copy a file
    Copy { src: PathBuf, dst: PathBuf },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Limit { bytes, text } => commands::limit(&text, bytes, &mut stdout).map(drop),
        Command::Random { seed, bytes, out } => commands::random(
            seed.unwrap_or_else(commands::time_seed),
            bytes,
            out.as_deref(),
            &mut stdout,
        )
        .map(drop),
        Command::Hash { init, file } => {
            commands::hash(init, file.as_deref(), &mut stdout).map(drop)
        }
        Command::Copy { src, dst } => commands::copy_file(&src, &dst, &mut stdout).map(drop),
    }
}
