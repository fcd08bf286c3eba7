use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

mod commands;
mod utils;

use utils::OutputFormat;

#[derive(Parser)]
#[command(name = "ipseq-cmd")]
#[command(about = "Command-line utility for sequential IP address ranges")]
#[command(version)]
struct Cli {
    /// Worker threads for parallel traversal (defaults to the number of CPUs)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Separator printed between the bounds of a range
    #[arg(long, global = true, default_value = ipseq_range::DEFAULT_SEPARATOR)]
    separator: String,

    /// Print addresses in normalized form (IPv6 without `::` compression)
    #[arg(long, global = true)]
    normalized: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a range and the number of addresses it holds
    Count {
        /// Lower bound
        lower: String,
        /// Upper bound
        upper: String,
    },

    /// List the addresses of a range in ascending order
    List {
        lower: String,
        upper: String,

        /// Maximum number of addresses to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the prefix blocks of a given length intersecting a range
    Prefixes {
        lower: String,
        upper: String,

        /// Prefix length of the blocks
        #[arg(short, long)]
        prefix: u32,

        /// Print whole prefix blocks instead of blocks trimmed to the range
        #[arg(long)]
        blocks: bool,

        /// Maximum number of items to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the minimal list of prefix blocks covering exactly a range
    Span { lower: String, upper: String },

    /// Bisect a range recursively and print the parts
    Split {
        lower: String,
        upper: String,

        /// Number of bisection levels
        #[arg(short, long, default_value_t = 1)]
        depth: usize,
    },

    /// Join ranges (`lower-upper`, `address` or `address/prefix`) into a minimal cover
    Join {
        #[arg(required = true)]
        ranges: Vec<String>,
    },

    /// Print the parts of the first range that are not in the second
    Subtract { range: String, other: String },

    /// Print the addresses two ranges have in common
    Intersect { range: String, other: String },

    /// Count the addresses, or the prefix blocks, of a range in parallel
    ParCount {
        lower: String,
        upper: String,

        /// Count prefix blocks of this length instead of addresses
        #[arg(short, long)]
        prefix: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let format = OutputFormat::new(cli.separator, cli.normalized);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Count { lower, upper } => {
            commands::count::run(&lower, &upper, &format, &mut out)
        }
        Commands::List {
            lower,
            upper,
            limit,
        } => commands::list::run(&lower, &upper, limit, &format, &mut out),
        Commands::Prefixes {
            lower,
            upper,
            prefix,
            blocks,
            limit,
        } => commands::prefixes::run(&lower, &upper, prefix, blocks, limit, &format, &mut out),
        Commands::Span { lower, upper } => commands::span::run(&lower, &upper, &mut out),
        Commands::Split {
            lower,
            upper,
            depth,
        } => commands::split::run(&lower, &upper, depth, &format, &mut out),
        Commands::Join { ranges } => commands::algebra::join(&ranges, &format, &mut out),
        Commands::Subtract { range, other } => {
            commands::algebra::subtract(&range, &other, &format, &mut out)
        }
        Commands::Intersect { range, other } => {
            commands::algebra::intersect(&range, &other, &format, &mut out)
        }
        Commands::ParCount {
            lower,
            upper,
            prefix,
        } => commands::par_count::run(&lower, &upper, prefix, cli.threads, &mut out),
    }
}
