use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dsa_practice::algorithms::demo as algorithms;
use dsa_practice::data_structure::demo as data_structure;

#[derive(Parser)]
#[command(name = "dsa")]
#[command(version)]
#[command(about = "Classic data structures and algorithm exercises", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Linked list operations: insertion, search, reversal, sort, cycles
    LinkedList {
        /// Seed for the shuffled merge sort input
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Length of the shuffled merge sort input
        #[arg(long, default_value = "8")]
        len: usize,
    },

    /// Array, linked, bounded and min stacks plus the two-stack queue
    Stack,

    /// Brackets, infix/postfix, RPN, monotonic stacks, undo and history
    StackApps,

    /// Array helpers
    Arrays,

    /// String helpers
    Strings,

    /// LeetCode exercises
    Leetcode,

    /// Run every demonstration
    All,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::LinkedList { seed, len } => data_structure::linked_list(seed, len),
        Commands::Stack => data_structure::stacks(),
        Commands::StackApps => algorithms::stack_applications(),
        Commands::Arrays => algorithms::arrays(),
        Commands::Strings => algorithms::strings(),
        Commands::Leetcode => algorithms::leetcode(),
        Commands::All => {
            data_structure::linked_list(42, 8)?;
            println!();
            data_structure::stacks()?;
            println!();
            algorithms::stack_applications()?;
            println!();
            algorithms::arrays()?;
            println!();
            algorithms::strings()?;
            println!();
            algorithms::leetcode()
        }
    }
}
