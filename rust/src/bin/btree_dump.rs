use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use btree_index::{load_from_path, BTree, BTreeResult, LoadOptions, DEFAULT_DEGREE};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build a B-tree from a file of newline-separated keys and print it.
#[derive(Parser, Debug)]
#[command(name = "btree-dump", version, about, long_about = None)]
struct Cli {
    /// File with one key per line
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Minimum degree of the tree
    #[arg(short, long, default_value_t = DEFAULT_DEGREE)]
    degree: usize,

    /// Insert keys exactly as read instead of lower-casing them
    #[arg(long)]
    keep_case: bool,

    /// Ignore empty lines
    #[arg(long)]
    skip_blank: bool,

    /// Print size statistics instead of the key dump
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "btree_index=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> BTreeResult<()> {
    let options = LoadOptions {
        lowercase: !cli.keep_case,
        skip_blank: cli.skip_blank,
    };

    let mut tree = BTree::new(cli.degree)?;
    let start = Instant::now();
    let inserted = load_from_path(&mut tree, &cli.path, &options)?;
    tracing::debug!(inserted, elapsed = ?start.elapsed(), "build finished");

    if cli.stats {
        println!("keys: {}", tree.len());
        println!("height: {}", tree.height());
        println!("nodes: {}", tree.node_count());
        println!("degree: {}", tree.degree());
    } else {
        println!("{}", tree);
    }
    Ok(())
}
