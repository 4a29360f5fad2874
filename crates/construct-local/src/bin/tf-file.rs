//! Prints the synthesized document for a file-copy construct tree.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use construct_graph::SynthOptions;
use construct_local::{DEFAULT_SOURCE, DEFAULT_TARGET, FileCopy, build_file_copy};

#[derive(Parser, Debug)]
#[command(name = "tf-file")]
#[command(about = "Synthesize a Local/File construct tree as JSON")]
struct Args {
    /// File read by the data source
    #[arg(long, default_value = DEFAULT_SOURCE)]
    data_file: String,

    /// File written with the data source's content
    #[arg(long, default_value = DEFAULT_TARGET)]
    output_file: String,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Print compact JSON instead
    #[arg(long, conflicts_with = "indent")]
    compact: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "construct_local=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = FileCopy {
        source: args.data_file,
        target: args.output_file,
    };
    let options = if args.compact {
        SynthOptions::compact()
    } else {
        SynthOptions::pretty(args.indent)
    };

    let (tree, root) = build_file_copy(&config)?;
    info!(constructs = tree.len(), "Synthesizing construct tree");
    println!("{}", tree.to_json(root, &options)?);

    Ok(())
}
