use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// avl: Driver for the avl-index enzyme index.
///
/// Load a REBASE-style database into an AVL tree, query it, and report
/// the empirical cost of lookups and removals.
#[derive(Parser)]
#[command(name = "avl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up recognition sequences read from stdin.
    Query {
        /// Path to the enzyme database file.
        db: String,
    },

    /// Report tree size, depth, and recursion counts for a query file.
    Stats {
        /// Path to the enzyme database file.
        db: String,

        /// Path to a file of whitespace-separated recognition sequences.
        queries: String,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print every record in sequence order.
    Dump {
        /// Path to the enzyme database file.
        db: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Query { db } => commands::query(&db),
        Commands::Stats { db, queries, json } => commands::stats(&db, &queries, json),
        Commands::Dump { db } => commands::dump(&db),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
