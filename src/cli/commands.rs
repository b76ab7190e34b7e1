//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "impactlog")]
#[command(about = "Daily work log with standup, weekly and review summaries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new work log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Log (or replace) a day's work
    Add {
        /// Day to log (today, yesterday, last friday, 2024-06-10)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// What you worked on
        #[arg(short, long)]
        work: String,

        /// Why it mattered
        #[arg(short, long)]
        impact: Option<String>,

        /// Blockers or follow-ups
        #[arg(short, long)]
        blockers: Option<String>,

        /// Attach a link as URL or URL|LABEL (repeatable)
        #[arg(short, long = "link")]
        links: Vec<String>,
    },

    /// Show the entry for a day
    Show {
        /// Day to show
        #[arg(default_value = "today")]
        date: String,
    },

    /// List logged days (newest first)
    List {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show each day of a week as logged or missing
    Timeline {
        /// Any day in the week (uses the configured week start)
        #[arg(default_value = "today")]
        date: String,

        /// Show the week before
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the week after
        #[arg(long)]
        next: bool,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id (see `impactlog list`)
        id: String,
    },

    /// Yesterday / today / blockers summary
    Standup {
        /// Day the standup is for
        #[arg(default_value = "today")]
        date: String,

        /// Print JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// Summary of one week
    Weekly {
        /// Any day in the week (uses the configured week start)
        #[arg(default_value = "today", conflicts_with_all = ["from", "to"])]
        date: String,

        /// Explicit start date (inclusive)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Explicit end date (inclusive)
        #[arg(long, requires = "from")]
        to: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Performance-review evidence grouped by category
    Review {
        /// Start date (default: review_months before --to)
        #[arg(long)]
        from: Option<String>,

        /// End date (default: today)
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,

    /// Also write a plain-text export into this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}
