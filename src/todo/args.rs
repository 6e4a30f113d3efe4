use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Yet another command line TODO tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Also show completed items and the schedule
    #[arg(short, long, global = true)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an event to the todo list
    #[command(alias = "a")]
    Add {
        /// Words describing the todo item, e.g. `todo add Buy more beer.`
        #[arg(required = true, num_args = 1..)]
        event: Vec<String>,
    },

    /// Mark the N'th item as completed
    Done {
        /// Number of the item as printed by the list
        n: usize,
    },

    /// Mark the N'th item as incomplete again
    Redo {
        /// Number of the item as printed by the list
        n: usize,
    },

    /// Replace the text of the N'th item
    #[command(alias = "e")]
    Edit {
        /// Number of the item as printed by the list
        n: usize,

        /// New text for the item
        #[arg(required = true, num_args = 1..)]
        event: Vec<String>,
    },

    /// Delete the N'th item (removed, not marked as completed)
    #[command(alias = "rm")]
    Delete {
        /// Number of the item as printed by the list
        n: usize,
    },

    /// Clear the completed list (removes all items in it)
    Clean,

    /// Make the N'th item repeat, or stop it repeating
    Repeat {
        /// Number of the item as printed by the list
        n: usize,

        /// Repeat period: week, month or year
        #[arg(short, long, conflicts_with = "stop")]
        every: Option<String>,

        /// First occurrence, YYYY-MM-DD (defaults to today)
        #[arg(short, long, requires = "every")]
        from: Option<String>,

        /// Stop the schedule instead
        #[arg(long)]
        stop: bool,
    },

    /// Run the daily schedule refresh now
    Refresh {
        /// Refresh even if today's refresh already ran
        #[arg(long)]
        force: bool,
    },

    /// Show where the config and db files live
    Where,
}
