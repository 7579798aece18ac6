use clap::{Parser, Subcommand, ValueEnum};
use remi_core::{ReminderStatus, ReminderTag};

#[derive(Parser)]
#[command(name = "remi")]
#[command(about = "Manage companion reminders from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the reminder service (falls back to REMI_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Acting user id (falls back to REMI_USER_ID)
    #[arg(long, global = true, value_name = "ID")]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new reminder
    #[command(alias = "new")]
    Add {
        /// Reminder title
        title: Vec<String>,
        /// Due moment: RFC 3339, "YYYY-MM-DD HH:MM", or "YYYY-MM-DD" (noon)
        #[arg(long, value_name = "WHEN")]
        at: String,
        /// Optional free-text description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,
        /// Category tag (repeatable); defaults to OTHER
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<ReminderTag>,
    },
    /// List reminders for the bound user
    List {
        /// Show only reminders with this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Page through the whole collection instead of the first page
        #[arg(long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a reminder as done
    Done {
        /// Reminder ID
        id: String,
    },
    /// Mark a reminder as missed
    Miss {
        /// Reminder ID
        id: String,
    },
    /// Undo a done/missed mark, back to incomplete
    Undo {
        /// Reminder ID
        id: String,
    },
    /// Edit an existing reminder's fields
    Edit {
        /// Reminder ID
        id: String,
        /// New title
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,
        /// New due moment
        #[arg(long, value_name = "WHEN")]
        at: Option<String>,
        /// New description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,
        /// Replace the tag set (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<ReminderTag>,
    },
    /// Delete an existing reminder
    Delete {
        /// Reminder ID
        id: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StatusArg {
    Incomplete,
    Complete,
    Missed,
}

impl From<StatusArg> for ReminderStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Incomplete => Self::Incomplete,
            StatusArg::Complete => Self::Complete,
            StatusArg::Missed => Self::Missed,
        }
    }
}
