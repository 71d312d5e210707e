use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use stagehand_board::RequestStatus;

#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(version)]
#[command(about = "Content planning dashboard for independent music artists")]
#[command(long_about = "
stagehand shows an artist's release board, content calendar, fan requests and
audience charts, and asks a generative model for content ideas.

State is seeded with demo data on every run and is never written to disk.

Global arguments can be used with any command:
  --verbose     Show trace output
  --debug       Show debug output
  --quiet       Only log errors
  --json        Print JSON instead of tables

Example usage:
  stagehand board                                   # Task board
  stagehand week --today 2024-01-08                 # Calendar window
  stagehand move task:task-1 done                   # Drag a task to Done
  stagehand ideas --topic \"new single\" --platform TikTok
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the task board
    Board,
    /// Show the content calendar
    Week {
        #[command(flatten)]
        today: TodayArg,

        /// Days to show (defaults to calendar.window_days)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Drag an item onto a column or a day
    #[command(long_about = "
Drags one item onto a bucket and shows the result. Items are written as
task:<id> or post:<n>; targets are a column id or a YYYY-MM-DD date.

Dropping a task on a day, or a post on a column, leaves everything in place.

Examples:
  stagehand move task:task-1 done
  stagehand move post:2 2024-01-14 --today 2024-01-08
")]
    Move {
        /// Item to drag, e.g. task:task-1 or post:2
        item: String,

        /// Column id or YYYY-MM-DD
        target: String,

        #[command(flatten)]
        today: TodayArg,
    },
    /// Schedule a new post from the post form
    Plan {
        #[arg(long)]
        title: String,

        /// YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// HH:MM
        #[arg(long)]
        time: String,

        /// Content type, e.g. Reel, Video, Music
        #[arg(long = "type", default_value = "Video")]
        content_type: String,

        #[arg(long, default_value = "Instagram")]
        platform: String,

        #[command(flatten)]
        today: TodayArg,
    },
    /// Show the audience charts as tables
    Analytics,
    /// Show fan requests, newest first
    Requests {
        /// Only show requests with this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    /// Generate viral content ideas
    Ideas {
        #[arg(long)]
        topic: String,

        #[arg(long, default_value = "TikTok")]
        platform: String,

        #[arg(long, default_value_t = stagehand_ideas::types::DEFAULT_IDEA_COUNT)]
        count: u8,
    },
    /// Generate content pillars for the artist
    Pillars {
        /// What the artist is about
        #[arg(long)]
        about: String,
    },
    /// Print the resolved configuration (API key masked)
    Config,
}

/// The day the calendar window starts on
#[derive(Args, Debug, Clone, Copy)]
pub struct TodayArg {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(id = "today", long = "today")]
    pub date: Option<NaiveDate>,
}

impl TodayArg {
    pub fn resolve(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusArg {
    Pending,
    InProgress,
    Completed,
}

impl From<StatusArg> for RequestStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => RequestStatus::Pending,
            StatusArg::InProgress => RequestStatus::InProgress,
            StatusArg::Completed => RequestStatus::Completed,
        }
    }
}
