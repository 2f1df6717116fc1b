use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "facesync",
    version,
    about = "Sync face-recognition profile status against a list of names"
)]
pub struct Cli {
    #[arg(
        long = "env",
        global = true,
        default_value = "default",
        help = "Settings environment to use"
    )]
    pub environment: String,
    #[arg(
        long,
        global = true,
        env = "FACE_RECOGNITION_BASE_URL",
        help = "API base url"
    )]
    pub base_url: Option<String>,
    #[arg(
        long,
        global = true,
        env = "FACE_RECOGNITION_API_KEY",
        hide_env_values = true,
        help = "API key sent as a bearer token"
    )]
    pub api_key: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Activate listed profiles and deactivate the rest
    Sync(SyncArgs),
    /// Set a single profile's status by name
    Set(SetArgs),
    /// List remote profiles
    Ls,
    /// Export or summarize match logs
    Logs(LogsArgs),
    /// Manage the stored API key
    Auth(AuthArgs),
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    #[arg(help = "Delimited file whose first column holds the active names")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetStatus {
    Active,
    Inactive,
}

impl TargetStatus {
    pub fn is_active(self) -> bool {
        self == TargetStatus::Active
    }
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(help = "Profile name (case-insensitive)")]
    pub name: String,
    #[arg(value_enum, help = "Status to set")]
    pub status: TargetStatus,
}

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LogsCommand {
    Export(ExportArgs),
    Summary,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, default_value = "match_logs.csv", help = "Output CSV file")]
    pub output: PathBuf,
    #[arg(short, long, default_value_t = 30, help = "Number of days back to export")]
    pub days: u32,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[arg(long, help = "End date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
    #[arg(long, help = "Filter by profile id")]
    pub profile_id: Option<String>,
    #[arg(long, help = "Filter by device id")]
    pub device_id: Option<String>,
    #[arg(long, conflicts_with_all = ["start_date", "end_date"], help = "Export every available log")]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    Login,
    Status,
    Logout,
}
