use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for SiteControl
#[derive(Parser)]
#[command(
    name = "sitecontrol",
    version = env!("CARGO_PKG_VERSION"),
    about = "Construction site control: equipment fuel/hour logs, spare-tool counts and alerts",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second site)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data store
    Init,

    /// Manage the configuration file (view, edit or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sign in with username and 4-digit PIN
    Login {
        /// Account username (case-insensitive)
        username: String,

        #[arg(long, help = "4-digit PIN code")]
        pin: String,
    },

    /// End the current session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Role-specific overview of the site
    Dashboard,

    /// Supervisor accounts (owner only)
    #[command(subcommand)]
    User(UserCommands),

    /// Fleet registry
    #[command(subcommand)]
    Machine(MachineCommands),

    /// Daily fuel and hour entries
    #[command(subcommand)]
    Log(LogCommands),

    /// Spare-tool inventory
    #[command(subcommand)]
    Tools(ToolsCommands),

    /// Evaluate and list active alerts
    Alerts {
        #[arg(long, help = "Print alerts as JSON")]
        json: bool,
    },

    /// Send an alert to the owner through a messaging link (owner only)
    Notify {
        /// Alert id as shown by `sitecontrol alerts`
        #[arg(long = "alert", value_name = "ID")]
        alert: String,

        #[arg(long, help = "Open the link with the system handler")]
        open: bool,
    },

    /// Export the site report (owner only)
    Export {
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "xlsx")]
        format: ExportFormat,

        /// Output file; defaults to SiteControl_Report_<date>.<ext> in the export directory
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Print a messaging link announcing the report to the owner
        #[arg(long)]
        notify: bool,

        #[arg(long, requires = "notify", help = "Open the link with the system handler")]
        open: bool,
    },

    /// Create a backup copy of the data store
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Print the internal audit journal
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a supervisor account
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long, help = "Exactly 4 digits")]
        pin: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List supervisor accounts
    List {
        #[arg(long = "show-pins", help = "Show PINs in clear")]
        show_pins: bool,
    },
    /// Switch an account between ACTIVE and INACTIVE
    Toggle { id: String },
    /// Set an account status explicitly
    Status {
        id: String,
        /// active | inactive
        status: String,
    },
    /// Delete an account
    Del { id: String },
}

#[derive(Subcommand)]
pub enum MachineCommands {
    /// Register a machine under the signed-in supervisor
    Add { name: String },
    /// List machines (own machines for supervisors, whole fleet for the owner)
    List,
    /// Remove one of your machines
    Del { id: String },
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Record fuel and hours for a machine
    Add {
        #[arg(long, value_name = "ID")]
        machine: String,
        #[arg(long, value_name = "LITRES", allow_hyphen_values = true)]
        fuel: String,
        #[arg(long, value_name = "HOURS", allow_hyphen_values = true)]
        hours: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "")]
        notes: String,
        /// Site photo (png, jpg, gif, webp)
        #[arg(long, value_name = "FILE")]
        photo: Option<String>,
    },
    /// List entries (own entries for supervisors, all for the owner)
    List {
        #[arg(long, value_name = "ID", help = "Only entries for this machine")]
        machine: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ToolsCommands {
    /// Create an inventory category
    AddCategory { name: String },
    /// Delete one of your categories with all its items
    DelCategory { id: String },
    /// Add an item to a category
    AddItem {
        category: String,
        name: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
        #[arg(long, value_name = "FILE")]
        photo: Option<String>,
    },
    /// Change an item count by DELTA (may go below zero)
    Adjust {
        category: String,
        item: String,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Increase an item count by one
    Inc { category: String, item: String },
    /// Decrease an item count by one
    Dec { category: String, item: String },
    /// List inventory
    List,
}
