use clap::{Args, Parser, Subcommand};
use printdesk::filter::{FilterState, SortDirection};
use printdesk::model::PrinterStatus;
use printdesk::validation::PrinterForm;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "printdesk", bin_name = "printdesk", version = get_version())]
#[command(about = "Printer inventory for a campus print service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding printers.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a printer to the inventory
    #[command(alias = "new")]
    Add {
        #[command(flatten)]
        printer: PrinterArgs,
    },

    /// List printers, optionally sorted and filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        listing: ListArgs,
    },

    /// Show every field of one printer
    #[command(alias = "view")]
    Show {
        /// Printer id
        id: String,
    },

    /// Change fields of a printer
    Edit {
        /// Printer id
        id: String,

        #[command(flatten)]
        printer: PrinterArgs,
    },

    /// Remove a printer
    #[command(alias = "rm")]
    Delete {
        /// Printer id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace the inventory with the example printers
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. default-filter.status)
        key: Option<String>,

        /// Value to set (use "none" to clear a default filter)
        value: Option<String>,
    },
}

/// Printer fields as typed on the command line. Validation happens in the
/// library so `add` and `edit` report the same errors.
#[derive(Args, Debug, Default)]
pub struct PrinterArgs {
    /// Manufacturer, e.g. HP
    #[arg(long)]
    pub brand: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// Sheets of paper loaded
    #[arg(long, value_name = "COUNT")]
    pub paper: Option<String>,

    /// Date added, YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// laser, inkjet, thermal or multifunction
    #[arg(long = "type", value_name = "TYPE")]
    pub printer_type: Option<String>,

    /// Free-form note
    #[arg(long)]
    pub note: Option<String>,

    /// Building code, one letter and one digit (H1)
    #[arg(long)]
    pub building: Option<String>,

    /// Floor code, three digits (201)
    #[arg(long)]
    pub floor: Option<String>,

    /// active, maintenance or inactive
    #[arg(long)]
    pub status: Option<String>,
}

impl From<PrinterArgs> for PrinterForm {
    fn from(args: PrinterArgs) -> Self {
        PrinterForm {
            brand: args.brand,
            model: args.model,
            paper_quantity: args.paper,
            date_added: args.date,
            printer_type: args.printer_type,
            note: args.note,
            building: args.building,
            floor: args.floor,
            status: args.status,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort by brand and model (asc|desc)
    #[arg(long, value_name = "DIR")]
    pub brand: Option<SortDirection>,

    /// Sort by building and floor (asc|desc)
    #[arg(long, value_name = "DIR")]
    pub position: Option<SortDirection>,

    /// Sort by paper count (asc|desc)
    #[arg(long, value_name = "DIR")]
    pub paper: Option<SortDirection>,

    /// Only show printers with this status
    #[arg(long)]
    pub status: Option<PrinterStatus>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Ignore the default filter from the configuration
    #[arg(long)]
    pub all: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        ListArgs {
            brand: None,
            position: None,
            paper: None,
            status: None,
            page: 1,
            all: false,
        }
    }
}

impl ListArgs {
    pub fn filter(&self) -> FilterState {
        FilterState {
            brand: self.brand,
            position: self.position,
            paper_count: self.paper,
            status: self.status,
        }
    }
}
