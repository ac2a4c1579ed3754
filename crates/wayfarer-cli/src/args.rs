use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    FlightArgs, LoadArgs, OpenArgs, PlanArgs, PrefsCommands, PrioritizeArgs, ReorderArgs, SaveArgs,
    ShareArgs,
};

/// Main command-line interface for the Wayfarer trip planner
///
/// Wayfarer plans multi-day travel itineraries progressively: the day-by-day
/// schedule appears first and the remaining sections (hotels, transport,
/// food, weather) settle one at a time. The active trip persists between
/// invocations, can be edited, saved to a library, and shared as a link.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the SQLite store file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wayfarer CLI
///
/// The commands fall into four groups:
/// - planning: `plan`, `show`, `clear`
/// - editing the active trip: `reorder`, `prioritize`, `flight`
/// - the trip library: `save`, `trips`, `load`
/// - sharing and preferences: `share`, `open`, `prefs`
///
/// Running `wf` with no command shows the active trip.
#[derive(Subcommand)]
pub enum Commands {
    /// Plan a new trip
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Show the active trip
    #[command(alias = "s")]
    Show,
    /// Open a trip someone shared with you
    #[command(alias = "o")]
    Open(OpenArgs),
    /// Share the active trip as a link
    Share(ShareArgs),
    /// Move an activity within its day
    #[command(alias = "r")]
    Reorder(ReorderArgs),
    /// Change an activity's priority
    #[command(alias = "pr")]
    Prioritize(PrioritizeArgs),
    /// Record a chosen flight on a travel activity
    #[command(alias = "f")]
    Flight(FlightArgs),
    /// Save the active trip to the library
    Save(SaveArgs),
    /// List the trip library
    #[command(aliases = ["t", "ls"])]
    Trips,
    /// Load a saved trip as the active trip
    #[command(alias = "l")]
    Load(LoadArgs),
    /// Show or set traveller preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
    /// Forget the active trip
    Clear,
}
