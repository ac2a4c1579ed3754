//! Command-line interface definitions and handlers
//!
//! This module defines the CLI argument structures using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic, plus the [`Cli`] handler
//! that binds parsed commands to the planner and the terminal renderer.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! ### Design Benefits
//!
//! 1. **Framework Isolation**: Core parameter types remain free of
//!    clap-specific attributes and derives, enabling reuse across different
//!    interfaces.
//!
//! 2. **Validation Separation**: CLI-specific validation (argument parsing,
//!    help generation) is handled by clap derives, while business logic
//!    validation remains in the core domain.
//!
//! 3. **Human Positions**: The CLI speaks in 1-based day and activity
//!    positions, matching rendered reports; conversions to the core's
//!    0-based indices happen in exactly one place, the `From` impls here.
//!
//! ### Implementation Pattern
//!
//! Each command follows this structure:
//!
//! ```rust
//! // CLI-specific argument structure with clap derives
//! #[derive(clap::Args)]
//! pub struct OperationArgs {
//!     pub field: String,
//!     #[arg(short, long)] // CLI-specific attributes
//!     pub optional_field: Option<String>,
//! }
//! ```
//!
//! with a `From` impl (or a fallible `into_*` method where defaults come
//! from stored preferences) converting to the core parameter type.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use log::debug;
use wayfarer_core::{
    display::{EditResult, ItineraryReport, OperationStatus, SaveResult, SavedTripList, ShareResult},
    models::Priority,
    params::{
        ReorderActivity, SelectFlight, SetPriority, ShareSelection, TravelStyle,
        TravellerPreferences, TripParameters,
    },
    SessionHandle, TripPlanner, WayfarerError,
};

use crate::renderer::TerminalRenderer;

/// Plan a new trip
///
/// CLI wrapper for TripParameters that adds clap-specific argument handling
/// and fills gaps from stored preferences (departure city, travel style,
/// interests) before validation.
#[derive(Args)]
pub struct PlanArgs {
    /// Where the trip goes
    pub destination: String,
    /// City the trip starts from; falls back to the stored preference
    #[arg(short, long, value_name = "CITY")]
    pub from: Option<String>,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,
    /// Number of people travelling
    #[arg(short, long, default_value_t = 1)]
    pub travellers: u32,
    /// Spending posture; falls back to the stored preference
    #[arg(long, value_enum)]
    pub style: Option<TravelStyleArg>,
    /// Overall budget cap
    #[arg(short, long)]
    pub budget: Option<f64>,
    /// What the trip should focus on, as a comma-separated list
    #[arg(short, long, value_delimiter = ',', value_name = "INTERESTS")]
    pub interests: Vec<String>,
}

impl PlanArgs {
    /// Convert CLI arguments to core trip parameters, taking unspecified
    /// values from stored preferences.
    ///
    /// The departure city has no built-in default; it must come from
    /// `--from` or from a stored preference.
    pub fn into_parameters(self, prefs: &TravellerPreferences) -> Result<TripParameters> {
        let departure_city = self
            .from
            .or_else(|| prefs.departure_city.clone())
            .context("No departure city: pass --from or store one with 'wf prefs set --from'")?;
        let travel_style = self
            .style
            .map(TravelStyle::from)
            .or(prefs.travel_style)
            .unwrap_or_default();
        let interests = if self.interests.is_empty() {
            prefs.interests.clone().unwrap_or_default()
        } else {
            self.interests
        };

        Ok(TripParameters {
            destination: self.destination,
            departure_city,
            start_date: self.start,
            end_date: self.end,
            travellers: self.travellers,
            travel_style,
            budget: self.budget,
            interests,
        })
    }
}

/// Open a trip someone shared with you
///
/// Accepts either the full share link or the bare token; the trip becomes
/// the active trip and its day images are fetched fresh.
#[derive(Args)]
pub struct OpenArgs {
    /// Share link or bare token
    #[arg(value_name = "LINK_OR_TOKEN")]
    pub link: String,
}

/// Share the active trip as a link
///
/// By default every section and every day is included. Use --sections to
/// share only some sections and --days to restrict the schedule to specific
/// days. Withheld sections appear as explicit placeholders on the other
/// side, and day images are never part of a share.
#[derive(Args)]
pub struct ShareArgs {
    /// Sections to include; omit to share everything
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub sections: Option<Vec<SectionArg>>,
    /// Restrict the shared schedule to these day numbers
    #[arg(short, long, value_delimiter = ',', value_name = "DAYS")]
    pub days: Option<Vec<u32>>,
}

impl From<ShareArgs> for ShareSelection {
    fn from(val: ShareArgs) -> Self {
        let mut selection = match val.sections {
            None => ShareSelection::default(),
            Some(sections) => {
                let mut selection = ShareSelection::none();
                for section in sections {
                    match section {
                        SectionArg::Summary => selection.summary = true,
                        SectionArg::Schedule => selection.schedule = true,
                        SectionArg::Accommodation => selection.accommodation = true,
                        SectionArg::Transportation => selection.transportation = true,
                        SectionArg::Food => selection.food = true,
                        SectionArg::Weather => selection.weather = true,
                        SectionArg::Budget => selection.budget = true,
                    }
                }
                selection
            }
        };
        selection.days = val.days;
        selection
    }
}

/// Move an activity within its day
///
/// Positions are 1-based, matching the rendered schedule. Activities never
/// change days; moving between days is rejected by the core.
#[derive(Args)]
pub struct ReorderArgs {
    /// Day the activity belongs to (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub day: u32,
    /// Current position of the activity within the day (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub from: u32,
    /// Target position within the day (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub to: u32,
}

impl From<ReorderArgs> for ReorderActivity {
    fn from(val: ReorderArgs) -> Self {
        ReorderActivity {
            from_day: val.day,
            to_day: val.day,
            from_index: (val.from - 1) as usize,
            to_index: (val.to - 1) as usize,
        }
    }
}

/// Change an activity's priority
#[derive(Args)]
pub struct PrioritizeArgs {
    /// Day the activity belongs to (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub day: u32,
    /// Position of the activity within the day (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub activity: u32,
    /// New priority
    #[arg(value_enum)]
    pub priority: PriorityArg,
}

impl From<PrioritizeArgs> for SetPriority {
    fn from(val: PrioritizeArgs) -> Self {
        SetPriority {
            day: val.day,
            activity: (val.activity - 1) as usize,
            priority: val.priority.into(),
        }
    }
}

/// Record a chosen flight on a travel activity
///
/// The flight is stored on the activity and the activity is repriced to the
/// fare multiplied by the trip's traveller count.
#[derive(Args)]
pub struct FlightArgs {
    /// Day the activity belongs to (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub day: u32,
    /// Position of the travel activity within the day (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub activity: u32,
    /// Operating airline
    #[arg(long)]
    pub airline: String,
    /// Departure time label, e.g. 06:40
    #[arg(long, value_name = "TIME")]
    pub departs: String,
    /// Arrival time label, e.g. 08:05
    #[arg(long, value_name = "TIME")]
    pub arrives: String,
    /// Fare per traveller
    #[arg(long)]
    pub price: f64,
}

impl From<FlightArgs> for SelectFlight {
    fn from(val: FlightArgs) -> Self {
        SelectFlight {
            day: val.day,
            activity: (val.activity - 1) as usize,
            airline: val.airline,
            departure_time: val.departs,
            arrival_time: val.arrives,
            price: val.price,
        }
    }
}

/// Save the active trip to the library
#[derive(Args)]
pub struct SaveArgs {
    /// Name for the library entry; names are unique, ignoring case
    pub name: String,
}

/// Load a saved trip as the active trip
#[derive(Args)]
pub struct LoadArgs {
    /// Position in the library listing (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub position: u32,
}

/// Show or set traveller preferences
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show stored preferences
    #[command(alias = "s")]
    Show,
    /// Update stored preferences; only the flags you pass change
    Set(SetPrefsArgs),
}

/// Update stored preferences
#[derive(Args)]
pub struct SetPrefsArgs {
    /// Preferred departure city
    #[arg(short, long, value_name = "CITY")]
    pub from: Option<String>,
    /// Preferred spending posture
    #[arg(long, value_enum)]
    pub style: Option<TravelStyleArg>,
    /// Standing interests as a comma-separated list
    #[arg(short, long, value_delimiter = ',', value_name = "INTERESTS")]
    pub interests: Option<Vec<String>>,
}

/// Command-line argument representation of travel style values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TravelStyleArg {
    /// Keep costs down
    Economy,
    /// Sensible mid-range choices
    Standard,
    /// Spend for comfort
    Luxury,
}

impl From<TravelStyleArg> for TravelStyle {
    fn from(val: TravelStyleArg) -> Self {
        match val {
            TravelStyleArg::Economy => TravelStyle::Economy,
            TravelStyleArg::Standard => TravelStyle::Standard,
            TravelStyleArg::Luxury => TravelStyle::Luxury,
        }
    }
}

/// Command-line argument representation of activity priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Shareable sections of a trip, as named on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Summary,
    Schedule,
    Accommodation,
    Transportation,
    Food,
    Weather,
    Budget,
}

/// Command handlers binding the planner to the terminal renderer.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// The active trip, rehydrated from the store.
    async fn active_trip(&self) -> Result<SessionHandle> {
        Ok(self
            .planner
            .resume_last()
            .await?
            .ok_or(WayfarerError::NoActiveTrip)?)
    }

    /// Waits for background enrichment to finish, then renders the full
    /// report.
    async fn render_trip(&self, trip: &SessionHandle) -> Result<()> {
        trip.enriched().await;
        let session = trip.snapshot().await;
        self.renderer
            .render(&ItineraryReport::new(&session).to_string())
    }

    pub async fn handle_plan(&self, args: PlanArgs) -> Result<()> {
        let params = args.into_parameters(&self.planner.preferences())?;
        debug!("plan: {params:?}");

        let trip = self
            .planner
            .plan_trip(&params)
            .await
            .context("Failed to plan the trip")?;
        self.render_trip(&trip).await
    }

    pub async fn handle_show(&self) -> Result<()> {
        debug!("show");

        let trip = self.active_trip().await?;
        self.render_trip(&trip).await
    }

    pub async fn handle_open(&self, args: OpenArgs) -> Result<()> {
        debug!("open: {}", args.link);

        let trip = self
            .planner
            .open_shared(&args.link)
            .await
            .context("Failed to open the shared trip")?;
        self.render_trip(&trip).await
    }

    pub async fn handle_share(&self, args: ShareArgs) -> Result<()> {
        let selection = ShareSelection::from(args);
        debug!("share: {selection:?}");

        let trip = self.active_trip().await?;
        let link = self
            .planner
            .share(&trip, &selection)
            .await
            .context("Failed to share the trip")?;

        self.renderer.render(&ShareResult::new(link).to_string())
    }

    pub async fn handle_reorder(&self, args: ReorderArgs) -> Result<()> {
        let params = ReorderActivity::from(args);
        debug!("reorder: {params:?}");

        let trip = self.active_trip().await?;
        let day = self
            .planner
            .reorder_activity(&trip, &params)
            .await
            .context("Failed to reorder the activity")?;

        let result = EditResult::with_changes(
            day,
            vec![format!(
                "Moved activity from position {} to position {}",
                params.from_index + 1,
                params.to_index + 1
            )],
        );
        self.renderer.render(&result.to_string())
    }

    pub async fn handle_prioritize(&self, args: PrioritizeArgs) -> Result<()> {
        let params = SetPriority::from(args);
        debug!("prioritize: {params:?}");

        let trip = self.active_trip().await?;
        let activity = self
            .planner
            .set_priority(&trip, &params)
            .await
            .context("Failed to change the priority")?;

        let result = EditResult::with_changes(
            activity,
            vec![format!("Priority set to {}", params.priority)],
        );
        self.renderer.render(&result.to_string())
    }

    pub async fn handle_flight(&self, args: FlightArgs) -> Result<()> {
        let params = SelectFlight::from(args);
        debug!("flight: {params:?}");

        let trip = self.active_trip().await?;
        let activity = self
            .planner
            .select_flight(&trip, &params)
            .await
            .context("Failed to record the flight")?;

        let result = EditResult::with_changes(
            activity,
            vec![format!(
                "Selected {} ({} to {}) at ${:.2} per traveller",
                params.airline, params.departure_time, params.arrival_time, params.price
            )],
        );
        self.renderer.render(&result.to_string())
    }

    pub async fn handle_save(&self, args: SaveArgs) -> Result<()> {
        debug!("save: {}", args.name);

        let trip = self.active_trip().await?;
        let entry = self
            .planner
            .save_trip(&trip, &args.name)
            .await
            .context("Failed to save the trip")?;

        self.renderer.render(&SaveResult::new(entry).to_string())
    }

    pub async fn handle_trips(&self) -> Result<()> {
        debug!("trips");

        let trips = SavedTripList(self.planner.saved_trips());
        self.renderer.render(&format!("# Saved Trips\n\n{trips}"))
    }

    pub async fn handle_load(&self, args: LoadArgs) -> Result<()> {
        debug!("load: {}", args.position);

        let trip = self
            .planner
            .load_saved(args.position as usize)
            .await
            .context("Failed to load the saved trip")?;
        self.render_trip(&trip).await
    }

    pub async fn handle_prefs(&self, command: PrefsCommands) -> Result<()> {
        match command {
            PrefsCommands::Show => {
                debug!("prefs show");

                let prefs = self.planner.preferences();
                self.renderer.render(&format!("# Preferences\n\n{prefs}"))
            }
            PrefsCommands::Set(args) => {
                debug!(
                    "prefs set: from={:?} style={:?} interests={:?}",
                    args.from,
                    args.style.map(TravelStyle::from),
                    args.interests
                );

                let mut prefs = self.planner.preferences();
                if let Some(from) = args.from {
                    prefs.departure_city = Some(from);
                }
                if let Some(style) = args.style {
                    prefs.travel_style = Some(style.into());
                }
                if let Some(interests) = args.interests {
                    prefs.interests = Some(interests);
                }
                self.planner
                    .save_preferences(&prefs)
                    .context("Failed to save preferences")?;

                self.renderer
                    .render(&OperationStatus::success("Preferences saved.".to_string()).to_string())
            }
        }
    }

    pub async fn handle_clear(&self) -> Result<()> {
        debug!("clear");

        self.planner.clear_active();
        let status = OperationStatus::success(
            "Cleared the active trip. Saved trips and share links are untouched.".to_string(),
        );
        self.renderer.render(&status.to_string())
    }
}
