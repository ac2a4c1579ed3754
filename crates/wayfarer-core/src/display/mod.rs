//! Display formatting functions and result types.
//!
//! This module provides wrapper types for collections, operation results,
//! and the full itinerary report, enabling consistent formatting across
//! different output contexts (reports, lists, confirmations).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! The Display architecture combines direct Display implementations on domain
//! models with wrapper types for collections, operation results, and whole
//! sessions. This approach provides both idiomatic Rust patterns and
//! context-specific formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types & │    │   Formatted     │
//! │ (DayPlan, Hotel)│───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Benefits
//!
//! 1. **Idiomatic Rust**: Newtype wrappers provide Display implementations for
//!    collections
//! 2. **Separation of Concerns**: Business logic in models, presentation in
//!    wrappers
//! 3. **Type Safety**: Newtype wrappers ensure proper formatting without runtime
//!    errors
//! 4. **Consistency**: All output goes through standardized display logic
//!
//! ## Module Organization
//!
//! - [`report`]: The full itinerary report ([`ItineraryReport`])
//! - [`collections`]: Collection wrapper types (SavedTripList, AdvisoryList)
//! - [`results`]: Operation result types (EditResult, ShareResult, SaveResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date range formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ### Operation Results
//!
//! ```rust
//! use wayfarer_core::{
//!     display::EditResult,
//!     models::{Activity, ActivityKind, Priority},
//! };
//!
//! let activity = Activity {
//!     time: "09:00".to_string(),
//!     description: "Breakfast at the shack".to_string(),
//!     kind: ActivityKind::Food,
//!     estimated_cost: 12.0,
//!     priority: Priority::High,
//!     travel_details: None,
//!     selected_flight: None,
//! };
//!
//! // Format edits with change tracking
//! let changes = vec!["Priority set to High".to_string()];
//! let result = EditResult::with_changes(activity, changes);
//! let output = format!("{}", result);
//! assert!(output.contains("Changes made:"));
//! ```
//!
//! ### Status Messages
//!
//! ```rust
//! use wayfarer_core::display::OperationStatus;
//!
//! // Success messages
//! let success = OperationStatus::success("Cleared the active trip".to_string());
//! println!("{}", success);
//!
//! // Error messages
//! let error = OperationStatus::failure("Nothing to share".to_string());
//! println!("{}", error);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Markdown Output**: All formatters produce markdown for rich terminal
//!    display
//! 2. **Honest Gaps**: A report rendered mid-assembly labels sections that are
//!    still loading or failed instead of hiding them
//! 3. **Consistent Structure**: Headers, metadata, content follow standard
//!    patterns

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{AdvisoryList, LocationList, SavedTripList};
pub use datetime::DateRange;
pub use report::ItineraryReport;
pub use results::{EditResult, SaveResult, ShareResult};
pub use status::OperationStatus;
