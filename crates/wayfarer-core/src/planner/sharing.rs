//! Share links and the redaction behind them.
//!
//! Sharing publishes a frozen snapshot of the trip under a fresh opaque
//! token. The owner picks which sections go out; everything deselected is
//! replaced by an explicit placeholder rather than omitted, so an opened
//! share renders every section it is supposed to and plainly says the rest
//! was held back.

use uuid::Uuid;

use super::TripPlanner;
use crate::error::Result;
use crate::models::{
    AccommodationOptions, CostBreakdown, FacetSlot, FoodGuide, ItineraryDocument,
    TransportationGuide, TripSummary, WeatherReport,
};
use crate::params::ShareSelection;
use crate::session::SessionHandle;

/// Base of every share link.
pub const SHARE_URL_BASE: &str = "https://wayfarer.app/trip?share=";

/// Placeholder standing in for text the owner chose not to share.
pub(crate) const NOT_SHARED: &str = "Not shared.";

/// A published share: the token and the link that embeds it.
#[derive(Debug, Clone)]
pub struct ShareLink {
    /// Opaque token the record is stored under
    pub token: String,
    /// Full link for handing to someone else
    pub url: String,
}

impl ShareLink {
    pub(crate) fn for_token(token: String) -> Self {
        Self {
            url: format!("{SHARE_URL_BASE}{token}"),
            token,
        }
    }

    /// Accepts either a bare token or a full share link and returns the
    /// token.
    #[must_use]
    pub fn extract_token(input: &str) -> &str {
        input
            .rsplit_once("share=")
            .map_or(input, |(_, token)| token)
            .trim()
    }
}

/// Mints an opaque share token.
pub(crate) fn mint_share_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Builds the document that actually gets published for a selection.
///
/// Deselected sections become placeholders, never holes: an empty schedule,
/// empty option lists, "Not shared." texts, a zeroed budget. Selected days
/// keep their original numbering even when earlier days are dropped. Day
/// images are session output, not document content, so they never travel
/// with a share.
pub(crate) fn redacted_copy(
    document: &ItineraryDocument,
    selection: &ShareSelection,
) -> ItineraryDocument {
    let mut copy = document.clone();

    if !selection.summary {
        copy.summary = TripSummary {
            description: NOT_SHARED.to_string(),
            highlights: Vec::new(),
        };
    }

    if selection.schedule {
        if let Some(days) = &selection.days {
            copy.schedule.retain(|plan| days.contains(&plan.day));
        }
    } else {
        copy.schedule.clear();
    }
    for day in &mut copy.schedule {
        day.image = FacetSlot::Missing;
    }

    if !selection.accommodation {
        copy.accommodation = FacetSlot::Ready(AccommodationOptions::default());
    }
    if !selection.transportation {
        copy.transportation = FacetSlot::Ready(TransportationGuide::default());
    }
    if !selection.food {
        copy.food = FacetSlot::Ready(FoodGuide {
            restaurants: Vec::new(),
            local_specialties: Vec::new(),
            tip: NOT_SHARED.to_string(),
        });
    }
    if !selection.weather {
        copy.weather = FacetSlot::Ready(WeatherReport {
            daily: Vec::new(),
            packing_recommendation: NOT_SHARED.to_string(),
            weekly_summary: NOT_SHARED.to_string(),
        });
    }
    if !selection.budget {
        copy.total_estimated_cost = 0.0;
        copy.cost_breakdown = CostBreakdown::default();
    }

    copy
}

impl TripPlanner {
    /// Publishes a redacted snapshot of the trip under a fresh token and
    /// returns the share link.
    ///
    /// Every share mints its own token, so sharing twice never retires an
    /// earlier link. The snapshot is frozen: later edits to the live trip
    /// do not reach it.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::CapacityExceeded` if storage refuses the
    /// record. The live trip is unaffected either way.
    pub async fn share(
        &self,
        trip: &SessionHandle,
        selection: &ShareSelection,
    ) -> Result<ShareLink> {
        let session = trip.snapshot().await;
        let redacted = redacted_copy(session.document(), selection);
        let token = mint_share_token();
        self.store
            .save_share_record(&token, session.params(), &redacted)?;
        Ok(ShareLink::for_token(token))
    }
}
