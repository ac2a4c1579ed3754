//! Day-image enrichment.
//!
//! Images are fetched strictly one day at a time, in day order, with a
//! pacing pause between consecutive fetches but none before the first or
//! after the last. A failed day keeps its image unavailable and the loop
//! carries on with the next day.

use std::time::Duration;

use log::{debug, warn};
use tokio::time::sleep;

use crate::generator::ItineraryGenerator;
use crate::models::FacetSlot;
use crate::session::SessionHandle;

/// Marks every day's image as loading, then fetches them sequentially.
/// Stands down as soon as the session is superseded.
pub(super) async fn refresh_day_images(
    generator: &dyn ItineraryGenerator,
    handle: &SessionHandle,
    delay: Duration,
) {
    let Some((destination, days)) = handle
        .apply_if_current(|session| {
            session.mark_images_pending();
            let days: Vec<(u32, String)> = session
                .document()
                .schedule
                .iter()
                .map(|day| (day.day, day.title.clone()))
                .collect();
            (session.params().destination.clone(), days)
        })
        .await
    else {
        return;
    };

    for (index, (day, title)) in days.into_iter().enumerate() {
        if index > 0 {
            sleep(delay).await;
        }
        if !handle.is_current() {
            debug!("Day {day} image skipped, session superseded");
            return;
        }
        let prompt = format!("A trip to {destination}: {title}");
        let image = match generator.day_image(&prompt).await {
            Ok(image) => {
                debug!("Day {day} image settled");
                FacetSlot::Ready(image)
            }
            Err(err) => {
                warn!("Day {day} image failed: {err}");
                FacetSlot::Missing
            }
        };
        if handle
            .apply_if_current(|session| session.apply_day_image(day, image))
            .await
            .is_none()
        {
            debug!("Day {day} image dropped, session superseded");
            return;
        }
    }
}
