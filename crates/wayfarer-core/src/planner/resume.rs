//! Rehydrating sessions from storage.

use std::sync::Arc;

use super::images::refresh_day_images;
use super::sharing::{mint_share_token, ShareLink};
use super::TripPlanner;
use crate::error::{Result, WayfarerError};
use crate::session::{Session, SessionHandle};
use crate::store::TripRecord;

impl TripPlanner {
    /// Resumes the most recently active trip, if one is stored.
    ///
    /// Day images and session extras are never persisted: the extras come
    /// back unavailable, and a background task refreshes the images with
    /// the usual pacing. The rehydrated session runs under a fresh share
    /// token.
    pub async fn resume_last(&self) -> Result<Option<SessionHandle>> {
        let Some(record) = self.store.load_last() else {
            return Ok(None);
        };
        Ok(Some(
            self.install_rehydrated(record, mint_share_token()).await,
        ))
    }

    /// Opens a previously shared trip by its token or full share link.
    ///
    /// The session adopts the token as its share id, so later changes keep
    /// updating the same record, exactly as if the trip had been planned
    /// here.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::TripNotFound` if no readable share record
    /// exists under the token.
    pub async fn open_shared(&self, token_or_link: &str) -> Result<SessionHandle> {
        let token = ShareLink::extract_token(token_or_link);
        let Some(record) = self.store.load_shared(token) else {
            return Err(WayfarerError::TripNotFound {
                token: token.to_string(),
            });
        };
        Ok(self.install_rehydrated(record, token.to_string()).await)
    }

    /// Installs a stored trip as the current session and spawns the image
    /// refresh behind it.
    pub(super) async fn install_rehydrated(
        &self,
        record: TripRecord,
        share_id: String,
    ) -> SessionHandle {
        let session = Session::rehydrated(record.details, record.itinerary, share_id);
        let (handle, done) = self.install_session(session);
        handle.mirror_now().await;

        let generator = Arc::clone(&self.generator);
        let delay = self.pacing.image_delay;
        let task = handle.clone();
        tokio::spawn(async move {
            refresh_day_images(generator.as_ref(), &task, delay).await;
            let _ = done.send(true);
        });

        handle
    }
}
