// src/services/mutation_service.rs
//
// Write side of the directory
//
// PRINCIPLES:
// - Input is normalized and validated before any connection is taken
// - Each write runs in exactly one transaction
// - Store failures roll back and become a failure message, never a crash
// - Missing targets and invalid input are returned as errors for the caller

use std::sync::Arc;

use log::{error, info};

use super::outcome::MutationOutcome;
use crate::db::{with_connection, with_transaction, ConnectionPool};
use crate::domain::{
    validate_artist_fields, validate_venue_fields, ArtistFields, ArtistId, DomainError, NewShow,
    ShowId, VenueFields, VenueId,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{ArtistRepository, ShowRepository, VenueRepository};

pub struct MutationService {
    pool: Arc<ConnectionPool>,
    venue_repo: Arc<dyn VenueRepository>,
    artist_repo: Arc<dyn ArtistRepository>,
    show_repo: Arc<dyn ShowRepository>,
}

impl MutationService {
    pub fn new(
        pool: Arc<ConnectionPool>,
        venue_repo: Arc<dyn VenueRepository>,
        artist_repo: Arc<dyn ArtistRepository>,
        show_repo: Arc<dyn ShowRepository>,
    ) -> Self {
        Self {
            pool,
            venue_repo,
            artist_repo,
            show_repo,
        }
    }

    pub fn create_venue(&self, fields: VenueFields) -> AppResult<MutationOutcome<VenueId>> {
        let fields = fields.normalized();
        validate_venue_fields(&fields)?;
        let name = fields.name.clone();

        let result = with_transaction(&self.pool, |tx| self.venue_repo.insert(tx, &fields));

        settle(
            result,
            "venue_create",
            format!("Venue {} was successfully listed!", name),
            format!("An error occurred. Venue {} could not be listed.", name),
        )
    }

    /// Replace every editable field of an existing venue
    pub fn update_venue(&self, id: VenueId, fields: VenueFields) -> AppResult<MutationOutcome<()>> {
        let fields = fields.normalized();
        validate_venue_fields(&fields)?;
        let name = fields.name.clone();

        let result = with_transaction(&self.pool, |tx| {
            let mut venue = self
                .venue_repo
                .get_by_id(tx, id)?
                .ok_or_else(|| AppError::venue_not_found(id))?;
            venue.replace_fields(fields);
            self.venue_repo.update(tx, &venue)
        });

        settle(
            result,
            "venue_update",
            format!("Venue {} was successfully updated!", name),
            format!("An error occurred. Venue {} could not be updated.", name),
        )
    }

    /// Delete a venue and, through the foreign key, all of its shows
    pub fn delete_venue(&self, id: VenueId) -> AppResult<MutationOutcome<()>> {
        let name = with_connection(&self.pool, |conn| {
            self.venue_repo
                .get_by_id(conn, id)?
                .map(|venue| venue.name)
                .ok_or_else(|| AppError::venue_not_found(id))
        })?;

        let result = with_transaction(&self.pool, |tx| self.venue_repo.delete(tx, id));

        settle(
            result,
            "venue_delete",
            format!("Venue {} was deleted successfully!", name),
            format!("Venue {} failed to be deleted.", name),
        )
    }

    pub fn create_artist(&self, fields: ArtistFields) -> AppResult<MutationOutcome<ArtistId>> {
        let fields = fields.normalized();
        validate_artist_fields(&fields)?;
        let name = fields.name.clone();

        let result = with_transaction(&self.pool, |tx| self.artist_repo.insert(tx, &fields));

        settle(
            result,
            "artist_create",
            format!("Artist {} was successfully listed!", name),
            format!("An error occurred. Artist {} could not be listed.", name),
        )
    }

    pub fn update_artist(
        &self,
        id: ArtistId,
        fields: ArtistFields,
    ) -> AppResult<MutationOutcome<()>> {
        let fields = fields.normalized();
        validate_artist_fields(&fields)?;
        let name = fields.name.clone();

        let result = with_transaction(&self.pool, |tx| {
            let mut artist = self
                .artist_repo
                .get_by_id(tx, id)?
                .ok_or_else(|| AppError::artist_not_found(id))?;
            artist.replace_fields(fields);
            self.artist_repo.update(tx, &artist)
        });

        settle(
            result,
            "artist_update",
            format!("Artist {} was successfully updated!", name),
            format!("An error occurred. Artist {} could not be updated.", name),
        )
    }

    /// Book an artist at a venue.
    ///
    /// Both ids are checked inside the transaction; an unknown id is a
    /// validation error against the matching form field.
    pub fn create_show(&self, show: NewShow) -> AppResult<MutationOutcome<ShowId>> {
        let result = with_transaction(&self.pool, |tx| {
            if !self.artist_repo.exists(tx, show.artist_id)? {
                return Err(DomainError::UnknownReference {
                    entity: "Artist",
                    id: show.artist_id,
                }
                .into());
            }
            if !self.venue_repo.exists(tx, show.venue_id)? {
                return Err(DomainError::UnknownReference {
                    entity: "Venue",
                    id: show.venue_id,
                }
                .into());
            }
            self.show_repo.insert(tx, &show)
        });

        settle(
            result,
            "show_create",
            "Show was successfully listed!".to_string(),
            "An error occurred. Show could not be listed.".to_string(),
        )
    }
}

/// Turn the result of a committed or rolled-back write into an outcome.
fn settle<T: std::fmt::Debug>(
    result: AppResult<T>,
    event: &str,
    success: String,
    failure: String,
) -> AppResult<MutationOutcome<T>> {
    match result {
        Ok(value) => {
            info!("event={} status=ok result={:?}", event, value);
            Ok(MutationOutcome::succeeded(value, success))
        }
        Err(err) if err.is_persistence() => {
            error!("event={} status=error error={}", event, err);
            Ok(MutationOutcome::failed(failure))
        }
        Err(err) => Err(err),
    }
}
