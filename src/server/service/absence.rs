//! Absence workflow: creation with best-effort notification and the status
//! state machine.

use entity::absence::AbsenceStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::absence::{AbsenceDto, CreateAbsenceDto},
    server::{
        data::{absence::AbsenceRepository, member::MemberRepository},
        error::AppError,
        service::notification::{Notifier, COLOR_ABSENCE},
    },
};

/// The only legal transitions: a pending absence is either approved or noted.
/// Everything else, including re-targeting `pending`, is rejected.
pub fn transition_allowed(current: AbsenceStatus, target: AbsenceStatus) -> bool {
    matches!(
        (current, target),
        (AbsenceStatus::Pending, AbsenceStatus::Approved)
            | (AbsenceStatus::Pending, AbsenceStatus::Noted)
    )
}

pub struct AbsenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbsenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an absence and notifies the club channel.
    ///
    /// The notification is deliberately fire-and-forget, at most once: a
    /// failed send is logged and swallowed so it can never fail the database
    /// write that already happened.
    pub async fn create(
        &self,
        dto: &CreateAbsenceDto,
        notifier: &Notifier,
    ) -> Result<AbsenceDto, AppError> {
        let member = MemberRepository::new(self.db)
            .get_by_id(dto.member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", dto.member_id)))?;

        let absence = AbsenceRepository::new(self.db).create(dto).await?;

        let title = format!("Absence notice: {}", member.name);
        let content = format!(
            "{} will miss club activities on {}.\nReason: {}",
            member.name,
            absence.absence_date,
            absence.reason.as_deref().unwrap_or("not given"),
        );
        if let Err(e) = notifier.send(&title, &content, COLOR_ABSENCE).await {
            tracing::warn!("Failed to send absence notification: {}", e);
        }

        Ok(absence.into())
    }

    /// Moves an absence out of `pending`.
    ///
    /// # Returns
    /// - `Ok(AbsenceDto)` - Updated absence
    /// - `Err(AppError::NotFound)` - No absence with that id
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the
    ///   current status
    pub async fn update_status(
        &self,
        id: i32,
        status: AbsenceStatus,
    ) -> Result<AbsenceDto, AppError> {
        let repo = AbsenceRepository::new(self.db);

        let absence = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Absence {} not found", id)))?;

        if !transition_allowed(absence.status, status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change absence status from {:?} to {:?}",
                absence.status, status
            )));
        }

        let updated = repo.update_status(absence, status).await?;
        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_approved_or_noted() {
        assert!(transition_allowed(AbsenceStatus::Pending, AbsenceStatus::Approved));
        assert!(transition_allowed(AbsenceStatus::Pending, AbsenceStatus::Noted));
    }

    #[test]
    fn terminal_states_never_move() {
        for terminal in [AbsenceStatus::Approved, AbsenceStatus::Noted] {
            for target in [
                AbsenceStatus::Pending,
                AbsenceStatus::Approved,
                AbsenceStatus::Noted,
            ] {
                assert!(!transition_allowed(terminal, target));
            }
        }
    }

    #[test]
    fn pending_cannot_be_retargeted() {
        assert!(!transition_allowed(AbsenceStatus::Pending, AbsenceStatus::Pending));
    }
}
