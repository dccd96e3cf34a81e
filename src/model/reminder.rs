use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the reminder dispatch did. Re-invoking re-sends; there is no
/// idempotency key.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReminderOutcomeDto {
    pub sent: bool,
    /// Number of events covered by the reminder; zero when nothing was sent.
    pub count: i32,
    pub message: String,
}
