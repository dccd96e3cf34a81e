use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Narrative produced by the language model, returned verbatim for
/// client-side markdown rendering.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisDto {
    pub analysis: String,
}
