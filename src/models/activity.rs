use serde::{Deserialize, Serialize};

/// One extracurricular offering as exposed by the API.
///
/// `participants` keeps signup order; an email appears at most once per
/// activity. `max_participants` is informational only — a full roster does
/// not reject further signups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
