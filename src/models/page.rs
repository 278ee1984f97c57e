use serde::{Deserialize, Serialize};

use super::workout::Workout;

/// Envelope returned by `GET /v1/workouts`. Lives only for the duration of
/// one fetch; callers only ever see the inner workout list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutsPage {
    pub page: u32,
    pub page_count: u32,
    pub workouts: Vec<Workout>,
}
