use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged workout session as returned by the Hevy API.
///
/// The listing endpoint returns workouts newest first; `end_time` is
/// non-increasing across the full paginated sequence. The range search
/// relies on that ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub index: u32,
    pub title: String,
    pub notes: String,
    pub exercise_template_id: String,
    pub superset_id: Option<i64>,
    pub sets: Vec<ExerciseSet>,
}

/// A single set. An absent measurement means "not applicable for this set
/// type", not zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub index: u32,
    #[serde(rename = "type")]
    pub set_type: String,
    pub weight_kg: Option<f64>,
    pub reps: Option<u32>,
    pub distance_meters: Option<f64>,
    pub duration_seconds: Option<u32>,
    pub rpe: Option<f64>,
}
