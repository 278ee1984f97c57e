use std::fmt::Display;

use crate::models::{ExerciseSet, Workout};

/// Renders workouts as markdown. Pure string producers, no I/O; the
/// configured directory is only used to build note links in summaries.
pub struct Renderer {
    workout_dir: String,
}

impl Renderer {
    pub fn new(workout_dir: impl Into<String>) -> Self {
        Self {
            workout_dir: workout_dir.into(),
        }
    }

    /// Full markdown note for a single workout, one per vault file.
    pub fn workout_note(&self, workout: &Workout) -> String {
        let mut out = String::new();
        self.push_workout(&mut out, workout);
        out
    }

    /// One document holding the full form of several workouts.
    pub fn workouts_note(&self, workouts: &[Workout]) -> String {
        let mut out = String::from("# Hevy Workouts\n\n");
        for workout in workouts {
            self.push_workout(&mut out, workout);
        }
        out
    }

    /// Short callout block linking to the workout's own note.
    pub fn workout_summary(&self, workout: &Workout) -> String {
        let duration = pretty_duration((workout.end_time - workout.start_time).num_seconds());
        let sets: usize = workout.exercises.iter().map(|e| e.sets.len()).sum();

        format!(
            "> [!workout] [{}]({}/{})\n\
             > **Description:** {}\n\
             > **Start Time:** {}\n\
             > **End Time:** {}\n\
             > **Duration:** {}\n\
             > **Sets:** {}\n",
            workout.title,
            self.workout_dir,
            workout.id,
            workout.description,
            workout.start_time.to_rfc3339(),
            workout.end_time.to_rfc3339(),
            duration,
            sets,
        )
    }

    pub fn workout_summaries(&self, workouts: &[Workout]) -> String {
        let mut out = String::from("# Hevy Workouts\n\n");
        for workout in workouts {
            out.push_str(&self.workout_summary(workout));
            out.push('\n');
        }
        out
    }

    fn push_workout(&self, out: &mut String, workout: &Workout) {
        out.push_str(&format!("## {}\n\n", workout.title));
        out.push_str(&format!("**Description:** {}\n\n", workout.description));
        out.push_str(&format!(
            "**Start Time:** {}\n\n",
            workout.start_time.to_rfc3339()
        ));
        out.push_str(&format!(
            "**End Time:** {}\n\n",
            workout.end_time.to_rfc3339()
        ));
        out.push_str(&format!(
            "**Updated At:** {}\n\n",
            workout.updated_at.to_rfc3339()
        ));
        out.push_str(&format!(
            "**Created At:** {}\n\n",
            workout.created_at.to_rfc3339()
        ));
        out.push_str("### Exercises\n\n");
        for exercise in &workout.exercises {
            out.push_str(&format!("#### {}\n\n", exercise.title));
            out.push_str(&format!("**Notes:** {}\n\n", exercise.notes));
            out.push_str("**Sets:**\n\n");
            for set in &exercise.sets {
                push_set(out, set);
            }
        }
    }
}

fn push_set(out: &mut String, set: &ExerciseSet) {
    out.push_str(&format!("* **Type:** {}\n", set.set_type));
    out.push_str(&format!("* **Weight (kg):** {}\n", opt(&set.weight_kg)));
    out.push_str(&format!("* **Reps:** {}\n", opt(&set.reps)));
    out.push_str(&format!(
        "* **Distance (m):** {}\n",
        opt(&set.distance_meters)
    ));
    out.push_str(&format!(
        "* **Duration (s):** {}\n",
        opt(&set.duration_seconds)
    ));
    out.push_str(&format!("* **RPE:** {}\n\n", opt(&set.rpe)));
}

fn opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn pretty_duration(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
