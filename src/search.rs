use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::client::WorkoutsClient;
use crate::error::Result;
use crate::models::Workout;

/// Page size used once the search is near the window boundary.
const FINE_PAGE_SIZE: u32 = 5;

/// True when the workout's interval intersects `[start, end]`, bounds
/// inclusive on both ends.
///
/// A workout that strictly contains the window (starts before it and ends
/// after it) does not match; neither endpoint falls inside the window.
pub fn overlaps_window(workout: &Workout, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    (workout.start_time >= start && workout.start_time <= end)
        || (workout.end_time >= start && workout.end_time <= end)
}

impl WorkoutsClient {
    /// Collect every workout whose interval overlaps `[start, end]`.
    ///
    /// The listing endpoint has no date filter and returns workouts newest
    /// first, so the search scans pages in two phases. Phase one skips the
    /// run of workouts newer than the window: the first request uses a page
    /// size of `max(5, days between now and end)` to fast-forward in one
    /// round trip, then drops to a page size of 5 so the boundary is not
    /// overshot by much. The page holding the first workout with
    /// `end_time <= end` is the boundary page and seeds the result. Phase
    /// two keeps walking older pages to pick up workouts whose start still
    /// falls inside the window, stopping at the first page with no match.
    ///
    /// Pages are fetched strictly one at a time; the boundary detection
    /// depends on monotonically increasing page numbers. There is no upper
    /// bound on pages scanned short of data exhaustion, and any transport
    /// or decode failure aborts the whole search, discarding matches
    /// accumulated so far.
    pub async fn fetch_for_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Workout>> {
        let days_since_end = (Utc::now() - end).num_days();
        let mut page_size = u32::try_from(days_since_end)
            .unwrap_or(FINE_PAGE_SIZE)
            .max(FINE_PAGE_SIZE);
        let mut page = 1u32;
        let mut first_fetch = true;
        let mut seen: HashSet<String> = HashSet::new();
        let mut matches: Vec<Workout> = Vec::new();

        // Phase one: locate the page holding the window's end boundary.
        loop {
            let batch = self.list_page(page, page_size).await?;
            if batch.is_empty() {
                tracing::debug!(page, "ran out of workouts before the window");
                return Ok(matches);
            }
            page += 1;
            if first_fetch {
                page_size = FINE_PAGE_SIZE;
                first_fetch = false;
            }
            if batch.iter().any(|w| w.end_time <= end) {
                for workout in batch {
                    if overlaps_window(&workout, start, end) && seen.insert(workout.id.clone()) {
                        matches.push(workout);
                    }
                }
                break;
            }
            tracing::debug!(page = page - 1, "page entirely newer than window");
        }

        // Phase two: walk older pages until one contributes nothing. A long
        // workout can straddle a page boundary, and starts inside the window
        // may spill onto pages past the boundary page.
        loop {
            let batch = self.list_page(page, page_size).await?;
            page += 1;
            let mut page_matched = false;
            for workout in batch {
                if overlaps_window(&workout, start, end) {
                    page_matched = true;
                    if seen.insert(workout.id.clone()) {
                        matches.push(workout);
                    }
                }
            }
            if !page_matched {
                tracing::debug!(count = matches.len(), "range search finished");
                return Ok(matches);
            }
        }
    }
}
