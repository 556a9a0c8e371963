//! Deadline suggestion.
//!
//! Converts urgency, complexity and current workload into a whole-day offset
//! from the evaluation clock. Higher urgency pulls the deadline earlier;
//! higher complexity and higher workload push it later. The three pressures
//! are combined linearly and then bounded, so no combination of inputs can
//! land sooner than 1 day or later than 14 days out.

use chrono::{DateTime, Duration, Utc};

use crate::types::WorkloadInfo;

/// Normalized workload signal in `[0.0, 1.0]`; zero when absent.
fn load_factor(workload: Option<&WorkloadInfo>) -> f64 {
    workload
        .and_then(|w| w.num_active_tasks)
        .map(|n| (n / 10.0).min(1.0))
        .unwrap_or(0.0)
}

/// Whole-day deadline offset in `1..=14`.
pub fn deadline_offset_days(
    urgency: f64,
    complexity: f64,
    workload: Option<&WorkloadInfo>,
) -> i64 {
    let load = load_factor(workload);
    let days = 5.0 - 2.5 * urgency.min(2.0) + 3.0 * complexity.min(1.2) + 2.0 * load;
    days.clamp(1.0, 14.0).round() as i64
}

/// Suggest a deadline relative to `now`.
pub fn suggest_deadline(
    urgency: f64,
    complexity: f64,
    workload: Option<&WorkloadInfo>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    now + Duration::days(deadline_offset_days(urgency, complexity, workload))
}
