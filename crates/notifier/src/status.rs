//! Success/failure interpretation of state strings.
//!
//! One marker set is used for every event family. A state is a success state
//! when it *contains* any marker, so `"STAGE_SUCCEEDED"` and `"SUCCEEDED"` both
//! qualify.

/// Substrings that mark a state as successful.
pub const SUCCESS_MARKERS: [&str; 3] = ["STARTED", "SUCCEEDED", "COMPLETED"];

/// Returns `true` if `state` contains any of [`SUCCESS_MARKERS`].
pub fn is_success_state(state: &str) -> bool {
    SUCCESS_MARKERS.iter().any(|marker| state.contains(marker))
}
