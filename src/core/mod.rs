//! Core attendance logic - framework-agnostic ledger, directory and views.

/// Month navigation state and the weekend convention
pub mod calendar;
/// Ordered teacher directory with id/email uniqueness
pub mod directory;
/// Attendance ledger keyed by (teacher, date)
pub mod ledger;
/// Monthly percentages and the summary card
pub mod monthly;
/// Plain-text rendering of the views
pub mod report;
/// Daily view, month grid and records listing
pub mod view;
