//! Entity module - Contains the plain data records of the attendance domain.
//! Teachers come from the directory seed; attendance records live in the ledger.

pub mod attendance_record;
pub mod teacher;

// Re-export specific types to avoid conflicts
pub use attendance_record::{AttendanceRecord, AttendanceStatus};
pub use teacher::Teacher;
