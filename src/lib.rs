//! Core model for recurring tutorial sessions.
//!
//! This crate provides the in-process model the surrounding application
//! (CLI, rendering, storage) works with:
//! - [`Tutorial`] aggregates a weekly [`TimeTable`], per-week [`Attendance`],
//!   a student roster, assignment submission tracking and a deduplicated log
//!   of concrete [`Event`]s
//! - the recurrence engine derives past-or-present occurrences from the
//!   timetable and an injected [`Semester`] anchor
//!
//! The core is pure, synchronous and single-threaded. Command parsing,
//! display and persistence formats are the caller's concern.

pub mod assignment;
pub mod attendance;
pub mod error;
pub mod event;
pub mod semester;
pub mod student;
pub mod timetable;
pub mod tutorial;
pub mod week;

pub use assignment::{Assignment, NOT_SUBMITTED};
pub use attendance::Attendance;
pub use error::{TutorLogError, TutorLogResult};
pub use event::Event;
pub use semester::Semester;
pub use student::Student;
pub use timetable::TimeTable;
pub use tutorial::Tutorial;
pub use week::Week;
