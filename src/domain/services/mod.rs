pub mod overlap;
pub mod schedule;
pub mod conflict;
pub mod slots;
pub mod recurrence;
pub mod booking;
pub mod calendar;
