use chrono::NaiveDateTime;

use crate::domain::models::appointment::Appointment;
use crate::domain::models::block::Block;
use crate::domain::services::overlap::overlaps;
use crate::domain::services::schedule::DayHours;

// The candidate range and the fetched appointment/block lists must belong to
// the same professional and day; repositories apply the non-cancelled and
// venue-wide-block filters.

pub fn outside_working_hours(day: &DayHours, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    let open = start.date().and_time(day.open);
    let close = start.date().and_time(day.close);
    start < open || end > close
}

pub fn overlaps_break(day: &DayHours, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    day.breaks.iter().any(|(brk_start, brk_end)| {
        overlaps(
            start,
            end,
            start.date().and_time(*brk_start),
            start.date().and_time(*brk_end),
        )
    })
}

pub fn overlaps_appointment(
    appointments: &[Appointment],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> bool {
    appointments
        .iter()
        .any(|appt| overlaps(start, end, appt.start_time, appt.end_time))
}

pub fn overlaps_block(blocks: &[Block], start: NaiveDateTime, end: NaiveDateTime) -> bool {
    blocks
        .iter()
        .any(|block| overlaps(start, end, block.start_time, block.end_time))
}

/// Whether `[start, end)` is unbookable for the day: closed, outside
/// operating hours, over a break, or colliding with an existing appointment
/// or block. Short-circuits on the first hit.
pub fn has_conflict(
    day: Option<&DayHours>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    appointments: &[Appointment],
    blocks: &[Block],
) -> bool {
    let Some(day) = day else {
        return true;
    };

    outside_working_hours(day, start, end)
        || overlaps_break(day, start, end)
        || overlaps_appointment(appointments, start, end)
        || overlaps_block(blocks, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::appointment::{Appointment, NewAppointmentParams};
    use crate::domain::models::block::{Block, BLOCK_TYPE_BLOCK};
    use chrono::{NaiveDateTime, NaiveTime};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn day_9_to_18() -> DayHours {
        DayHours {
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            arrival_order: false,
            breaks: vec![(
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            )],
        }
    }

    fn appointment(start: &str, end: &str) -> Appointment {
        Appointment::new(NewAppointmentParams {
            venue_id: "v1".into(),
            professional_id: "p1".into(),
            customer_id: "c1".into(),
            services: vec![],
            start_time: dt(start),
            end_time: dt(end),
            customer_name: "Ana".into(),
            customer_phone: "11987654321".into(),
            recurrence_id: None,
            recurrence_type: None,
        })
    }

    #[test]
    fn test_closed_day_always_conflicts() {
        assert!(has_conflict(None, dt("2025-01-06 09:00"), dt("2025-01-06 10:00"), &[], &[]));
    }

    #[test]
    fn test_must_fit_inside_operating_hours() {
        let day = day_9_to_18();
        assert!(has_conflict(Some(&day), dt("2025-01-06 08:30"), dt("2025-01-06 09:30"), &[], &[]));
        assert!(has_conflict(Some(&day), dt("2025-01-06 17:30"), dt("2025-01-06 18:30"), &[], &[]));
        assert!(!has_conflict(Some(&day), dt("2025-01-06 09:00"), dt("2025-01-06 10:00"), &[], &[]));
    }

    #[test]
    fn test_break_boundary_is_bookable() {
        let day = day_9_to_18();
        // Ends exactly at the break start: fine.
        assert!(!has_conflict(Some(&day), dt("2025-01-06 12:00"), dt("2025-01-06 13:00"), &[], &[]));
        // One minute into the break: conflict.
        assert!(has_conflict(Some(&day), dt("2025-01-06 12:01"), dt("2025-01-06 13:01"), &[], &[]));
        // Starts exactly at the break end: fine.
        assert!(!has_conflict(Some(&day), dt("2025-01-06 14:00"), dt("2025-01-06 15:00"), &[], &[]));
    }

    #[test]
    fn test_existing_appointment_conflicts() {
        let day = day_9_to_18();
        let appts = vec![appointment("2025-01-06 10:00", "2025-01-06 11:00")];
        assert!(has_conflict(Some(&day), dt("2025-01-06 10:30"), dt("2025-01-06 11:30"), &appts, &[]));
        // End-touching is allowed.
        assert!(!has_conflict(Some(&day), dt("2025-01-06 09:00"), dt("2025-01-06 10:00"), &appts, &[]));
        assert!(!has_conflict(Some(&day), dt("2025-01-06 11:00"), dt("2025-01-06 12:00"), &appts, &[]));
    }

    #[test]
    fn test_block_conflicts() {
        let day = day_9_to_18();
        let blocks = vec![Block::new(
            "v1".into(),
            None,
            dt("2025-01-06 15:00"),
            dt("2025-01-06 16:00"),
            BLOCK_TYPE_BLOCK.into(),
            None,
        )];
        assert!(has_conflict(Some(&day), dt("2025-01-06 15:30"), dt("2025-01-06 16:30"), &[], &blocks));
        assert!(!has_conflict(Some(&day), dt("2025-01-06 16:00"), dt("2025-01-06 17:00"), &[], &blocks));
    }
}
