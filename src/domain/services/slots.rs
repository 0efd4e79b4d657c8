use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::domain::models::appointment::Appointment;
use crate::domain::models::block::{Block, BLOCK_TYPE_ARRIVAL_ORDER};
use crate::domain::models::venue::VenueSettings;
use crate::domain::services::conflict::{
    overlaps_appointment, overlaps_block, overlaps_break,
};
use crate::domain::services::schedule::DayHours;

/// Outcome of slot generation for one day. `ArrivalOrder` is a valid result,
/// distinct from an empty slot list: the day is served walk-in, not booked out.
#[derive(Debug, Clone, PartialEq)]
pub enum DayAvailability {
    ArrivalOrder,
    Slots(Vec<NaiveTime>),
}

fn arrival_order_applies(day: &DayHours, date: NaiveDate, blocks: &[Block]) -> bool {
    if day.arrival_order {
        return true;
    }
    let open = date.and_time(day.open);
    let close = date.and_time(day.close);
    blocks.iter().any(|block| {
        block.block_type == BLOCK_TYPE_ARRIVAL_ORDER
            && block.start_time <= open
            && block.end_time >= close
    })
}

/// Enumerates bookable start times for `date`, stepping `slot_interval`
/// minutes from opening. Each candidate is probed against appointments and
/// blocks with the buffered end (`duration + appointment_buffer`); operating
/// hours and breaks use the un-buffered end, since the buffer is reserved
/// idle time, not service time. Pure: identical inputs yield identical
/// output.
pub fn generate_slots(
    day: Option<&DayHours>,
    date: NaiveDate,
    settings: &VenueSettings,
    total_duration_min: i64,
    appointments: &[Appointment],
    blocks: &[Block],
    now_local: NaiveDateTime,
) -> DayAvailability {
    let Some(day) = day else {
        return DayAvailability::Slots(Vec::new());
    };

    if arrival_order_applies(day, date, blocks) {
        return DayAvailability::ArrivalOrder;
    }

    if date > now_local.date() + Duration::days(settings.max_future_days as i64) {
        return DayAvailability::Slots(Vec::new());
    }

    let interval_min = settings.slot_interval as i64;
    if total_duration_min <= 0 || interval_min <= 0 {
        return DayAvailability::Slots(Vec::new());
    }

    let cutoff = now_local + Duration::minutes(settings.min_notice_minutes as i64);

    let open_min = (day.open.hour() * 60 + day.open.minute()) as i64;
    let close_min = (day.close.hour() * 60 + day.close.minute()) as i64;

    let mut valid_slots = Vec::new();
    let mut cursor = open_min;

    while cursor + total_duration_min <= close_min {
        let time = NaiveTime::from_hms_opt((cursor / 60) as u32, (cursor % 60) as u32, 0)
            .expect("cursor stays below 24h");
        let slot_start = date.and_time(time);
        let slot_end = slot_start + Duration::minutes(total_duration_min);
        let probe_end = slot_end + Duration::minutes(settings.appointment_buffer as i64);

        let bookable = slot_start >= cutoff
            && !overlaps_break(day, slot_start, slot_end)
            && !overlaps_appointment(appointments, slot_start, probe_end)
            && !overlaps_block(blocks, slot_start, probe_end);

        if bookable {
            valid_slots.push(time);
        }

        cursor += interval_min;
    }

    DayAvailability::Slots(valid_slots)
}
