use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc, Weekday};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BreakWindow {
    pub start: String,
    pub end: String,
}

/// One weekday's operating rules, as configured by venue administration.
/// Times are `HH:MM` wall-clock strings in the venue's timezone.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DaySchedule {
    pub open: String,
    pub close: String,
    pub is_open: bool,
    #[serde(default)]
    pub is_arrival_order: bool,
    #[serde(default)]
    pub breaks: Vec<BreakWindow>,
}

/// Weekly operating hours. One optional entry per weekday; a missing entry
/// means the day is closed for whoever owns this schedule.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WeekSchedule {
    pub monday: Option<DaySchedule>,
    pub tuesday: Option<DaySchedule>,
    pub wednesday: Option<DaySchedule>,
    pub thursday: Option<DaySchedule>,
    pub friday: Option<DaySchedule>,
    pub saturday: Option<DaySchedule>,
    pub sunday: Option<DaySchedule>,
}

impl WeekSchedule {
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
}

/// Slot granularity and booking-window knobs, scoped to one venue.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VenueSettings {
    pub slot_interval: i32,
    pub appointment_buffer: i32,
    pub min_notice_minutes: i32,
    pub max_future_days: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub timezone: String,
    pub hours_json: String,
    pub slot_interval: i32,
    pub appointment_buffer: i32,
    pub min_notice_minutes: i32,
    pub max_future_days: i32,
    pub created_at: DateTime<Utc>,
}

impl Venue {
    pub fn week_schedule(&self) -> WeekSchedule {
        serde_json::from_str(&self.hours_json).unwrap_or_default()
    }

    pub fn settings(&self) -> VenueSettings {
        VenueSettings {
            slot_interval: self.slot_interval,
            appointment_buffer: self.appointment_buffer,
            min_notice_minutes: self.min_notice_minutes,
            max_future_days: self.max_future_days,
        }
    }
}
