use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::domain::models::venue::{DaySchedule, WeekSchedule};
use crate::error::AppError;

/// Effective operating rules for one concrete day, with times parsed into
/// typed values. Produced by `resolve_day`; consumed by the conflict checker
/// and the slot generator.
#[derive(Debug, Clone)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub arrival_order: bool,
    pub breaks: Vec<(NaiveTime, NaiveTime)>,
}

fn parse_hm(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid schedule time: {}", value)))
}

fn to_day_hours(day: &DaySchedule) -> Result<DayHours, AppError> {
    let open = parse_hm(&day.open)?;
    let close = parse_hm(&day.close)?;

    let mut breaks = Vec::with_capacity(day.breaks.len());
    for brk in &day.breaks {
        breaks.push((parse_hm(&brk.start)?, parse_hm(&brk.end)?));
    }

    Ok(DayHours {
        open,
        close,
        arrival_order: day.is_arrival_order,
        breaks,
    })
}

/// Merges venue and professional weekly hours into the effective schedule
/// for `date`. A professional entry for the weekday replaces the venue entry
/// entirely; with neither, or with `is_open` unset, the day is closed
/// (`None`).
pub fn resolve_day(
    venue_hours: &WeekSchedule,
    professional_hours: Option<&WeekSchedule>,
    date: NaiveDate,
) -> Result<Option<DayHours>, AppError> {
    let weekday = date.weekday();

    let day = professional_hours
        .and_then(|hours| hours.day(weekday))
        .or_else(|| venue_hours.day(weekday));

    match day {
        Some(day) if day.is_open => Ok(Some(to_day_hours(day)?)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::venue::BreakWindow;

    fn open_day(open: &str, close: &str) -> DaySchedule {
        DaySchedule {
            open: open.to_string(),
            close: close.to_string(),
            is_open: true,
            is_arrival_order: false,
            breaks: vec![],
        }
    }

    fn venue_week() -> WeekSchedule {
        WeekSchedule {
            monday: Some(open_day("09:00", "18:00")),
            ..Default::default()
        }
    }

    // 2025-01-06 is a Monday.
    const MONDAY: &str = "2025-01-06";

    #[test]
    fn test_falls_back_to_venue_hours() {
        let date = MONDAY.parse().unwrap();
        let day = resolve_day(&venue_week(), None, date).unwrap().unwrap();
        assert_eq!(day.open, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(day.close, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn test_professional_entry_replaces_venue_entry() {
        let pro = WeekSchedule {
            monday: Some(open_day("14:00", "20:00")),
            ..Default::default()
        };
        let date = MONDAY.parse().unwrap();
        let day = resolve_day(&venue_week(), Some(&pro), date).unwrap().unwrap();
        assert_eq!(day.open, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    }

    #[test]
    fn test_professional_closed_day_wins_over_open_venue() {
        let pro = WeekSchedule {
            monday: Some(DaySchedule {
                is_open: false,
                ..open_day("09:00", "18:00")
            }),
            ..Default::default()
        };
        let date = MONDAY.parse().unwrap();
        assert!(resolve_day(&venue_week(), Some(&pro), date).unwrap().is_none());
    }

    #[test]
    fn test_missing_weekday_is_closed_not_an_error() {
        // Tuesday has no entry anywhere.
        let date: NaiveDate = "2025-01-07".parse().unwrap();
        assert!(resolve_day(&venue_week(), None, date).unwrap().is_none());
    }

    #[test]
    fn test_breaks_are_parsed() {
        let mut week = venue_week();
        week.monday.as_mut().unwrap().breaks = vec![BreakWindow {
            start: "12:00".to_string(),
            end: "13:00".to_string(),
        }];
        let date = MONDAY.parse().unwrap();
        let day = resolve_day(&week, None, date).unwrap().unwrap();
        assert_eq!(day.breaks.len(), 1);
        assert_eq!(day.breaks[0].0, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_time_is_an_error() {
        let week = WeekSchedule {
            monday: Some(open_day("9am", "18:00")),
            ..Default::default()
        };
        let date: NaiveDate = MONDAY.parse().unwrap();
        assert!(resolve_day(&week, None, date).is_err());
    }
}
