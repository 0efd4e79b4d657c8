use chrono::{Days, Months, NaiveDate};
use serde::Deserialize;

/// Upper bound on occurrences per series, whatever the caller asks for.
pub const MAX_OCCURRENCES: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Biweekly => "biweekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
        }
    }

    fn step(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            RecurrenceType::Weekly => date.checked_add_days(Days::new(7)),
            RecurrenceType::Biweekly => date.checked_add_days(Days::new(14)),
            RecurrenceType::Monthly => date.checked_add_months(Months::new(1)),
            RecurrenceType::Yearly => date.checked_add_months(Months::new(12)),
        }
    }
}

/// Expands a recurrence request into concrete occurrence dates, starting at
/// `start` and stepping by type. Stops at `count` occurrences, at `end_date`
/// (inclusive), or at the hard cap of `MAX_OCCURRENCES`.
pub fn expand_dates(
    start: NaiveDate,
    kind: RecurrenceType,
    count: Option<u32>,
    end_date: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    let target = count
        .map(|c| (c as usize).min(MAX_OCCURRENCES))
        .unwrap_or(MAX_OCCURRENCES)
        .max(1);

    let mut dates = vec![start];
    let mut current = start;

    while dates.len() < target {
        let Some(next) = kind.step(current) else {
            break;
        };
        if let Some(end) = end_date {
            if next > end {
                break;
            }
        }
        current = next;
        dates.push(current);
    }

    dates
}
