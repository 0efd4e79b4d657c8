use crate::domain::models::{appointment::Appointment, venue::Venue};
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a confirmed appointment.
pub fn generate_ics(venue: &Venue, appointment: &Appointment) -> String {
    let mut calendar = Calendar::new();

    let services = appointment.services();
    let summary = if services.is_empty() {
        format!("Appointment at {}", venue.name)
    } else {
        let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
        format!("{}: {}", venue.name, names.join(", "))
    };

    let ical_event = IcalEvent::new()
        .summary(&summary)
        .location(venue.address.as_deref().unwrap_or(""))
        .starts(appointment.start_time)
        .ends(appointment.end_time)
        .uid(&appointment.id)
        .done();

    calendar.push(ical_event);
    calendar.to_string()
}
