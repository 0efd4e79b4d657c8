/// Half-open interval intersection: `[start_a, end_a)` meets `[start_b, end_b)`.
/// Touching boundaries do not count as overlapping. Every range comparison in
/// the scheduling engine routes through here.
pub fn overlaps<T: PartialOrd>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    start_a < end_b && end_a > start_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_plain_overlap() {
        assert!(overlaps(dt("2025-01-06 09:00"), dt("2025-01-06 10:00"),
                         dt("2025-01-06 09:30"), dt("2025-01-06 10:30")));
    }

    #[test]
    fn test_containment() {
        assert!(overlaps(dt("2025-01-06 09:00"), dt("2025-01-06 12:00"),
                         dt("2025-01-06 10:00"), dt("2025-01-06 11:00")));
    }

    #[test]
    fn test_touching_boundaries_do_not_overlap() {
        // One range ends exactly where the other starts.
        assert!(!overlaps(dt("2025-01-06 09:00"), dt("2025-01-06 10:00"),
                          dt("2025-01-06 10:00"), dt("2025-01-06 11:00")));
        assert!(!overlaps(dt("2025-01-06 10:00"), dt("2025-01-06 11:00"),
                          dt("2025-01-06 09:00"), dt("2025-01-06 10:00")));
    }

    #[test]
    fn test_disjoint() {
        assert!(!overlaps(dt("2025-01-06 09:00"), dt("2025-01-06 10:00"),
                          dt("2025-01-06 14:00"), dt("2025-01-06 15:00")));
    }

    #[test]
    fn test_zero_length_probe_never_overlaps_itself() {
        let t = dt("2025-01-06 09:00");
        assert!(!overlaps(t, t, t, t));
    }
}
