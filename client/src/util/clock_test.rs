use super::*;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

// =============================================================
// format_clock
// =============================================================

#[test]
fn format_clock_uses_twelve_hour_padded_hours() {
    assert_eq!(format_clock(hm(14, 5)), "02:05 PM");
    assert_eq!(format_clock(hm(9, 30)), "09:30 AM");
}

#[test]
fn format_clock_handles_midnight_and_noon() {
    assert_eq!(format_clock(hm(0, 0)), "12:00 AM");
    assert_eq!(format_clock(hm(12, 0)), "12:00 PM");
}

#[test]
fn local_clock_has_meridiem_suffix() {
    let now = local_clock();
    assert!(now.ends_with("AM") || now.ends_with("PM"), "{now}");
    assert_eq!(now.len(), "00:00 AM".len());
}

// =============================================================
// format_post_date
// =============================================================

#[test]
fn format_post_date_renders_short_month() {
    assert_eq!(format_post_date("2025-07-14"), "Jul 14, 2025");
    assert_eq!(format_post_date("2025-06-29"), "Jun 29, 2025");
}

#[test]
fn format_post_date_drops_day_padding() {
    assert_eq!(format_post_date("2025-07-06"), "Jul 6, 2025");
}

#[test]
fn format_post_date_passes_through_unparseable_input() {
    assert_eq!(format_post_date("someday"), "someday");
    assert_eq!(format_post_date("2025-13-01"), "2025-13-01");
    assert_eq!(format_post_date(""), "");
}
