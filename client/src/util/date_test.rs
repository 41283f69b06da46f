use super::*;

#[test]
fn formats_utc_timestamp() {
    assert_eq!(format_last_updated("2024-01-02T00:00:00Z"), "Jan 2nd 24");
}

#[test]
fn formats_naive_backend_timestamp_with_micros() {
    assert_eq!(format_last_updated("2023-11-21T17:45:09.123456"), "Nov 21st 23");
}

#[test]
fn formats_naive_timestamp_without_fraction() {
    assert_eq!(format_last_updated("2025-03-03T08:00:00"), "Mar 3rd 25");
}

#[test]
fn keeps_date_in_own_offset() {
    assert_eq!(format_last_updated("2024-07-04T23:30:00-05:00"), "Jul 4th 24");
}

#[test]
fn accepts_offset_without_colon() {
    assert_eq!(format_last_updated("2024-01-02T10:00:00+0000"), "Jan 2nd 24");
    assert_eq!(format_last_updated("2024-07-04T23:30:00.5-0500"), "Jul 4th 24");
}

#[test]
fn accepts_space_separated_naive_timestamp() {
    assert_eq!(format_last_updated("2024-01-02 10:00:00"), "Jan 2nd 24");
    assert_eq!(format_last_updated("2023-11-21 17:45:09.123456"), "Nov 21st 23");
}

#[test]
fn formats_plain_date() {
    assert_eq!(format_last_updated("2030-12-12"), "Dec 12th 30");
}

#[test]
fn unparseable_input_is_invalid_date() {
    assert_eq!(format_last_updated("yesterday"), INVALID_DATE);
    assert_eq!(format_last_updated(""), INVALID_DATE);
}

#[test]
fn ordinal_suffixes() {
    let cases = [
        (1, "st"),
        (2, "nd"),
        (3, "rd"),
        (4, "th"),
        (11, "th"),
        (12, "th"),
        (13, "th"),
        (21, "st"),
        (22, "nd"),
        (23, "rd"),
        (30, "th"),
        (31, "st"),
    ];
    for (day, suffix) in cases {
        assert_eq!(ordinal_suffix(day), suffix, "day {day}");
    }
}
