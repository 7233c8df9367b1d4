use super::*;

#[test]
fn format_clock_renders_utc_wall_time() {
    // 2024-01-01T12:34:56Z
    assert_eq!(format_clock(1_704_112_496_000.0), "12:34:56");
}

#[test]
fn format_clock_pads_single_digits() {
    // 00:05:09 past midnight.
    assert_eq!(format_clock(309_000.0), "00:05:09");
}

#[test]
fn format_clock_wraps_at_midnight() {
    let one_day_ms = 86_400_000.0;
    assert_eq!(format_clock(one_day_ms + 3_600_000.0), "01:00:00");
}

#[test]
fn format_clock_rejects_garbage_inputs() {
    assert_eq!(format_clock(f64::NAN), "--:--:--");
    assert_eq!(format_clock(f64::INFINITY), "--:--:--");
    assert_eq!(format_clock(-1.0), "--:--:--");
}

#[test]
fn now_ms_is_a_plausible_epoch_timestamp() {
    // Sometime after 2023-01-01.
    assert!(now_ms() > 1_672_531_200_000.0);
}
