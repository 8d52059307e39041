/// Whole seconds between two `Date.now()` readings. Clock skew backwards reads as zero.
#[inline]
pub fn elapsed_secs(start_ms: f64, now_ms: f64) -> u64 {
    ((now_ms - start_ms) / 1000.0).floor().max(0.0) as u64
}

/// `HH:MM:SS`. Hours are not wrapped, so a long session shows `100:00:00`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}
