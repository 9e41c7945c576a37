/// Format milliseconds as `min:sec:ms` for log output
///
/// Minutes wrap at 60, so an hour-long performance reads as `0:0:0`.
pub fn format_ms(ms: f64) -> String {
    let sign = if ms < 0.0 { "-" } else { "" };
    let ms = ms.abs();
    let millis = (ms % 1000.0).floor() as u64;
    let secs = (ms / 1000.0).floor() as u64 % 60;
    let mins = (ms / 60_000.0).floor() as u64 % 60;
    format!("{}{}:{}:{}", sign, mins, secs, millis)
}
