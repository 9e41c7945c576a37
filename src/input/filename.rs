use crate::error::{PlayerError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::path::Path;

/// Minimum digit runs needed: year, month, day, hour, minute, second
const REQUIRED_RUNS: usize = 6;

/// Split a name into its runs of ASCII digits
pub fn digit_runs(name: &str) -> Vec<&str> {
    name.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

/// Parse a timestamp embedded in a log file name
///
/// Only the file stem is inspected, so digits in parent directories and the
/// extension are ignored. The first six digit runs are read as
/// `year month day hour minute second`, an optional seventh as the fraction of
/// a second. The result is interpreted as UTC.
pub fn parse_filename_timestamp(path: &Path) -> Result<DateTime<Utc>> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PlayerError::TimestampParse(path.display().to_string()))?;

    let mut runs = digit_runs(stem);
    if runs.len() < REQUIRED_RUNS {
        return Err(PlayerError::TimestampParse(path.display().to_string()));
    }
    if runs.len() == REQUIRED_RUNS {
        runs.push("000");
    }

    let formatted = format!(
        "{}-{}-{}T{}:{}:{}.{}",
        runs[0], runs[1], runs[2], runs[3], runs[4], runs[5], runs[6]
    );

    NaiveDateTime::parse_from_str(&formatted, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| PlayerError::TimestampParse(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs() {
        assert_eq!(
            digit_runs("2024-03-01T14:30:00"),
            vec!["2024", "03", "01", "14", "30", "00"]
        );
        assert_eq!(digit_runs("no digits"), Vec::<&str>::new());
        assert_eq!(digit_runs("a1b22c333"), vec!["1", "22", "333"]);
    }

    #[test]
    fn test_parse_iso_like_name() {
        let parsed = parse_filename_timestamp(Path::new("2024-03-01T14:30:00.txt")).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_with_millis() {
        let parsed = parse_filename_timestamp(Path::new("mercury_2024-03-01_14-30-00-250.txt")).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_directory_digits_ignored() {
        let parsed = parse_filename_timestamp(Path::new("logs/2023/set 12/2024-03-01 14.30.05.txt")).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 5).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_too_few_runs() {
        let err = parse_filename_timestamp(Path::new("take-3_14-30.txt")).unwrap_err();
        assert!(matches!(err, PlayerError::TimestampParse(_)));
    }

    #[test]
    fn test_invalid_date() {
        let err = parse_filename_timestamp(Path::new("2024-13-01T14:30:00.txt")).unwrap_err();
        assert!(matches!(err, PlayerError::TimestampParse(_)));
    }
}
