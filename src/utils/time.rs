use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Wire format for every timestamp field, e.g. `2024-01-01T09:30:00.000000`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current UTC wall-clock time at the precision the database stores.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// `%Y` alone would also take signed and five-digit years, so the shape is checked first.
pub fn parse_datetime(s: &str) -> anyhow::Result<NaiveDateTime> {
    if !has_fixed_shape(s) {
        anyhow::bail!("timestamp '{}' is not in YYYY-MM-DDTHH:MM:SS.ffffff form", s);
    }
    Ok(NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)?)
}

fn has_fixed_shape(s: &str) -> bool {
    const TEMPLATE: &[u8; 26] = b"0000-00-00T00:00:00.000000";
    s.len() == TEMPLATE.len()
        && s.bytes().zip(TEMPLATE.iter()).all(|(byte, &slot)| match slot {
            b'0' => byte.is_ascii_digit(),
            sep => byte == sep,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_the_fixed_format() {
        let dt = parse_datetime("2024-01-01T09:30:15.250000").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 15, 250_000)
            .unwrap();
        assert_eq!(dt, expected);
        assert_eq!(format_datetime(dt), "2024-01-01T09:30:15.250000");
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(parse_datetime("2024-01-01").is_err());
        assert!(parse_datetime("2024-01-01 09:30:15.000000").is_err());
        assert!(parse_datetime("2024-01-01T09:30:15").is_err());
        assert!(parse_datetime("2024-01-01T09:30:15.000000Z").is_err());
        assert!(parse_datetime("not a date").is_err());
        assert!(parse_datetime("+2024-01-01T00:00:00.000000").is_err());
        assert!(parse_datetime("12024-01-01T00:00:00.000000").is_err());
        assert!(parse_datetime("+262142-12-31T23:59:59.999999").is_err());
        assert!(parse_datetime("2024-1-01T00:00:00.0000000").is_err());
    }

    #[test]
    fn shape_check_still_defers_to_calendar_rules() {
        assert!(parse_datetime("2024-02-30T00:00:00.000000").is_err());
        assert!(parse_datetime("2024-02-29T23:59:59.999999").is_ok());
        assert!(parse_datetime("9999-12-31T23:59:59.999999").is_ok());
    }

    #[test]
    fn now_has_microsecond_precision() {
        assert_eq!(now().nanosecond() % 1_000, 0);
    }
}
