//! Duration argument parsing.

use chrono::TimeDelta;

/// Parses a signed duration string like "1h30m", "90s", "1500ms" or "-2m".
///
/// A trailing bare number is taken as seconds.
pub fn parse_duration(s: &str) -> anyhow::Result<TimeDelta> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if body.is_empty() {
        anyhow::bail!("empty duration: {:?}", s);
    }

    let mut total_ms: i64 = 0;
    let mut current_num = String::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }

        let num: i64 = current_num
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid number in duration: {}", s))?;
        current_num.clear();

        let unit_ms = match c {
            'h' => 3_600_000,
            'm' if chars.peek() == Some(&'s') => {
                chars.next();
                1
            }
            'm' => 60_000,
            's' => 1_000,
            _ => anyhow::bail!("invalid duration unit '{}' in: {}", c, s),
        };
        total_ms = num
            .checked_mul(unit_ms)
            .and_then(|ms| total_ms.checked_add(ms))
            .ok_or_else(|| anyhow::anyhow!("duration out of range: {}", s))?;
    }

    if !current_num.is_empty() {
        let num: i64 = current_num
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid number in duration: {}", s))?;
        total_ms = num
            .checked_mul(1_000)
            .and_then(|ms| total_ms.checked_add(ms))
            .ok_or_else(|| anyhow::anyhow!("duration out of range: {}", s))?;
    }

    if negative {
        total_ms = -total_ms;
    }
    TimeDelta::try_milliseconds(total_ms)
        .ok_or_else(|| anyhow::anyhow!("duration out of range: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("1h").unwrap().num_seconds(), 3600);
        assert_eq!(parse_duration("30m").unwrap().num_seconds(), 1800);
        assert_eq!(parse_duration("45s").unwrap().num_seconds(), 45);
        assert_eq!(parse_duration("1h30m45s").unwrap().num_seconds(), 5445);
        assert_eq!(parse_duration("90").unwrap().num_seconds(), 90);
        assert_eq!(parse_duration("+5s").unwrap().num_seconds(), 5);
    }

    #[test]
    fn test_parse_duration_millis() {
        let d = parse_duration("1500ms").unwrap();
        assert_eq!(d.num_milliseconds(), 1500);
        assert_eq!(d.num_seconds(), 1);

        let d = parse_duration("-1500ms").unwrap();
        assert_eq!(d.num_milliseconds(), -1500);
        assert_eq!(d.num_seconds(), -1);

        assert_eq!(parse_duration("1m500ms").unwrap().num_milliseconds(), 60_500);
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("-").is_err());
        assert!(parse_duration("5d").is_err());
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("99999999999999999h").is_err());
    }
}
