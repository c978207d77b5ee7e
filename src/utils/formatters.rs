// Formatting utilities

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Truncate string to max length (in characters) with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// "Yes" / "No" for table flags
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Integer percentage of `part` in `total`, ties round to even.
/// Callers must check `total > 0`.
pub fn percent_of(part: u128, total: u128) -> u8 {
    debug_assert!(total > 0);
    let scaled = part.saturating_mul(100);
    let quotient = scaled / total;
    let twice_rem = (scaled % total) * 2;

    let rounded = if twice_rem > total || (twice_rem == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1000000), "1,000,000");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("Nepomniachtchi", 6), "Nep...");
        assert_eq!(truncate("Ørnulf Åsmundsen", 7), "Ørnu...");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(300, 400), 75);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(0, 7), 0);
        assert_eq!(percent_of(7, 7), 100);
    }

    #[test]
    fn test_percent_of_beyond_u64() {
        let max = u64::MAX as u128;
        assert_eq!(percent_of(max, max * 2), 50);
        assert_eq!(percent_of(max, max + 1), 100);
        assert_eq!(percent_of(1, max + 1), 0);
    }

    #[test]
    fn test_percent_of_ties_to_even() {
        // 12.5 -> 12, 37.5 -> 38
        assert_eq!(percent_of(1, 8), 12);
        assert_eq!(percent_of(3, 8), 38);
        // 0.5 -> 0
        assert_eq!(percent_of(1, 200), 0);
    }
}
