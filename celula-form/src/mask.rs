//! Input formatters
//!
//! Pure functions that reformat raw keystrokes into their canonical display
//! form. Formatters never fail: any input produces a best-effort string.

/// Significant digits in a Brazilian mobile number (DD + 9 digits)
const PHONE_MAX_DIGITS: usize = 11;

/// Strip everything but ASCII digits
///
/// Shared by the display mask, the validator (digit count), and the wire
/// coercion. No truncation here.
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Apply the Brazilian phone display mask
///
/// - 0 digits → empty string
/// - 1–2 digits → `(DD`
/// - 3–7 digits → `(DD) DDDDD`
/// - 8+ digits → `(DD) DDDDD-DDDD`, truncated to 11 significant digits
///
/// Applied on every keystroke; idempotent when re-applied to its own output.
pub fn phone_mask(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_MAX_DIGITS)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Format a picked time as zero-padded 24-hour `HH:MM`
///
/// Out-of-range components wrap into range rather than erroring (formatters
/// are total); the time-selection control only produces valid components.
pub fn format_time(hour: u8, minute: u8) -> String {
    format!("{:02}:{:02}", hour % 24, minute % 60)
}

/// Strict 24-hour `HH:MM` check: two-digit hour 00–23, two-digit minute 00–59
pub fn is_valid_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return false;
    }
    let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hour <= 23 && minute <= 59
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_mask_stages() {
        assert_eq!(phone_mask(""), "");
        assert_eq!(phone_mask("6"), "(6");
        assert_eq!(phone_mask("65"), "(65");
        assert_eq!(phone_mask("659"), "(65) 9");
        assert_eq!(phone_mask("6599612"), "(65) 99612");
        assert_eq!(phone_mask("65996128"), "(65) 99612-8");
        assert_eq!(phone_mask("65996128425"), "(65) 99612-8425");
    }

    #[test]
    fn test_phone_mask_truncates_to_eleven_digits() {
        assert_eq!(phone_mask("659961284259999"), "(65) 99612-8425");
    }

    #[test]
    fn test_phone_mask_ignores_non_digits() {
        assert_eq!(phone_mask("(65) 99612-8425"), "(65) 99612-8425");
        assert_eq!(phone_mask("65 9961 2842 5"), "(65) 99612-8425");
        assert_eq!(phone_mask("abc"), "");
    }

    #[test]
    fn test_phone_mask_is_idempotent() {
        let inputs = ["", "6", "65", "659", "6599612", "65996128425", "abc123"];
        for input in inputs {
            let once = phone_mask(input);
            assert_eq!(phone_mask(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_phone_digits() {
        assert_eq!(phone_digits("(65) 99612-8425"), "65996128425");
        assert_eq!(phone_digits(""), "");
        // No truncation for validation input
        assert_eq!(phone_digits("123456789012"), "123456789012");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(9, 5), "09:05");
        assert_eq!(format_time(23, 59), "23:59");
        assert_eq!(format_time(0, 0), "00:00");
    }

    #[test]
    fn test_is_valid_time() {
        assert!(is_valid_time("23:59"));
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("09:05"));

        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("9:5"));
        assert!(!is_valid_time("9:05"));
        assert!(!is_valid_time("19:60"));
        assert!(!is_valid_time("19-30"));
        assert!(!is_valid_time(""));
    }
}
