//! Small helpers shared by the reader and the command-line front end.

use super::types::error::{MptError, Result};

/// Maps a digit value to its display character: `0-9`, then `A` upward.
pub fn digit_to_char(digit: u8) -> char {
    if digit < 10 {
        (b'0' + digit) as char
    } else {
        (b'A' + digit - 10) as char
    }
}

/// Parses a 1-based digit position.
///
/// Plain integers are taken as-is; decimal and scientific notation
/// (`1e9`, `2.5e3`) is accepted as long as it denotes a positive whole number.
pub fn parse_position(text: &str) -> Result<u64> {
    let text = text.trim();
    let invalid = || MptError::InvalidOption(format!("Invalid digit position: '{}'", text));

    let position = match text.parse::<u64>() {
        Ok(position) => position,
        Err(_) => {
            let value: f64 = text.parse().map_err(|_| invalid())?;
            // u64::MAX rounds up to 2^64 as f64, which no u64 can hold.
            let in_range = value >= 0.0 && value < u64::MAX as f64;
            if !value.is_finite() || value.fract() != 0.0 || !in_range {
                return Err(invalid());
            }
            value as u64
        }
    };
    if position == 0 {
        return Err(invalid());
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_upper_case_alphanumerics() {
        assert_eq!(digit_to_char(0), '0');
        assert_eq!(digit_to_char(9), '9');
        assert_eq!(digit_to_char(10), 'A');
        assert_eq!(digit_to_char(15), 'F');
        assert_eq!(digit_to_char(31), 'V');
    }

    #[test]
    fn positions_accept_scientific_notation() {
        assert_eq!(parse_position("1").unwrap(), 1);
        assert_eq!(parse_position(" 1000 ").unwrap(), 1000);
        assert_eq!(parse_position("1e9").unwrap(), 1_000_000_000);
        assert_eq!(parse_position("2.5e3").unwrap(), 2500);
    }

    #[test]
    fn positions_must_be_positive_whole_numbers() {
        for bad in ["0", "-3", "1.5", "abc", "inf", "", "1.8446744073709552e19"] {
            assert!(parse_position(bad).is_err(), "accepted {:?}", bad);
        }
    }
}
