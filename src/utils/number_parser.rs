/// Parsea un numero de forma permisiva, igual que lo hace un navegador con `parseFloat`:
/// - se ignoran los espacios iniciales,
/// - se toma el prefijo mas largo que sea un decimal valido (signo, parte fraccionaria,
///   exponente o `Infinity`),
/// - se descarta cualquier texto posterior.
///
/// Si no hay ningun prefijo valido devuelve `NaN`.
pub fn parse_leading_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = trimmed.as_bytes();
    let mut index = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            index += 1;
            true
        }
        Some(b'+') => {
            index += 1;
            false
        }
        _ => false,
    };

    if trimmed[index..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_start = index;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    let integer_digits = &trimmed[integer_start..index];

    let mut fraction_digits = "";
    if index < bytes.len() && bytes[index] == b'.' {
        let fraction_start = index + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        fraction_digits = &trimmed[fraction_start..fraction_end];
        if !integer_digits.is_empty() || !fraction_digits.is_empty() {
            index = fraction_end;
        }
    }

    if integer_digits.is_empty() && fraction_digits.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
        let mut exponent_end = index + 1;
        if exponent_end < bytes.len() && (bytes[exponent_end] == b'+' || bytes[exponent_end] == b'-')
        {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            exponent = &trimmed[index..exponent_end];
        }
    }

    let mut normalized = String::new();
    if negative {
        normalized.push('-');
    }
    if integer_digits.is_empty() {
        normalized.push('0');
    } else {
        normalized.push_str(integer_digits);
    }
    if !fraction_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction_digits);
    }
    normalized.push_str(exponent);

    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_01_plain_numbers() {
        assert_eq!(parse_leading_float("1"), 1.0);
        assert_eq!(parse_leading_float("-34.61716"), -34.61716);
        assert_eq!(parse_leading_float("+2.5"), 2.5);
        assert_eq!(parse_leading_float("1e3"), 1000.0);
        assert_eq!(parse_leading_float("2.5E-1"), 0.25);
    }

    #[test]
    fn test_02_partial_forms() {
        assert_eq!(parse_leading_float(".5"), 0.5);
        assert_eq!(parse_leading_float("-.5"), -0.5);
        assert_eq!(parse_leading_float("5."), 5.0);
    }

    #[test]
    fn test_03_trailing_garbage_is_ignored() {
        assert_eq!(parse_leading_float("2\r"), 2.0);
        assert_eq!(parse_leading_float("12abc"), 12.0);
        assert_eq!(parse_leading_float("3e"), 3.0);
        assert_eq!(parse_leading_float("3e+"), 3.0);
        assert_eq!(parse_leading_float("1.2.3"), 1.2);
    }

    #[test]
    fn test_04_leading_whitespace_is_skipped() {
        assert_eq!(parse_leading_float("   4.25"), 4.25);
        assert_eq!(parse_leading_float("\t-1"), -1.0);
    }

    #[test]
    fn test_05_infinity() {
        assert_eq!(parse_leading_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_leading_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_06_no_valid_prefix_is_nan() {
        assert!(parse_leading_float("").is_nan());
        assert!(parse_leading_float("abc").is_nan());
        assert!(parse_leading_float("-").is_nan());
        assert!(parse_leading_float(".").is_nan());
        assert!(parse_leading_float("e5").is_nan());
    }
}
