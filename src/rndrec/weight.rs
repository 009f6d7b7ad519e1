use super::error::SamplerError;

const GROUPING_CHARS: [char; 2] = [',', '_'];

/// Parses a weight field such as `"4,157,300,000"` or `"1_000"`.
///
/// Grouping punctuation is stripped before parsing. The result has to be a
/// finite number no smaller than zero.
pub fn parse_weight(text: &str, record: usize) -> Result<f64, SamplerError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !GROUPING_CHARS.contains(c))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
        _ => Err(SamplerError::InvalidWeight {
            record,
            text: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped() {
        let test_cases = vec![
            ("20", 20.0),
            ("0", 0.0),
            ("3.318", 3.318),
            ("4,157,300,000", 4_157_300_000.0),
            ("1_000_000", 1_000_000.0),
            (" 42 ", 42.0),
        ];
        for (text, expected) in test_cases {
            let actual = parse_weight(text, 0).unwrap();
            assert_eq!(actual, expected, "Weight {:?} parsed as {}", text, actual);
        }
    }

    #[test]
    fn test_rejects_non_numbers() {
        for text in ["", "abc", "12abc", "-1", "NaN", "inf", "1.2.3"] {
            match parse_weight(text, 3) {
                Err(SamplerError::InvalidWeight { record, text: t }) => {
                    assert_eq!(record, 3);
                    assert_eq!(t, text);
                }
                other => panic!("Weight {:?} unexpectedly gave {:?}", text, other),
            }
        }
    }
}
