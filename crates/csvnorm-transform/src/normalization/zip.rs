//! ZIP code normalization.

/// Left-pad a zip code with ASCII `0` until it is five characters long.
///
/// Values of five or more characters are returned unchanged (no
/// truncation); an empty value yields `00000`.
pub fn normalize_zip(value: &str) -> String {
    format!("{value:0>5}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_zips_are_zero_padded() {
        assert_eq!(normalize_zip("1"), "00001");
        assert_eq!(normalize_zip("123"), "00123");
        assert_eq!(normalize_zip(""), "00000");
    }

    #[test]
    fn five_or_more_characters_pass_through() {
        assert_eq!(normalize_zip("12345"), "12345");
        assert_eq!(normalize_zip("123456"), "123456");
    }

    #[test]
    fn padding_is_idempotent() {
        assert_eq!(normalize_zip(&normalize_zip("42")), "00042");
    }

    #[test]
    fn non_digit_input_is_still_padded() {
        // The rule is purely positional; it does not validate digits.
        assert_eq!(normalize_zip("ab"), "000ab");
    }
}
