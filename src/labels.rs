//! Roman numeral and alphabetic label helpers.
//!
//! Canto numbers are printed and cited in Roman numerals (`Inferno XXXIV`),
//! and rhyme labels use the bijective base-26 alphabet (`a`..`z`, `aa`, `ab`, ...).

const NUMERALS: [(u32, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Format a number as a Roman numeral. Zero formats as an empty string.
pub fn to_roman(mut n: u32, uppercase: bool) -> String {
    let mut result = String::new();

    for (value, numeral) in NUMERALS.iter() {
        while n >= *value {
            result.push_str(numeral);
            n -= value;
        }
    }

    if uppercase {
        result.to_uppercase()
    } else {
        result
    }
}

/// Parse a Roman numeral in canonical subtractive form, either case.
///
/// Non-canonical spellings such as `iiii` or `vx` are rejected, so that a
/// stray word in a citation is never mistaken for a number.
pub fn parse_roman(text: &str) -> Option<u32> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    let mut rest = lower.as_str();
    let mut value = 0u32;
    for (numeral_value, numeral) in NUMERALS.iter() {
        while let Some(tail) = rest.strip_prefix(numeral) {
            value += numeral_value;
            rest = tail;
        }
    }

    if !rest.is_empty() || value == 0 {
        return None;
    }

    // Greedy decoding accepts some non-canonical forms; round-trip to reject them.
    if to_roman(value, false) == lower {
        Some(value)
    } else {
        None
    }
}

/// Format a 1-based index as a bijective base-26 label (`1 → a`, `27 → aa`).
pub fn to_alpha(mut n: u32, uppercase: bool) -> String {
    if n == 0 {
        return String::new();
    }

    let mut result = String::new();
    let base = if uppercase { b'A' } else { b'a' };

    while n > 0 {
        n -= 1;
        let c = (base + (n % 26) as u8) as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}
