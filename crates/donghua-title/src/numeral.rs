//! Chinese numeral conversion.
//!
//! Converts a contiguous run of Chinese numeral characters (digits plus the
//! 十/百/千/万 multipliers) into its decimal value. Callers are expected to
//! pass a maximal numeral run already cut out of a title by the noise
//! filter; any character outside the numeral vocabulary is an error rather
//! than a silent wrong answer.

use phf::phf_map;

/// Digit characters and their values. 两 is accepted as the spoken-form
/// variant of 二 (e.g. 两百 = 200).
static DIGITS: phf::Map<char, u64> = phf_map! {
    '零' => 0,
    '〇' => 0,
    '一' => 1,
    '二' => 2,
    '两' => 2,
    '三' => 3,
    '四' => 4,
    '五' => 5,
    '六' => 6,
    '七' => 7,
    '八' => 8,
    '九' => 9,
};

/// Multiplier characters and their values.
static UNITS: phf::Map<char, u64> = phf_map! {
    '十' => 10,
    '百' => 100,
    '千' => 1_000,
    '万' => 10_000,
};

/// Error converting a Chinese numeral run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The input run was empty.
    #[error("empty numeral run")]
    Empty,

    /// A character outside the recognized numeral vocabulary appeared.
    #[error("unrecognized numeral character '{0}'")]
    UnrecognizedChar(char),
}

/// Convert a run of Chinese numeral characters to its decimal value.
///
/// Handles both positional runs (一九八四 → 1984) and unit-based numbers
/// (三千零二十 → 3020). A leading 十 is treated as 一十 (十二 → 12).
///
/// # Examples
///
/// ```
/// use donghua_title::numeral::to_decimal;
///
/// assert_eq!(to_decimal("十二").unwrap(), 12);
/// assert_eq!(to_decimal("二十").unwrap(), 20);
/// assert_eq!(to_decimal("一百零五").unwrap(), 105);
/// assert!(to_decimal("第").is_err());
/// ```
pub fn to_decimal(input: &str) -> Result<u64, NumeralError> {
    if input.is_empty() {
        return Err(NumeralError::Empty);
    }

    // total: completed 万-sections; section: units below 万; current: the
    // pending digit run that has not yet met a multiplier.
    let mut total: u64 = 0;
    let mut section: u64 = 0;
    let mut current: u64 = 0;

    for ch in input.chars() {
        if let Some(&value) = DIGITS.get(&ch) {
            current = current * 10 + value;
        } else if let Some(&unit) = UNITS.get(&ch) {
            if unit == 10_000 {
                let mut high = section + current;
                if high == 0 {
                    high = 1;
                }
                total += high * 10_000;
                section = 0;
                current = 0;
            } else {
                // Bare multiplier implies one of it: 十二 is 一十二.
                let factor = if current == 0 { 1 } else { current };
                section += factor * unit;
                current = 0;
            }
        } else {
            return Err(NumeralError::UnrecognizedChar(ch));
        }
    }

    Ok(total + section + current)
}
