use thiserror::Error;

/// Status ordinal of a completed conversion. Every [`ConvertError`] ordinal
/// compares below this value, so `code() < SUCCESS_CODE` is the single
/// failure test.
pub const SUCCESS_CODE: i8 = 1;

/// Why a conversion was abandoned. The variants are totally ordered by their
/// ordinal, all of them below [`SUCCESS_CODE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Error)]
#[repr(i8)]
pub enum ConvertError {
    /// A continuation byte appeared where a leading byte was required.
    #[error("trailing code unit without a leading one")]
    TrailingWithoutLeading = -3,
    /// A leading byte announced more continuation bytes than the input holds.
    #[error("character cut off at the end of the input")]
    CharacterCutOff = -2,
    /// The input is representable but not standard-compliant, and strict
    /// compliance was requested.
    #[error("input does not comply with the encoding standard")]
    NonStandardEncoding = -1,
    /// A code point or encoded value lies outside the representable range.
    #[error("value outside the representable range")]
    UndefinedError = 0,
}

impl ConvertError {
    /// Numeric status ordinal of this error.
    pub const fn code(self) -> i8 {
        self as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ConvertError; 4] = [
        ConvertError::TrailingWithoutLeading,
        ConvertError::CharacterCutOff,
        ConvertError::NonStandardEncoding,
        ConvertError::UndefinedError,
    ];

    #[test]
    fn every_error_is_below_success() {
        for error in ALL {
            assert!(error.code() < SUCCESS_CODE);
        }
    }

    #[test]
    fn codes_are_ordinal() {
        assert_eq!(ConvertError::TrailingWithoutLeading.code(), -3);
        assert_eq!(ConvertError::CharacterCutOff.code(), -2);
        assert_eq!(ConvertError::NonStandardEncoding.code(), -1);
        assert_eq!(ConvertError::UndefinedError.code(), 0);
    }

    #[test]
    fn variant_order_matches_codes() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].code() < pair[1].code());
        }
    }
}
