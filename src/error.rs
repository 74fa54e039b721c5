use thiserror::Error;

/// Decoding errors. Every error is terminal - an error in a nested value aborts whole
/// decoding, there is no partial result recovery.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum Error {
    #[error("missing string delimiter")]
    DecodeMissingStrDelimiter,
    #[error("string length prefix is not valid")]
    DecodeIncorrectStrLen,
    #[error("missing data needed for string")]
    DecodeNotEnoughChars,
    #[error("missing integer terminal character")]
    DecodeMissingTerminalChars,
    #[error("invalid integer")]
    DecodeUnableConvert,
    #[error("missing end of list")]
    DecodeMissingListEnd,
    #[error("dictionary key has zero length")]
    DecodeZeroLengthKey,
    #[error("nesting too deep")]
    DecodeTooDeep,
    #[error("incorrect character")]
    DecodeIncorrectChar,
    #[error("failed to parse list item: {0}")]
    DecodeListItem(Box<Error>),
    #[error("failed to parse dictionary key: {0}")]
    DecodeDictKey(Box<Error>),
    #[error("failed to parse dictionary value for key {0}: {1}")]
    DecodeDictValue(String, Box<Error>),
}
