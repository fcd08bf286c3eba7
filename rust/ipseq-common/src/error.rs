use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_prefix_len(prefix_len: u32, bit_count: u32) -> Error {
        Error(
            ErrorKind::InvalidPrefixLength {
                prefix_len,
                bit_count,
            }
            .into(),
        )
    }

    pub fn mixed_families(lower: impl ToString, upper: impl ToString) -> Error {
        Error(
            ErrorKind::MixedFamilies {
                lower: lower.to_string(),
                upper: upper.to_string(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error reports an out-of-domain prefix length.
    pub fn is_invalid_prefix_len(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidPrefixLength { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid prefix length {prefix_len}, must be at most {bit_count}")]
    InvalidPrefixLength { prefix_len: u32, bit_count: u32 },

    #[error("addresses '{lower}' and '{upper}' belong to different address families")]
    MixedFamilies { lower: String, upper: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
