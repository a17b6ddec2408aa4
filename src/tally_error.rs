use thiserror::Error;

/// Why a value has no key form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRejection {
    #[error("unhashable type: 'list'")]
    UnhashableList,
    #[error("NaN is not equal to itself")]
    NotANumber,
}

/// Raised by `try_tally` for the first element that cannot be a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("element {index} cannot be used as a tally key: {reason}")]
pub struct InputKeyError {
    pub index: usize,
    pub reason: KeyRejection,
}
