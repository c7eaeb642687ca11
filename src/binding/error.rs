use thiserror::Error;

/// Errors from building binding keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("`{name}` is not a valid {what}")]
    InvalidName { name: String, what: &'static str },

    #[error("key `{key}` is not {expected}")]
    WrongKeyKind { key: String, expected: &'static str },

    #[error("an array type needs at least one dimension")]
    ZeroDimensions,

    #[error("adding {added} dimensions to {inner} overflows")]
    TooManyDimensions { inner: u32, added: u32 },

    #[error("`{key}` already has type arguments")]
    AlreadyParameterized { key: String },

    #[error("{kind:?} wildcard {problem}")]
    WildcardBound {
        kind: super::key::WildcardKind,
        problem: &'static str,
    },
}

pub type BindingResult<T> = Result<T, BindingError>;

impl BindingError {
    pub(crate) fn wrong_kind(key: &str, expected: &'static str) -> Self {
        Self::WrongKeyKind {
            key: key.to_string(),
            expected,
        }
    }

    pub(crate) fn invalid_name(name: &str, what: &'static str) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            what,
        }
    }
}
