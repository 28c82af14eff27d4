// Error taxonomy for the motif engine.
//
// There is exactly one error family: `InvalidParameter`. The generators do
// no I/O, parse no untrusted formats, and have no asynchronous failure mode,
// so nothing else can go wrong. Errors surface immediately at the call site;
// there is no retry (nothing transient exists) and no fallback to
// non-deterministic output — that would break the engine's one guarantee.

use thiserror::Error;

/// An out-of-domain argument from the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotifError {
    /// The named parameter was outside its documented domain.
    #[error("invalid parameter `{what}`: {detail}")]
    InvalidParameter {
        /// Which parameter was rejected.
        what: &'static str,
        /// What was wrong with it, including the offending value.
        detail: String,
    },
}

impl MotifError {
    /// Construct an `InvalidParameter` error.
    pub fn invalid(what: &'static str, detail: impl Into<String>) -> Self {
        MotifError::InvalidParameter {
            what,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_parameter_and_value() {
        let err = MotifError::invalid("percent", "150 is above 100");
        assert_eq!(
            err.to_string(),
            "invalid parameter `percent`: 150 is above 100"
        );
    }
}
