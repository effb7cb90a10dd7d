use thiserror::Error;

pub type HhResult<T> = Result<T, HhError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HhError {
    #[error("Negative degree at position {index}: {value}")]
    NegativeDegree { index: usize, value: i64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Graph error: {what}")]
    Graph { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

impl HhError {
    /// True for errors caused by the caller's input rather than a logic bug.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, HhError::Invariant { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_degree_message() {
        let err = HhError::NegativeDegree {
            index: 2,
            value: -1,
        };
        assert_eq!(format!("{err}"), "Negative degree at position 2: -1");
        assert!(err.is_caller_error());
    }

    #[test]
    fn invariant_is_not_caller_error() {
        let err = HhError::Invariant {
            what: "decrement below zero",
        };
        assert!(!err.is_caller_error());
        assert!(format!("{err}").contains("Invariant violated"));
    }
}
