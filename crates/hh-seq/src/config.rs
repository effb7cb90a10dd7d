//! Validator configuration.

use serde::{Deserialize, Serialize};

/// What to do with a negative value in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeInputPolicy {
    /// Fail with `HhError::NegativeDegree`.
    #[default]
    Reject,
    /// Report the sequence as not graphical.
    NonGraphical,
}

/// Knobs for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub negative_input: NegativeInputPolicy,
    /// Whether front-ends should capture and show reduction traces.
    pub record_trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reject_negative_input() {
        let config = ValidatorConfig::default();
        assert_eq!(config.negative_input, NegativeInputPolicy::Reject);
        assert!(!config.record_trace);
    }

    #[test]
    fn parse_yaml_partial() {
        let config: ValidatorConfig = serde_yaml::from_str("negative_input: non_graphical\n").unwrap();
        assert_eq!(config.negative_input, NegativeInputPolicy::NonGraphical);
        assert!(!config.record_trace);

        let config: ValidatorConfig = serde_yaml::from_str("record_trace: true\n").unwrap();
        assert_eq!(config.negative_input, NegativeInputPolicy::Reject);
        assert!(config.record_trace);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let parsed: Result<ValidatorConfig, _> = serde_yaml::from_str("negative_input: ignore\n");
        assert!(parsed.is_err());
    }
}
