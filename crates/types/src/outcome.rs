use serde::{Deserialize, Serialize};

/// How a single execution of an action ended.
///
/// Actions never return errors to their caller. The outcome mirrors what was
/// written into the action's output holders so callers and logs can tell the
/// cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The service reported the workload model as finished; the link was written.
    Finished { link: String, attempts: u32 },
    /// The wait bound was exceeded before the model finished; the link was written anyway.
    TimedOut { link: String, attempts: u32 },
    /// The create response carried no link; nothing was written.
    NoLink { message: String },
    /// A transport or unexpected error occurred; the broken flag was set.
    Broken { reason: String },
}

impl StepOutcome {
    /// Returns true if the run was marked broken.
    pub fn is_broken(&self) -> bool {
        matches!(self, StepOutcome::Broken { .. })
    }

    /// The link written to the output holder, if any.
    pub fn link(&self) -> Option<&str> {
        match self {
            StepOutcome::Finished { link, .. } | StepOutcome::TimedOut { link, .. } => Some(link),
            StepOutcome::NoLink { .. } | StepOutcome::Broken { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::StepOutcome;

    #[test]
    fn outcome_serializes_with_snake_case_tag() {
        let outcome = StepOutcome::TimedOut {
            link: "abc123".into(),
            attempts: 181,
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"outcome": "timed_out", "link": "abc123", "attempts": 181})
        );
        assert_eq!(outcome.link(), Some("abc123"));
        assert!(!outcome.is_broken());
    }

    #[test]
    fn broken_and_no_link_carry_no_link() {
        let broken = StepOutcome::Broken { reason: "boom".into() };
        let no_link = StepOutcome::NoLink { message: "rejected".into() };
        assert!(broken.is_broken());
        assert_eq!(broken.link(), None);
        assert_eq!(no_link.link(), None);
    }
}
