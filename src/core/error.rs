use thiserror::Error;

/// Why an attack command was rejected at command time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRejection {
    SelfTarget,
    NotAlive,
    OutOfRange,
}

impl std::fmt::Display for TargetRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TargetRejection::SelfTarget => "I cannot attack myself!",
            TargetRejection::NotAlive => "Target is not alive!",
            TargetRejection::OutOfRange => "Target is out of range!",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("{agent}: {reason}")]
    InvalidTarget {
        agent: String,
        reason: TargetRejection,
    },

    #[error("Trying to create agent of unknown type: {0}")]
    UnknownType(String),

    #[error("{0}: Cannot attack!")]
    CannotAttack(String),

    #[error("No agent named {0}")]
    UnknownAgent(String),

    #[error("Agent no longer exists")]
    AgentGone,

    #[error("{0} is dead")]
    AgentDead(String),

    #[error("Name is already in use: {0}")]
    DuplicateName(String),

    #[error("Unrecognized command: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl SimError {
    pub fn invalid_target(agent: impl Into<String>, reason: TargetRejection) -> Self {
        SimError::InvalidTarget {
            agent: agent.into(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_message_names_agent() {
        let err = SimError::invalid_target("Zug", TargetRejection::SelfTarget);
        assert_eq!(err.to_string(), "Zug: I cannot attack myself!");
    }

    #[test]
    fn test_unknown_type_message() {
        let err = SimError::UnknownType("Wizard".into());
        assert!(err.to_string().contains("Wizard"));
    }

    #[test]
    fn test_dead_and_gone_messages() {
        assert_eq!(SimError::AgentDead("Pat".into()).to_string(), "Pat is dead");
        assert_eq!(SimError::AgentGone.to_string(), "Agent no longer exists");
    }
}
