//! Domain model for a completed EPDS mood assessment.
//!
//! Holds the persisted record plus the fixed question catalog. The
//! Edinburgh Postnatal Depression Scale is always ten questions, asked
//! and scored in the same order, so the catalog is a static table and
//! everything downstream works with positional answer arrays.
use serde::{Deserialize, Serialize};

/// Number of questions on the scale
pub const QUESTION_COUNT: usize = 10;

/// Highest score a single answer can carry
pub const MAX_ANSWER_SCORE: u8 = 3;

/// Question identifiers in submission order.
///
/// The scoring endpoint expects answers positionally, so this order is
/// part of the wire contract and never changes.
pub const QUESTION_IDS: [&str; QUESTION_COUNT] = [
    "laughing",
    "enjoyment",
    "blaming",
    "anxious",
    "scared",
    "overwhelmed",
    "sleeping",
    "sad",
    "crying",
    "selfharm",
];

/// One question on the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpdsQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
}

/// The full questionnaire, in submission order.
pub const QUESTIONS: [EpdsQuestion; QUESTION_COUNT] = [
    EpdsQuestion {
        id: "laughing",
        prompt: "I have been able to laugh and see the funny side of things",
    },
    EpdsQuestion {
        id: "enjoyment",
        prompt: "I have looked forward with enjoyment to things",
    },
    EpdsQuestion {
        id: "blaming",
        prompt: "I have blamed myself unnecessarily when things went wrong",
    },
    EpdsQuestion {
        id: "anxious",
        prompt: "I have been anxious or worried for no good reason",
    },
    EpdsQuestion {
        id: "scared",
        prompt: "I have felt scared or panicky for no very good reason",
    },
    EpdsQuestion {
        id: "overwhelmed",
        prompt: "Things have been getting on top of me",
    },
    EpdsQuestion {
        id: "sleeping",
        prompt: "I have been so unhappy that I have had difficulty sleeping",
    },
    EpdsQuestion {
        id: "sad",
        prompt: "I have felt sad or miserable",
    },
    EpdsQuestion {
        id: "crying",
        prompt: "I have been so unhappy that I have been crying",
    },
    EpdsQuestion {
        id: "selfharm",
        prompt: "The thought of harming myself has occurred to me",
    },
];

/// Where an assessment's score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Scored by the remote EPDS service
    Remote,
    /// Plain local sum of answers, recorded when the remote service
    /// was unreachable and the caller opted into the fallback
    LocalSum,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::Remote => "remote",
            ScoreSource::LocalSum => "local_sum",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "remote" => Some(ScoreSource::Remote),
            "local_sum" => Some(ScoreSource::LocalSum),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAssessment {
    pub id: String,
    pub profile_id: String,
    /// Answers in question order, each 0..=3
    pub responses: Vec<u8>,
    pub epds_score: i64,
    pub risk_level: String,
    /// Free-text summary from the scoring service, when it sent one
    pub assessment: Option<String>,
    pub anxiety_flag: Option<bool>,
    /// Recommended actions from the scoring service
    pub actions: Vec<String>,
    pub additional_actions: Vec<String>,
    pub score_source: ScoreSource,
    pub submitted_at: String, // RFC 3339 timestamp
}

impl DomainAssessment {
    /// Generate an assessment ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("assessment::{}", epoch_millis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerValidationError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),
    #[error("Answer for {question} must be between 0 and 3, got {value}")]
    ScoreOutOfRange { question: String, value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_catalog_order_is_fixed() {
        let ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, QUESTION_IDS.to_vec());
        assert_eq!(QUESTIONS.len(), 10);
        assert_eq!(QUESTION_IDS[0], "laughing");
        assert_eq!(QUESTION_IDS[9], "selfharm");
    }

    #[test]
    fn test_score_source_round_trip() {
        assert_eq!(ScoreSource::Remote.as_str(), "remote");
        assert_eq!(ScoreSource::LocalSum.as_str(), "local_sum");
        assert_eq!(ScoreSource::from_str("remote"), Some(ScoreSource::Remote));
        assert_eq!(ScoreSource::from_str("local_sum"), Some(ScoreSource::LocalSum));
        assert_eq!(ScoreSource::from_str("guess"), None);
    }
}
