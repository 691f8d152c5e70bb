use crate::domain::models::assessment::{DomainAssessment, EpdsQuestion};
use shared::{MoodAssessment, MoodQuestion};

pub struct AssessmentMapper;

impl AssessmentMapper {
    /// Convert domain DomainAssessment to shared MoodAssessment DTO
    pub fn to_dto(domain: DomainAssessment) -> MoodAssessment {
        MoodAssessment {
            id: domain.id,
            profile_id: domain.profile_id,
            responses: domain.responses,
            epds_score: domain.epds_score,
            risk_level: domain.risk_level,
            assessment: domain.assessment,
            anxiety_flag: domain.anxiety_flag,
            actions: domain.actions,
            additional_actions: domain.additional_actions,
            score_source: domain.score_source.as_str().to_string(),
            submitted_at: domain.submitted_at,
        }
    }

    /// Convert Vec<DomainAssessment> to Vec<MoodAssessment>
    pub fn to_dto_list(domain_assessments: Vec<DomainAssessment>) -> Vec<MoodAssessment> {
        domain_assessments.into_iter().map(Self::to_dto).collect()
    }

    /// Convert a catalog question to the shared MoodQuestion DTO
    pub fn question_to_dto(question: &EpdsQuestion) -> MoodQuestion {
        MoodQuestion {
            id: question.id.to_string(),
            prompt: question.prompt.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::assessment::{ScoreSource, QUESTIONS};

    fn sample_domain_assessment() -> DomainAssessment {
        DomainAssessment {
            id: "assessment::1702516122000".to_string(),
            profile_id: "profile::1702516000000".to_string(),
            responses: vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1],
            epds_score: 13,
            risk_level: "Moderate".to_string(),
            assessment: Some("Signs of possible depression".to_string()),
            anxiety_flag: Some(true),
            actions: vec!["Contact your provider".to_string()],
            additional_actions: vec![],
            score_source: ScoreSource::Remote,
            submitted_at: "2025-12-14T01:02:02+00:00".to_string(),
        }
    }

    #[test]
    fn test_to_dto() {
        let domain = sample_domain_assessment();
        let dto = AssessmentMapper::to_dto(domain.clone());

        assert_eq!(dto.id, domain.id);
        assert_eq!(dto.responses, domain.responses);
        assert_eq!(dto.epds_score, 13);
        assert_eq!(dto.score_source, "remote");
        assert_eq!(dto.anxiety_flag, Some(true));
    }

    #[test]
    fn test_local_sum_source_spelling() {
        let mut domain = sample_domain_assessment();
        domain.score_source = ScoreSource::LocalSum;

        let dto = AssessmentMapper::to_dto(domain);

        assert_eq!(dto.score_source, "local_sum");
    }

    #[test]
    fn test_question_to_dto() {
        let dto = AssessmentMapper::question_to_dto(&QUESTIONS[0]);

        assert_eq!(dto.id, "laughing");
        assert!(!dto.prompt.is_empty());
    }
}
