use crate::domain::models::checkin::DomainCheckIn;
use shared::CheckIn;

pub struct CheckInMapper;

impl CheckInMapper {
    /// Convert domain DomainCheckIn to shared CheckIn DTO
    pub fn to_dto(domain: DomainCheckIn) -> CheckIn {
        CheckIn {
            id: domain.id,
            profile_id: domain.profile_id,
            age: domain.age,
            systolic: domain.systolic,
            diastolic: domain.diastolic,
            heart_rate: domain.heart_rate,
            blood_sugar: domain.blood_sugar,
            body_temp: domain.body_temp,
            risk_level: domain.risk_level,
            submitted_at: domain.submitted_at,
        }
    }

    /// Convert Vec<DomainCheckIn> to Vec<CheckIn>
    pub fn to_dto_list(domain_checkins: Vec<DomainCheckIn>) -> Vec<CheckIn> {
        domain_checkins.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dto() {
        let domain = DomainCheckIn {
            id: "checkin::1702516122000".to_string(),
            profile_id: "profile::1702516000000".to_string(),
            age: 28,
            systolic: 118,
            diastolic: 76,
            heart_rate: 82,
            blood_sugar: 7.2,
            body_temp: 98.4,
            risk_level: "low risk".to_string(),
            submitted_at: "2025-12-14T01:02:02+00:00".to_string(),
        };

        let dto = CheckInMapper::to_dto(domain.clone());

        assert_eq!(dto.id, domain.id);
        assert_eq!(dto.systolic, 118);
        assert_eq!(dto.blood_sugar, 7.2);
        assert_eq!(dto.risk_level, "low risk");
    }
}
