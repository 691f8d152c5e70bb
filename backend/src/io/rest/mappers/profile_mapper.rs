use crate::domain::models::profile::DomainProfile;
use shared::Profile;

pub struct ProfileMapper;

impl ProfileMapper {
    /// Convert domain DomainProfile to shared Profile DTO
    pub fn to_dto(domain: DomainProfile) -> Profile {
        Profile {
            id: domain.id,
            name: domain.name,
            stage: domain.stage,
            due_date: domain.due_date,
            current_week: domain.current_week,
            week_recorded_at: domain.week_recorded_at,
            baby_birthdate: domain.baby_birthdate,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }

    /// Convert Vec<DomainProfile> to Vec<Profile>
    pub fn to_dto_list(domain_profiles: Vec<DomainProfile>) -> Vec<Profile> {
        domain_profiles.into_iter().map(Self::to_dto).collect()
    }
}
