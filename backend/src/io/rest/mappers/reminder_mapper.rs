use crate::domain::models::reminder::DomainReminder;
use shared::Reminder;

pub struct ReminderMapper;

impl ReminderMapper {
    /// Convert domain DomainReminder to shared Reminder DTO
    pub fn to_dto(domain: DomainReminder) -> Reminder {
        Reminder {
            id: domain.id,
            profile_id: domain.profile_id,
            title: domain.title,
            time_of_day: domain.time_of_day,
            day_of_week: domain.day_of_week,
            is_active: domain.is_active,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }

    /// Convert Vec<DomainReminder> to Vec<Reminder>
    pub fn to_dto_list(domain_reminders: Vec<DomainReminder>) -> Vec<Reminder> {
        domain_reminders.into_iter().map(Self::to_dto).collect()
    }
}
