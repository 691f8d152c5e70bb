use crate::domain::models::pregnancy::{BabySizeEntry, PregnancyInfo};
use shared::{BabySize, PregnancyProgress};

pub struct PregnancyMapper;

impl PregnancyMapper {
    /// Convert a domain size table entry to the shared BabySize DTO
    pub fn baby_size_to_dto(entry: &BabySizeEntry) -> BabySize {
        BabySize {
            week: entry.week,
            name: entry.name.to_string(),
            emoji: entry.emoji.to_string(),
            size: entry.size.to_string(),
        }
    }

    /// Convert a domain progress snapshot to the shared PregnancyProgress DTO
    pub fn to_progress_dto(info: PregnancyInfo) -> PregnancyProgress {
        PregnancyProgress {
            current_week: info.current_week,
            current_day: info.current_day,
            trimester: info.trimester.number(),
            trimester_label: info.trimester.label().to_string(),
            days_remaining: info.days_remaining,
            progress_percentage: info.progress_percentage,
            baby_size: Self::baby_size_to_dto(info.baby_size),
        }
    }
}
