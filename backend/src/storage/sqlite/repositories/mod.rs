//! SQLite-backed repository implementations.

pub mod assessment_repository;
pub mod checkin_repository;
pub mod profile_repository;
pub mod reminder_repository;

pub use assessment_repository::AssessmentRepository;
pub use checkin_repository::CheckInRepository;
pub use profile_repository::ProfileRepository;
pub use reminder_repository::ReminderRepository;
