//! Converters between domain models and the shared DTOs.
//!
//! Handlers stay free of field-by-field conversion code; every
//! domain-to-wire translation lives here.

pub mod assessment_mapper;
pub mod checkin_mapper;
pub mod pregnancy_mapper;
pub mod profile_mapper;
pub mod reminder_mapper;
