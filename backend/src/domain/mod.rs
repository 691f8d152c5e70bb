//! # Domain Module
//!
//! Contains all business logic for the wellness tracker application.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how pregnancy progress, mood assessments, and physical
//! check-ins are modeled and managed. It operates independently of any
//! specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **profile_service**: Mother profile CRUD and active-profile tracking
//! - **pregnancy_service**: Progress and baby age calculations
//! - **assessment_service**: Mood questionnaire orchestration, scoring, history
//! - **checkin_service**: Vitals validation, risk prediction, history
//! - **reminder_service**: Wellness reminder CRUD
//! - **assessment_session**: Questionnaire answer collection state machine
//! - **errors**: The submission failure taxonomy shared by both submit flows
//!
//! ## Key Responsibilities
//!
//! - **Profile Management**: Creating profiles and resolving which one a
//!   request acts on
//! - **Pregnancy Calculations**: Weeks, trimesters, countdowns and baby sizes
//!   derived from a due date or a self-reported week
//! - **Assessment Orchestration**: Collecting answers, gating submission on
//!   completeness, delegating scoring to the remote service
//! - **Check-in Orchestration**: Validating vital ranges and obtaining risk
//!   predictions
//! - **Data Validation**: Validating input data before any network or storage
//!   cost
//!
//! ## Business Rules
//!
//! - Every questionnaire answer is an integer 0..=3 and all ten questions
//!   must be answered before submission
//! - Scores come from the remote service; a local sum is only persisted as an
//!   explicitly labeled fallback
//! - Vital readings are range-checked and all problems reported at once
//! - Nothing is persisted when scoring or prediction fails
//! - Each record is timestamped for proper chronological ordering

pub mod assessment_service;
pub mod assessment_session;
pub mod checkin_service;
pub mod commands;
pub mod errors;
pub mod models;
pub mod pregnancy_service;
pub mod profile_service;
pub mod reminder_service;

pub use assessment_service::AssessmentService;
pub use assessment_session::{AnswerProgress, AssessmentSession, SessionError, SessionState};
pub use checkin_service::CheckInService;
pub use errors::SubmissionError;
pub use pregnancy_service::PregnancyService;
pub use profile_service::ProfileService;
pub use reminder_service::ReminderService;
