//! # Scoring Module
//!
//! Integration with the external scoring and prediction service.
//!
//! The service owns the clinical logic: EPDS scoring for the mood
//! questionnaire and risk prediction for vitals check-ins. This module
//! wraps its two endpoints behind trait seams so the domain services
//! never talk HTTP directly and tests can swap in fakes.
//!
//! ## Module Organization
//!
//! - **client**: reqwest-based REST client for `/epds` and `/predict`
//! - **provider**: the `ScoreProvider` / `RiskPredictor` seams, with
//!   the authoritative remote implementation and the explicitly
//!   degraded local-sum fallback

pub mod client;
pub mod provider;

pub use client::{
    EpdsPayload, EpdsScoreResponse, PredictionResponse, ScoringApi, ScoringApiError,
    VitalsPayload, DEFAULT_TIMEOUT_SECS,
};
pub use provider::{
    LocalSumProvider, RemoteScoreProvider, RiskPredictor, ScoreProvider, ScoredAssessment,
    ScoringMode, UNSCORED_RISK_LABEL,
};
