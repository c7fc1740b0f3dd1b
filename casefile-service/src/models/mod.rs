//! Domain models for the casefile service.

pub mod action;
pub mod case_file;

pub use action::{
    Action, ActionRequest, GetModelAnswerPayload, GetResponsePayload, ScoreDiagnosisPayload,
};
pub use case_file::{CaseFile, Signal};
