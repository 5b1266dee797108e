//! Backend Bindings
//!
//! Contracts for the collaborators the UI depends on, plus their browser
//! implementations.

mod dialog;
mod specialist;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{CreateSpecialistPayload, Specialist, UpdateSpecialistPayload};

pub use dialog::*;
pub use specialist::*;

/// REST operations on the `/specialists` resource
#[async_trait(?Send)]
pub trait SpecialistsApi {
    async fn list(&self) -> Result<Vec<Specialist>, ApiError>;

    async fn get(&self, id: &str) -> Result<Specialist, ApiError>;

    async fn create(&self, payload: &CreateSpecialistPayload) -> Result<Specialist, ApiError>;

    async fn update(&self, id: &str, payload: &UpdateSpecialistPayload) -> Result<Specialist, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// Flips `isActive` server-side and returns the updated record
    async fn toggle_active(&self, id: &str) -> Result<Specialist, ApiError>;
}
