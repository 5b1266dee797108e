//! Test doubles for the UI's collaborators.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::commands::{ConfirmDialog, SpecialistsApi};
use crate::error::ApiError;
use crate::models::{CreateSpecialistPayload, Specialist, UpdateSpecialistPayload};
use crate::toast::Timer;

/// Active specialist with no contact details
pub fn specialist(id: &str, name: &str, id_number: &str) -> Specialist {
    Specialist {
        id: id.to_string(),
        name: name.to_string(),
        id_number: id_number.to_string(),
        phone: None,
        email: None,
        address: None,
        is_active: true,
        created_at: "2026-01-01T00:00:00.000Z".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOp {
    List,
    Get,
    Create,
    Update,
    Delete,
    ToggleActive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(String),
    Create(CreateSpecialistPayload),
    Update(String, UpdateSpecialistPayload),
    Delete(String),
    ToggleActive(String),
}

/// In-memory backend that records every call
#[derive(Default)]
pub struct MockSpecialistsApi {
    records: RefCell<Vec<Specialist>>,
    calls: RefCell<Vec<ApiCall>>,
    failures: RefCell<HashMap<ApiOp, ApiError>>,
    next_id: Cell<u32>,
}

impl MockSpecialistsApi {
    pub fn with_records(records: Vec<Specialist>) -> Self {
        let api = Self::default();
        api.next_id.set(records.len() as u32 + 1);
        *api.records.borrow_mut() = records;
        api
    }

    /// Make the next call of `op` fail with `err`
    pub fn fail_next(&self, op: ApiOp, err: ApiError) {
        self.failures.borrow_mut().insert(op, err);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: ApiOp, call: ApiCall) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow_mut().remove(&op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Server { status: 404, message: Some("Specialist not found".to_string()) }
    }

    fn with_record<T>(&self, id: &str, f: impl FnOnce(&mut Specialist) -> T) -> Result<T, ApiError> {
        let mut records = self.records.borrow_mut();
        let record = records.iter_mut().find(|s| s.id == id).ok_or_else(Self::not_found)?;
        Ok(f(record))
    }
}

#[async_trait(?Send)]
impl SpecialistsApi for MockSpecialistsApi {
    async fn list(&self) -> Result<Vec<Specialist>, ApiError> {
        self.record(ApiOp::List, ApiCall::List)?;
        Ok(self.records.borrow().clone())
    }

    async fn get(&self, id: &str) -> Result<Specialist, ApiError> {
        self.record(ApiOp::Get, ApiCall::Get(id.to_string()))?;
        self.with_record(id, |s| s.clone())
    }

    async fn create(&self, payload: &CreateSpecialistPayload) -> Result<Specialist, ApiError> {
        self.record(ApiOp::Create, ApiCall::Create(payload.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Specialist {
            id: id.to_string(),
            name: payload.name.clone(),
            id_number: payload.id_number.clone(),
            phone: payload.phone.clone(),
            email: payload.email.clone(),
            address: payload.address.clone(),
            is_active: payload.is_active.unwrap_or(true),
            created_at: "2026-01-02T00:00:00.000Z".to_string(),
        };
        self.records.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, payload: &UpdateSpecialistPayload) -> Result<Specialist, ApiError> {
        self.record(ApiOp::Update, ApiCall::Update(id.to_string(), payload.clone()))?;
        self.with_record(id, |s| {
            if let Some(name) = &payload.name {
                s.name = name.clone();
            }
            if let Some(id_number) = &payload.id_number {
                s.id_number = id_number.clone();
            }
            if let Some(phone) = &payload.phone {
                s.phone = Some(phone.clone());
            }
            if let Some(email) = &payload.email {
                s.email = Some(email.clone());
            }
            if let Some(address) = &payload.address {
                s.address = Some(address.clone());
            }
            if let Some(active) = payload.is_active {
                s.is_active = active;
            }
            s.clone()
        })
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(ApiOp::Delete, ApiCall::Delete(id.to_string()))?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|s| s.id != id);
        if records.len() == before { Err(Self::not_found()) } else { Ok(()) }
    }

    async fn toggle_active(&self, id: &str) -> Result<Specialist, ApiError> {
        self.record(ApiOp::ToggleActive, ApiCall::ToggleActive(id.to_string()))?;
        self.with_record(id, |s| {
            s.is_active = !s.is_active;
            s.clone()
        })
    }
}

/// Confirmation dialog with a fixed answer that remembers its prompts
pub struct ScriptedConfirm {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ConfirmDialog for ScriptedConfirm {
    async fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

/// Timer whose tasks only run when the test fires them
#[derive(Default)]
pub struct ManualTimer {
    pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualTimer {
    pub fn delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn fire_all(&self) {
        let tasks = std::mem::take(&mut *self.pending.borrow_mut());
        for (_, task) in tasks {
            task();
        }
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_get_and_missing() {
        let api = MockSpecialistsApi::with_records(vec![specialist("1", "Ana", "123")]);
        assert_eq!(api.get("1").await.unwrap().name, "Ana");
        assert!(matches!(api.get("7").await, Err(ApiError::Server { status: 404, .. })));
        assert_eq!(api.calls(), vec![ApiCall::Get("1".to_string()), ApiCall::Get("7".to_string())]);
    }

    #[tokio::test]
    async fn test_mock_failure_is_one_shot() {
        let api = MockSpecialistsApi::default();
        api.fail_next(ApiOp::List, ApiError::Transport("down".to_string()));
        assert!(api.list().await.is_err());
        assert!(api.list().await.is_ok());
    }
}
