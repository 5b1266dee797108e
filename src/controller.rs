//! Specialists List Controller
//!
//! Drives the list page: fetching, create/edit modal, toggling, deletion,
//! and turning API failures into toasts. Every mutation of the cache waits
//! for the server; nothing is applied optimistically.
//!
//! Requests are not cancelled and overlapping actions are not rejected.
//! `loading` only tells the view to block input.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{ConfirmDialog, SpecialistsApi};
use crate::error::ApiError;
use crate::form::SpecialistFormValues;
use crate::models::Specialist;
use crate::store::{
    store_remove_specialist, store_replace_specialists, store_set_loading, store_set_modal,
    store_upsert_specialist, ModalState, SpecialistsState, SpecialistsStateStoreFields,
    SpecialistsStore,
};
use crate::toast::ToastQueue;

pub const LOAD_FAILED: &str = "Failed to load specialists";
pub const CREATE_FAILED: &str = "Failed to create specialist";
pub const UPDATE_FAILED: &str = "Failed to update specialist";
pub const TOGGLE_FAILED: &str = "Failed to update status";
pub const DELETE_FAILED: &str = "Failed to delete specialist";

pub const CREATED: &str = "Specialist created successfully.";
pub const UPDATED: &str = "Specialist updated successfully.";
pub const ACTIVATED: &str = "Specialist activated.";
pub const DEACTIVATED: &str = "Specialist deactivated.";
pub const DELETED: &str = "Specialist deleted.";

#[derive(Clone)]
pub struct SpecialistsController {
    store: SpecialistsStore,
    api: Rc<dyn SpecialistsApi>,
    confirm: Rc<dyn ConfirmDialog>,
    toasts: ToastQueue,
}

impl SpecialistsController {
    pub fn new(api: Rc<dyn SpecialistsApi>, confirm: Rc<dyn ConfirmDialog>, toasts: ToastQueue) -> Self {
        Self {
            store: Store::new(SpecialistsState::new()),
            api,
            confirm,
            toasts,
        }
    }

    /// Reactive state for views
    pub fn store(&self) -> SpecialistsStore {
        self.store
    }

    pub fn specialists(&self) -> Vec<Specialist> {
        self.store.specialists().get_untracked()
    }

    pub fn is_loading(&self) -> bool {
        self.store.loading().get_untracked()
    }

    pub fn modal(&self) -> ModalState {
        self.store.modal().get_untracked()
    }

    /// Fetch the full list. On failure the previous cache is kept.
    pub async fn load(&self) {
        store_set_loading(&self.store, true);
        match self.api.list().await {
            Ok(list) => {
                log::info!("[specialists] Loaded {} specialists", list.len());
                store_replace_specialists(&self.store, list);
            }
            Err(err) => self.report(&err, LOAD_FAILED),
        }
        store_set_loading(&self.store, false);
    }

    pub fn open_create(&self) {
        store_set_modal(&self.store, ModalState::Open { editing: None });
    }

    pub fn open_edit(&self, record: Specialist) {
        store_set_modal(&self.store, ModalState::Open { editing: Some(record) });
    }

    pub fn close_modal(&self) {
        store_set_modal(&self.store, ModalState::Closed);
    }

    /// Create or update depending on what the modal is bound to.
    ///
    /// On failure the modal stays open so the user can fix the input and retry.
    pub async fn save(&self, values: SpecialistFormValues) {
        let editing = self.modal().editing().cloned();
        store_set_loading(&self.store, true);

        let result = match &editing {
            Some(record) => {
                log::info!("[specialists] Updating {}", record.id);
                self.api
                    .update(&record.id, &values.to_update_payload())
                    .await
                    .map(|_| UPDATED)
                    .map_err(|err| (err, UPDATE_FAILED))
            }
            None => {
                log::info!("[specialists] Creating {}", values.name);
                self.api
                    .create(&values.to_create_payload())
                    .await
                    .map(|_| CREATED)
                    .map_err(|err| (err, CREATE_FAILED))
            }
        };

        match result {
            Ok(message) => {
                self.close_modal();
                self.toasts.success(message);
                self.load().await;
            }
            Err((err, fallback)) => {
                self.report(&err, fallback);
                store_set_loading(&self.store, false);
            }
        }
    }

    /// Flip the active flag and swap in the server's copy of the record.
    pub async fn toggle_active(&self, record: &Specialist) {
        store_set_loading(&self.store, true);
        match self.api.toggle_active(&record.id).await {
            Ok(updated) => {
                let message = if updated.is_active { ACTIVATED } else { DEACTIVATED };
                log::info!("[specialists] {} is_active={}", updated.id, updated.is_active);
                store_upsert_specialist(&self.store, updated);
                self.toasts.success(message);
            }
            Err(err) => self.report(&err, TOGGLE_FAILED),
        }
        store_set_loading(&self.store, false);
    }

    /// Delete after the user confirms; declining does nothing.
    pub async fn remove(&self, record: &Specialist) {
        let prompt = format!("Delete \"{}\"?", record.name);
        if !self.confirm.confirm(&prompt).await {
            log::debug!("[specialists] Delete of {} cancelled", record.id);
            return;
        }

        store_set_loading(&self.store, true);
        match self.api.delete(&record.id).await {
            Ok(()) => {
                log::info!("[specialists] Deleted {}", record.id);
                store_remove_specialist(&self.store, &record.id);
                self.toasts.success(DELETED);
            }
            Err(err) => self.report(&err, DELETE_FAILED),
        }
        store_set_loading(&self.store, false);
    }

    fn report(&self, err: &ApiError, fallback: &str) {
        log::warn!("[specialists] {}: {}", fallback, err);
        self.toasts.error(err.user_message(fallback));
    }
}
