//! Specialists State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Specialist;

/// Modal lifecycle of the list page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// `editing` is `None` when creating a new record
    Open { editing: Option<Specialist> },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn editing(&self) -> Option<&Specialist> {
        match self {
            ModalState::Open { editing } => editing.as_ref(),
            ModalState::Closed => None,
        }
    }
}

/// List page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SpecialistsState {
    /// Last successful fetch, server order
    pub specialists: Vec<Specialist>,
    /// A request started from the page is in flight
    pub loading: bool,
    pub modal: ModalState,
}

impl SpecialistsState {
    /// The page starts out loading; the first fetch runs on mount.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SpecialistsStore = Store<SpecialistsState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole cache with a fresh fetch
pub fn store_replace_specialists(store: &SpecialistsStore, list: Vec<Specialist>) {
    store.specialists().set(list);
}

/// Replace the specialist with the same ID, keeping list order
pub fn store_upsert_specialist(store: &SpecialistsStore, updated: Specialist) {
    if let Some(slot) = store.specialists().write().iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}

/// Remove a specialist from the store by ID
pub fn store_remove_specialist(store: &SpecialistsStore, id: &str) {
    store.specialists().write().retain(|s| s.id != id);
}

pub fn store_set_loading(store: &SpecialistsStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_set_modal(store: &SpecialistsStore, modal: ModalState) {
    store.modal().set(modal);
}
