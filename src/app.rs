//! Specialists App
//!
//! Root component: wires the API client, confirm dialog and toast queue
//! into the list controller.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::{BrowserConfirm, HttpSpecialistsApi};
use crate::components::{SpecialistsList, ToastHost};
use crate::config::AppConfig;
use crate::controller::SpecialistsController;
use crate::toast::{BrowserTimer, ToastQueue};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let toasts = ToastQueue::new(Rc::new(BrowserTimer));
    let api = Rc::new(HttpSpecialistsApi::new(&config.api_base_url));
    let controller = SpecialistsController::new(api, Rc::new(BrowserConfirm), toasts.clone());

    view! {
        <main class="app-layout">
            <SpecialistsList controller=controller />
        </main>
        <ToastHost queue=toasts />
    }
}
