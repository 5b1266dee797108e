//! Specialists List Page
//!
//! Table of specialists with activate switch, edit and delete actions,
//! plus the create/edit modal and a blocking loading overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SpecialistFormModal;
use crate::controller::SpecialistsController;
use crate::form::SpecialistFormValues;
use crate::models::Specialist;
use crate::store::{ModalState, SpecialistsStateStoreFields};

#[component]
pub fn SpecialistsList(controller: SpecialistsController) -> impl IntoView {
    let store = controller.store();
    let controller = StoredValue::new_local(controller);

    // Load on mount
    Effect::new(move |_| {
        let c = controller.get_value();
        spawn_local(async move {
            c.load().await;
        });
    });

    // Only remount the modal when its target actually changes
    let modal = Memo::new(move |_| store.modal().get());

    let on_save = Callback::new(move |values: SpecialistFormValues| {
        let c = controller.get_value();
        spawn_local(async move {
            c.save(values).await;
        });
    });
    let on_cancel = Callback::new(move |_: ()| controller.with_value(|c| c.close_modal()));

    view! {
        <div class="specialists-page">
            <Show when=move || store.loading().get()>
                <div class="loading-overlay" aria-busy="true">
                    <div class="spinner" role="status" aria-label="Loading"></div>
                    <span class="loading-text">"Loading..."</span>
                </div>
            </Show>

            <div class="page-header">
                <h1>"Specialists"</h1>
                <button
                    type="button"
                    class="btn-primary"
                    on:click=move |_| controller.with_value(|c| c.open_create())
                >
                    "New specialist"
                </button>
            </div>

            <table class="specialists-table">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"ID number"</th>
                        <th scope="col">"Phone"</th>
                        <th scope="col" class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    // Keyed on the whole record so a toggled row re-renders
                    <For
                        each=move || store.specialists().get()
                        key=|s: &Specialist| s.clone()
                        children=move |s: Specialist| {
                            let row_class = if s.is_active { "" } else { "inactive" };
                            let switch_class = if s.is_active { "switch on" } else { "switch off" };
                            let switch_title = if s.is_active { "Deactivate" } else { "Activate" };
                            let checked = s.is_active.to_string();
                            let phone = s.phone.clone().unwrap_or_else(|| "—".to_string());
                            let toggle_target = s.clone();
                            let edit_target = s.clone();
                            let delete_target = s.clone();
                            view! {
                                <tr class=row_class>
                                    <td>{s.name}</td>
                                    <td>{s.id_number}</td>
                                    <td>{phone}</td>
                                    <td class="actions">
                                        <button
                                            type="button"
                                            role="switch"
                                            aria-checked=checked
                                            title=switch_title
                                            class=switch_class
                                            on:click=move |_| {
                                                let c = controller.get_value();
                                                let target = toggle_target.clone();
                                                spawn_local(async move {
                                                    c.toggle_active(&target).await;
                                                });
                                            }
                                        >
                                            <span class="switch-knob"></span>
                                        </button>
                                        <button
                                            type="button"
                                            title="Edit"
                                            class="btn-edit"
                                            on:click=move |_| controller.with_value(|c| c.open_edit(edit_target.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            type="button"
                                            title="Delete"
                                            class="btn-delete"
                                            on:click=move |_| {
                                                let c = controller.get_value();
                                                let target = delete_target.clone();
                                                spawn_local(async move {
                                                    c.remove(&target).await;
                                                });
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                    <Show when=move || store.specialists().read().is_empty()>
                        <tr>
                            <td colspan="4" class="empty-state">
                                "No specialists yet. Add one with \"New specialist\"."
                            </td>
                        </tr>
                    </Show>
                </tbody>
            </table>

            {move || match modal.get() {
                ModalState::Open { editing } => Some(view! {
                    <SpecialistFormModal editing=editing on_save=on_save on_cancel=on_cancel />
                }),
                ModalState::Closed => None,
            }}
        </div>
    }
}
