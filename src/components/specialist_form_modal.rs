//! Specialist Form Modal
//!
//! Create/edit dialog. Owns a `SpecialistForm` for as long as it is mounted;
//! the list page remounts it whenever the modal target changes.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::form::{FormField, FormMode, SpecialistForm, SpecialistFormValues};
use crate::models::Specialist;

/// Labelled text input with its inline validation message
#[component]
fn TextField(form: RwSignal<SpecialistForm>, field: FormField, label: &'static str) -> impl IntoView {
    let id = field.input_id();
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type=field.input_type()
                prop:value=move || form.with(|f| f.current_values().text(field).to_string())
                on:input=move |ev| form.update(|f| f.set_text(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(field))
            />
            {move || form.with(|f| f.visible_error(field)).map(|err| view! {
                <p class="field-error">{err.to_string()}</p>
            })}
        </div>
    }
}

#[component]
pub fn SpecialistFormModal(
    /// Record to edit; `None` opens a blank create form
    editing: Option<Specialist>,
    on_save: Callback<SpecialistFormValues>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(SpecialistForm::new(editing.as_ref()));
    let is_edit = form.with_untracked(|f| f.mode() == FormMode::Edit);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.submit()) {
            Ok(values) => on_save.run(values),
            Err(err) => {
                log::debug!("[form] Submit blocked: {}", err);
                form.update(|f| f.touch_all());
            }
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                <h2>{if is_edit { "Edit specialist" } else { "New specialist" }}</h2>

                <form novalidate=true on:submit=submit>
                    <TextField form=form field=FormField::Name label="Name *" />
                    <TextField form=form field=FormField::IdNumber label="ID number *" />
                    <TextField form=form field=FormField::Phone label="Phone" />
                    <TextField form=form field=FormField::Email label="Email" />

                    <div class="form-field">
                        <label for="address">"Address"</label>
                        <textarea
                            id="address"
                            rows="2"
                            prop:value=move || form.with(|f| f.current_values().address.clone())
                            on:input=move |ev| form.update(|f| f.set_text(FormField::Address, event_target_value(&ev)))
                        ></textarea>
                    </div>

                    <div class="form-check">
                        <input
                            id="isActive"
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.current_values().is_active)
                            on:change=move |ev| form.update(|f| f.set_active(event_target_checked(&ev)))
                        />
                        <label for="isActive">"Active"</label>
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || !form.with(|f| f.can_save())>
                            {if is_edit { "Update" } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
