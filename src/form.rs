//! Specialist Form State
//!
//! Create/edit form behind the modal: field values, validation, and dirty
//! tracking against a baseline captured when an existing record is bound.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{CreateSpecialistPayload, Specialist, UpdateSpecialistPayload};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    email.len() <= EMAIL_MAX_LEN && local.len() <= EMAIL_LOCAL_MAX_LEN && EMAIL_RE.is_match(email)
}

/// Text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    IdNumber,
    Phone,
    Email,
    Address,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::IdNumber,
        FormField::Phone,
        FormField::Email,
        FormField::Address,
    ];

    /// DOM id of the input
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::IdNumber => "idNumber",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Address => "address",
        }
    }

    /// HTML `type` of the input
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Phone => "tel",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Raw values of the form inputs; absent optional fields are empty strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialistFormValues {
    pub name: String,
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub is_active: bool,
}

impl Default for SpecialistFormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            id_number: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            is_active: true,
        }
    }
}

impl SpecialistFormValues {
    pub fn from_record(record: &Specialist) -> Self {
        Self {
            name: record.name.clone(),
            id_number: record.id_number.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            address: record.address.clone().unwrap_or_default(),
            is_active: record.is_active,
        }
    }

    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::IdNumber => &self.id_number,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
        }
    }

    fn text_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::IdNumber => &mut self.id_number,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Address => &mut self.address,
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            id_number: self.id_number.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            is_active: self.is_active,
        }
    }

    /// Empty optional fields are left out of a create request.
    pub fn to_create_payload(&self) -> CreateSpecialistPayload {
        let non_empty = |s: &str| if s.is_empty() { None } else { Some(s.to_string()) };
        CreateSpecialistPayload {
            name: self.name.clone(),
            id_number: self.id_number.clone(),
            phone: non_empty(&self.phone),
            email: non_empty(&self.email),
            address: non_empty(&self.address),
            is_active: Some(self.is_active),
        }
    }

    /// Every field is sent so that clearing an input clears it server-side.
    pub fn to_update_payload(&self) -> UpdateSpecialistPayload {
        UpdateSpecialistPayload {
            name: Some(self.name.clone()),
            id_number: Some(self.id_number.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            address: Some(self.address.clone()),
            is_active: Some(self.is_active),
        }
    }

    fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialistForm {
    values: SpecialistFormValues,
    /// Snapshot taken when an existing record is bound; `None` in create mode
    baseline: Option<String>,
    touched: BTreeSet<FormField>,
}

impl SpecialistForm {
    pub fn new(record: Option<&Specialist>) -> Self {
        let mut form = Self::default();
        form.bind(record);
        form
    }

    /// Load a record for editing, or reset to blank create-mode defaults.
    pub fn bind(&mut self, record: Option<&Specialist>) {
        self.touched.clear();
        match record {
            Some(record) => {
                self.values = SpecialistFormValues::from_record(record);
                self.baseline = Some(self.values.trimmed().snapshot());
            }
            None => {
                self.values = SpecialistFormValues::default();
                self.baseline = None;
            }
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.baseline.is_some() { FormMode::Edit } else { FormMode::Create }
    }

    pub fn current_values(&self) -> &SpecialistFormValues {
        &self.values
    }

    pub fn set_text(&mut self, field: FormField, value: String) {
        *self.values.text_mut(field) = value;
    }

    pub fn set_active(&mut self, active: bool) {
        self.values.is_active = active;
    }

    pub fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(FormField::ALL);
    }

    pub fn error_for(&self, field: FormField) -> Option<ValidationError> {
        let value = self.values.text(field).trim();
        match field {
            FormField::Name if value.is_empty() => Some(ValidationError::NameRequired),
            FormField::IdNumber if value.is_empty() => Some(ValidationError::IdNumberRequired),
            FormField::Email if !value.is_empty() && !is_valid_email(value) => {
                Some(ValidationError::InvalidEmail)
            }
            _ => None,
        }
    }

    /// Error to render inline: only once the user has left the field or tried to submit
    pub fn visible_error(&self, field: FormField) -> Option<ValidationError> {
        if self.touched.contains(&field) { self.error_for(field) } else { None }
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        FormField::ALL.iter().filter_map(|f| self.error_for(*f)).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        match &self.baseline {
            Some(baseline) => *baseline != self.values.trimmed().snapshot(),
            None => true,
        }
    }

    /// Valid, and in edit mode also changed since binding
    pub fn can_save(&self) -> bool {
        self.is_valid() && (self.mode() == FormMode::Create || self.is_dirty())
    }

    /// Validated, trimmed values; the form itself is left as is.
    pub fn submit(&self) -> Result<SpecialistFormValues, ValidationError> {
        match self.errors().first() {
            Some(err) => Err(*err),
            None => Ok(self.values.trimmed()),
        }
    }
}
