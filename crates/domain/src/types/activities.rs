//! Bulk activity payloads

use serde::{Deserialize, Serialize};

use crate::constants::activity_columns::{
    self, custom_field, ADDRESS_FIELDS, CONTACT_FIELDS, CUSTOM_FIELD_PREFIX,
};
use crate::errors::{CtctError, Result};

/// One contact row of an add-contacts import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddContactsImportData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_phone: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<ImportAddress>,
    #[serde(default)]
    pub custom_fields: Vec<ImportCustomField>,
}

impl AddContactsImportData {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email_addresses: vec![email.into()], ..Self::default() }
    }

    pub fn add_email(&mut self, email: impl Into<String>) {
        self.email_addresses.push(email.into());
    }

    pub fn add_address(&mut self, address: ImportAddress) {
        self.addresses.push(address);
    }

    pub fn add_custom_field(&mut self, field: ImportCustomField) {
        self.custom_fields.push(field);
    }

    /// Value of a scalar contact column by wire name.
    fn scalar(&self, name: &str) -> Option<&str> {
        let value = match name {
            "first_name" => &self.first_name,
            "middle_name" => &self.middle_name,
            "last_name" => &self.last_name,
            "job_title" => &self.job_title,
            "company_name" => &self.company_name,
            "work_phone" => &self.work_phone,
            "home_phone" => &self.home_phone,
            _ => return None,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Address of an import row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_postal_code: Option<String>,
}

impl ImportAddress {
    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "line1" => &self.line1,
            "line2" => &self.line2,
            "line3" => &self.line3,
            "city" => &self.city,
            "state_code" => &self.state_code,
            "state_province" => &self.state_province,
            "country" => &self.country,
            "postal_code" => &self.postal_code,
            "sub_postal_code" => &self.sub_postal_code,
            _ => return None,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// A `custom_field_N` column of an import row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCustomField {
    pub name: String,
    pub value: String,
}

impl ImportCustomField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Body of `POST activities/addcontacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddContacts {
    pub import_data: Vec<AddContactsImportData>,
    pub lists: Vec<String>,
    pub column_names: Vec<String>,
}

impl AddContacts {
    /// Build an import for `contacts` into `lists`.
    ///
    /// When `column_names` is `None` (or empty) the columns are derived from
    /// the fields populated on the first contact: `EMAIL` always, then each
    /// non-empty name/phone field, the first address's fields and any
    /// `custom_field_N` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CtctError::InvalidArgument`] when columns must be derived
    /// but `contacts` is empty.
    pub fn new(
        contacts: Vec<AddContactsImportData>,
        lists: Vec<String>,
        column_names: Option<Vec<String>>,
    ) -> Result<Self> {
        let column_names = match column_names.filter(|c| !c.is_empty()) {
            Some(columns) => columns,
            None => {
                let first = contacts.first().ok_or_else(|| {
                    CtctError::InvalidArgument("AddContacts requires at least one contact".into())
                })?;
                derive_columns(first)
            }
        };

        Ok(Self { import_data: contacts, lists, column_names })
    }
}

fn derive_columns(contact: &AddContactsImportData) -> Vec<String> {
    let mut columns = vec![activity_columns::EMAIL.to_string()];

    columns.extend(
        CONTACT_FIELDS
            .iter()
            .filter(|(field, _)| contact.scalar(field).is_some())
            .map(|(_, column)| (*column).to_string()),
    );

    if let Some(address) = contact.addresses.first() {
        columns.extend(
            ADDRESS_FIELDS
                .iter()
                .filter(|(field, _)| address.field(field).is_some())
                .map(|(_, column)| (*column).to_string()),
        );
    }

    columns.extend(
        contact
            .custom_fields
            .iter()
            .filter_map(|f| f.name.split_once(CUSTOM_FIELD_PREFIX).map(|(_, number)| number))
            .map(custom_field),
    );

    columns
}

/// Body of `POST activities/exportcontacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportContacts {
    pub file_type: String,
    pub sort_by: String,
    pub export_date_added: bool,
    pub export_added_by: bool,
    pub lists: Vec<String>,
    pub column_names: Vec<String>,
}

impl ExportContacts {
    pub fn new(lists: Vec<String>) -> Self {
        Self { lists, ..Self::default() }
    }
}

impl Default for ExportContacts {
    fn default() -> Self {
        Self {
            file_type: "CSV".to_string(),
            sort_by: "EMAIL_ADDRESS".to_string(),
            export_date_added: true,
            export_added_by: true,
            lists: Vec::new(),
            column_names: vec!["Email Address".into(), "First Name".into(), "Last Name".into()],
        }
    }
}

/// Body of `POST activities/clearlists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearLists {
    pub lists: Vec<String>,
}

/// Body of `POST activities/removefromlists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveContactsFromLists {
    pub import_data: Vec<EmailRow>,
    pub lists: Vec<String>,
}

/// One row of a remove-from-lists import: a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRow {
    pub email_addresses: Vec<String>,
}

impl RemoveContactsFromLists {
    pub fn new(emails: Vec<String>, lists: Vec<String>) -> Self {
        let import_data = emails.into_iter().map(|email| EmailRow { email_addresses: vec![email] }).collect();
        Self { import_data, lists }
    }
}
