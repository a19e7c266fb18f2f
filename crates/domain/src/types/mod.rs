//! Typed request payloads
//!
//! Resources read from the API are [`crate::Record`]s. Payloads whose shape
//! the client builds itself (bulk activities, test sends) are typed here.

pub mod activities;
pub mod campaigns;

pub use activities::{
    AddContacts, AddContactsImportData, ClearLists, ExportContacts, ImportAddress, ImportCustomField,
    RemoveContactsFromLists,
};
pub use campaigns::TestSend;
