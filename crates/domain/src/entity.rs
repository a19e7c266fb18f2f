//! Entity-or-id arguments
//!
//! Facade operations that address a single resource accept either its id or
//! the resource record itself. [`EntityRef`] normalizes both forms.

use crate::constants::id_or_object_message;
use crate::errors::{CtctError, Result};
use crate::record::Record;

/// Reference to a resource by id or by record.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRef {
    /// Raw id as supplied by the caller; validated on [`EntityRef::resolve`].
    Id(String),
    Record(Record),
}

impl EntityRef {
    /// Produce the id to place in the request path.
    ///
    /// # Errors
    ///
    /// Returns [`CtctError::InvalidArgument`] when the id is not integer-like
    /// or the record carries no `id` field.
    pub fn resolve(&self, resource: &str) -> Result<String> {
        match self {
            Self::Id(raw) if is_integer_like(raw) => Ok(raw.trim().to_string()),
            Self::Record(record) => match record.id() {
                Some(id) => Ok(id),
                None => Err(CtctError::InvalidArgument(id_or_object_message(resource))),
            },
            Self::Id(_) => Err(CtctError::InvalidArgument(id_or_object_message(resource))),
        }
    }
}

fn is_integer_like(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}

impl From<u64> for EntityRef {
    fn from(id: u64) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<u32> for EntityRef {
    fn from(id: u32) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<i32> for EntityRef {
    fn from(id: i32) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<&String> for EntityRef {
    fn from(id: &String) -> Self {
        Self::Id(id.clone())
    }
}

impl From<Record> for EntityRef {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<&Record> for EntityRef {
    fn from(record: &Record) -> Self {
        Self::Record(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_record_resolve_identically() {
        let by_id = EntityRef::from(42_u64).resolve("Contact").unwrap();
        let by_record = EntityRef::from(Record::new().with("id", 42)).resolve("Contact").unwrap();
        let by_text = EntityRef::from("42").resolve("Contact").unwrap();
        assert_eq!(by_id, "42");
        assert_eq!(by_id, by_record);
        assert_eq!(by_id, by_text);
    }

    #[test]
    fn negative_ids_are_rejected() {
        assert!(EntityRef::from(-1_i64).resolve("Contact").is_err());
    }

    #[test]
    fn non_numeric_text_is_invalid() {
        let err = EntityRef::from("abc").resolve("ContactList").unwrap_err();
        assert_eq!(
            err,
            CtctError::InvalidArgument("Only an id or ContactList object are allowed for this method.".into())
        );
    }

    #[test]
    fn record_without_id_is_invalid() {
        let record = Record::new().with("name", "no id");
        assert!(matches!(
            EntityRef::from(&record).resolve("EmailCampaign"),
            Err(CtctError::InvalidArgument(_))
        ));
    }
}
