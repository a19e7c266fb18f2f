//! Campaign payloads

use serde::{Deserialize, Serialize};

/// Body of `POST emailmarketing/campaigns/{id}/tests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSend {
    /// `HTML`, `TEXT` or `HTML_AND_TEXT`.
    pub format: String,
    /// Omitted from the body when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_message: Option<String>,
    pub email_addresses: Vec<String>,
}

impl TestSend {
    pub fn new(format: impl Into<String>, email_addresses: Vec<String>) -> Self {
        Self { format: format.into(), personal_message: None, email_addresses }
    }

    #[must_use]
    pub fn with_personal_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.personal_message = if message.is_empty() { None } else { Some(message) };
        self
    }

    pub fn add_email(&mut self, email: impl Into<String>) {
        self.email_addresses.push(email.into());
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_personal_message_is_omitted() {
        let send = TestSend::new("HTML", vec!["a@x.com".into()]).with_personal_message("");
        assert_eq!(
            serde_json::to_value(send).unwrap(),
            json!({ "format": "HTML", "email_addresses": ["a@x.com"] })
        );
    }

    #[test]
    fn personal_message_is_sent_when_present() {
        let send = TestSend::new("TEXT", Vec::new()).with_personal_message("hi");
        assert_eq!(serde_json::to_value(send).unwrap()["personal_message"], "hi");
    }
}
