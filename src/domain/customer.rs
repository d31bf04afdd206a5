use serde::{Deserialize, Serialize};

/// How a customer can be reached. At least one channel is required for the
/// customer to pass validation; empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn new(email: Option<String>, phone: Option<String>) -> Self {
        Self { email, phone }
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            phone: None,
        }
    }

    pub fn with_phone(phone: impl Into<String>) -> Self {
        Self {
            email: None,
            phone: Some(phone.into()),
        }
    }

    /// The email address, if one is set and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }

    /// The phone number, if one is set and non-empty.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }

    pub fn has_channel(&self) -> bool {
        self.email().is_some() || self.phone().is_some()
    }
}

/// The paying customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    pub name: String,
    pub contact_info: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl CustomerData {
    pub fn new(name: impl Into<String>, contact_info: ContactInfo) -> Self {
        Self {
            name: name.into(),
            contact_info,
            customer_id: None,
        }
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_channels_count_as_absent() {
        let contact = ContactInfo::new(Some(String::new()), Some(String::new()));
        assert_eq!(contact.email(), None);
        assert_eq!(contact.phone(), None);
        assert!(!contact.has_channel());
    }

    #[test]
    fn test_customer_deserialization_without_id() {
        let json = r#"{"name":"John Doe","contact_info":{"email":"john@example.com","phone":null}}"#;
        let customer: CustomerData = serde_json::from_str(json).unwrap();

        assert_eq!(customer.name, "John Doe");
        assert_eq!(customer.contact_info.email(), Some("john@example.com"));
        assert!(customer.customer_id.is_none());
    }
}
