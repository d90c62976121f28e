//! Customer-facing form data: quote requester details and contact inquiries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Buyer details attached to a quote request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub business_name: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CustomerInfo {
    /// Check that every required field is filled and the email is plausible.
    pub fn validate(&self) -> Result<(), CommerceError> {
        require("name", &self.name)?;
        require("business name", &self.business_name)?;
        require("city", &self.city)?;
        require("phone", &self.phone)?;
        require_email(&self.email)
    }
}

/// Topic selected on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Wholesale,
    Pricing,
    Products,
    Support,
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::Wholesale,
        InquiryType::Pricing,
        InquiryType::Products,
        InquiryType::Support,
        InquiryType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Wholesale => "wholesale",
            InquiryType::Pricing => "pricing",
            InquiryType::Products => "products",
            InquiryType::Support => "support",
            InquiryType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InquiryType::Wholesale => "Wholesale Partnership",
            InquiryType::Pricing => "Pricing Inquiry",
            InquiryType::Products => "Product Information",
            InquiryType::Support => "Customer Support",
            InquiryType::Other => "Other",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryType {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownInquiryType(s.to_string()))
    }
}

/// A message sent through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub city: String,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl ContactInquiry {
    /// Everything except the business name is required.
    pub fn validate(&self) -> Result<(), CommerceError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("phone", &self.phone)?;
        require("city", &self.city)?;
        require("message", &self.message)
    }
}

fn require(field: &str, value: &str) -> Result<(), CommerceError> {
    if value.trim().is_empty() {
        return Err(CommerceError::ValidationError(format!("{} is required", field)));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<(), CommerceError> {
    require("email", email)?;
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(CommerceError::ValidationError(format!(
            "email '{}' is not a valid address",
            email
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ayesha Khan".to_string(),
            business_name: "Khan Optics".to_string(),
            city: "Lahore".to_string(),
            phone: "+92 300 0000000".to_string(),
            email: "ayesha@khanoptics.pk".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_customer() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut c = customer();
        c.city = "   ".to_string();
        let err = c.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: city is required");
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let mut c = customer();
        c.email = "ayesha.khanoptics.pk".to_string();
        assert!(c.validate().is_err());
        c.email = "@khanoptics.pk".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_customer_serializes_camel_case() {
        let json = serde_json::to_value(customer()).unwrap();
        assert_eq!(json["businessName"], "Khan Optics");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_inquiry_type_parse() {
        assert_eq!("Pricing".parse::<InquiryType>().unwrap(), InquiryType::Pricing);
        assert!("complaint".parse::<InquiryType>().is_err());
    }

    #[test]
    fn test_contact_business_name_is_optional() {
        let inquiry = ContactInquiry {
            name: "Bilal".to_string(),
            email: "bilal@example.com".to_string(),
            phone: "042 1234567".to_string(),
            business_name: None,
            city: "Karachi".to_string(),
            inquiry_type: InquiryType::Wholesale,
            message: "Looking for a frame supplier".to_string(),
        };
        assert!(inquiry.validate().is_ok());

        let mut empty_message = inquiry.clone();
        empty_message.message.clear();
        assert!(empty_message.validate().is_err());
    }
}
