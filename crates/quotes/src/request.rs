//! The structured quote request submitted from the product detail page.

use serde::Deserialize;

use sudood_core::{DomainError, DomainResult};

/// Canonical validation message, part of the wire contract.
pub const MISSING_FIELDS: &str = "Missing required fields";

/// A quote request as posted by the site.
///
/// All fields arrive as strings; absent fields deserialize to empty. Only
/// `name`, `email`, `phone` and `product_name` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub product_name: String,
    pub product_id: String,
    pub category: String,
    pub series: String,
    pub quantity: String,
    pub notes: String,
}

impl QuoteRequest {
    /// Required-fields check. Whitespace-only values do not count as present.
    pub fn validate(&self) -> DomainResult<()> {
        let required = [&self.name, &self.email, &self.phone, &self.product_name];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(DomainError::validation(MISSING_FIELDS));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> QuoteRequest {
        QuoteRequest {
            name: "Amal Haddad".into(),
            company: "Haddad Contracting".into(),
            email: "amal@example.com".into(),
            phone: "+966500000000".into(),
            product_name: "Standard Brass Ball Valve".into(),
            product_id: "bv-100".into(),
            category: "Ball Valves".into(),
            series: "S-100".into(),
            quantity: "250".into(),
            notes: "Needed within 6 weeks.".into(),
        }
    }

    #[test]
    fn complete_request_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn each_required_field_is_enforced() {
        for strip in ["name", "email", "phone", "productName"] {
            let mut req = complete();
            match strip {
                "name" => req.name.clear(),
                "email" => req.email = "   ".into(),
                "phone" => req.phone.clear(),
                _ => req.product_name.clear(),
            }
            let err = req.validate().unwrap_err();
            assert_eq!(err.to_string(), MISSING_FIELDS);
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{"name": "A", "email": "a@b.c", "phone": "1", "productName": "Valve"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert!(req.company.is_empty());
        assert!(req.notes.is_empty());
    }
}
