//! Checkout form input and validation.

use crate::checkout::ShippingAddress;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Everything the customer types on the checkout page.
///
/// Every field is required. Validation trims whitespace but the stored
/// values are left as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    // Contact
    pub email: String,

    // Shipping
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    // Payment
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
}

impl CheckoutForm {
    /// Field labels paired with their values, in page order.
    fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("email", self.email.as_str()),
            ("first name", self.first_name.as_str()),
            ("last name", self.last_name.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("ZIP code", self.zip_code.as_str()),
            ("card number", self.card_number.as_str()),
            ("expiry date", self.expiry_date.as_str()),
            ("CVV", self.cvv.as_str()),
            ("name on card", self.name_on_card.as_str()),
        ]
    }

    /// Labels of fields that are blank or invalid, in page order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(label, value)| {
                let value = value.trim();
                value.is_empty() || (*label == "email" && !value.contains('@'))
            })
            .map(|(label, _)| label)
            .collect()
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Validate the form, naming every missing field on failure.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }

    /// The shipping part of the form.
    pub fn shipping_address(&self) -> ShippingAddress {
        ShippingAddress {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn filled_form() -> CheckoutForm {
        CheckoutForm {
            email: "asha@example.com".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            address: "12 Lake Road".into(),
            city: "Pune".into(),
            state: "MH".into(),
            zip_code: "411001".into(),
            card_number: "4242 4242 4242 4242".into(),
            expiry_date: "12/28".into(),
            cvv: "123".into(),
            name_on_card: "Asha Rao".into(),
        }
    }

    #[test]
    fn test_filled_form_validates() {
        assert!(filled_form().validate().is_ok());
        assert!(filled_form().is_complete());
    }

    #[test]
    fn test_empty_form_lists_every_field() {
        let missing = CheckoutForm::default().missing_fields();
        assert_eq!(missing.len(), 11);
        assert_eq!(missing[0], "email");
        assert_eq!(missing[10], "name on card");
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let form = CheckoutForm {
            city: "   ".into(),
            cvv: String::new(),
            ..filled_form()
        };
        assert_eq!(
            form.validate(),
            Err(CommerceError::CheckoutIncomplete("city, CVV".into()))
        );
    }

    #[test]
    fn test_email_needs_at_sign() {
        let form = CheckoutForm {
            email: "asha.example.com".into(),
            ..filled_form()
        };
        assert_eq!(form.missing_fields(), vec!["email"]);
    }

    #[test]
    fn test_shipping_address_is_trimmed() {
        let form = CheckoutForm {
            city: " Pune ".into(),
            ..filled_form()
        };
        assert_eq!(form.shipping_address().city, "Pune");
    }
}
