//! Contact record value type and shared-ownership handle
//!
//! A `ContactRecord` is immutable after construction. The directory never
//! copies a record: it stores `ContactHandle`s, so the caller and every
//! index entry share ownership of the same allocation and a record stays
//! alive for as long as anything still references it.
//!
//! Record identity is handle identity (`Arc::ptr_eq`), never name equality.
//! Two records with identical names are distinct contacts.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared-ownership handle to a contact record.
///
/// Cloning a handle is cheap and never clones the record.
pub type ContactHandle = Arc<ContactRecord>;

/// Immutable contact value: a name, an organisation, and the contact's
/// phone numbers in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: String,
    organisation: String,
    phone_numbers: Vec<String>,
}

impl ContactRecord {
    /// Create a new contact record.
    ///
    /// The name must be non-empty; the organisation may be empty and the
    /// number list may be empty. Phone number order is preserved.
    pub fn new(
        name: impl Into<String>,
        organisation: impl Into<String>,
        phone_numbers: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(ContactRecord {
            name,
            organisation: organisation.into(),
            phone_numbers,
        })
    }

    /// Create a record and wrap it in a shared handle in one step.
    pub fn handle(
        name: impl Into<String>,
        organisation: impl Into<String>,
        phone_numbers: Vec<String>,
    ) -> Result<ContactHandle> {
        Ok(Arc::new(Self::new(name, organisation, phone_numbers)?))
    }

    /// The contact's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's organisation (may be empty).
    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    /// The contact's phone numbers in source order.
    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbers(ns: &[&str]) -> Vec<String> {
        ns.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_record_accessors() {
        let record = ContactRecord::new(
            "John Doe",
            "XYZ Corp",
            numbers(&["1234567890", "9876543210"]),
        )
        .unwrap();

        assert_eq!(record.name(), "John Doe");
        assert_eq!(record.organisation(), "XYZ Corp");
        assert_eq!(record.phone_numbers(), &["1234567890", "9876543210"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = ContactRecord::new("", "XYZ Corp", vec![]);
        assert_eq!(result.unwrap_err(), Error::EmptyName);
    }

    #[test]
    fn test_empty_organisation_and_numbers_allowed() {
        let record = ContactRecord::new("Ada", "", vec![]).unwrap();
        assert_eq!(record.organisation(), "");
        assert!(record.phone_numbers().is_empty());
    }

    #[test]
    fn test_number_order_preserved() {
        let record = ContactRecord::new("Ada", "", numbers(&["3", "1", "2"])).unwrap();
        assert_eq!(record.phone_numbers(), &["3", "1", "2"]);
    }

    #[test]
    fn test_handle_identity_not_name_equality() {
        let a = ContactRecord::handle("John Doe", "XYZ", vec![]).unwrap();
        let b = ContactRecord::handle("John Doe", "XYZ", vec![]).unwrap();

        // Equal values, distinct contacts.
        assert_eq!(*a, *b);
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &a.clone()));
    }

    proptest! {
        #[test]
        fn prop_any_non_empty_name_constructs(name in ".{1,64}", org in ".{0,32}") {
            let record = ContactRecord::new(name.clone(), org.clone(), vec![]).unwrap();
            prop_assert_eq!(record.name(), name);
            prop_assert_eq!(record.organisation(), org);
        }
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = ContactRecord::new("John Doe", "XYZ Corp", numbers(&["123"])).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
