//! # Mandatory Field Policy
//!
//! Per-document-class table of the element identifiers a disclosure request
//! always places in the required section, regardless of holder choice. The
//! policy is data, not behavior: deployments can load a versioned table from
//! configuration, and new document classes need no code change. A class
//! missing from the table has no mandatory elements, so its fields default
//! to optional.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::document::DocClass;

/// Mandatory element identifiers per document type class.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MandatoryFields {
    classes: HashMap<String, BTreeSet<String>>,
}

impl MandatoryFields {
    /// Build a policy from an explicit table, keyed by
    /// [`DocClass::policy_key`] values.
    #[must_use]
    pub const fn new(classes: HashMap<String, BTreeSet<String>>) -> Self {
        Self { classes }
    }

    /// The mandatory element identifiers for a document class. Total: an
    /// unrecognized class yields the empty set.
    #[must_use]
    pub fn mandatory(&self, class: &DocClass) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.classes.get(class.policy_key()).unwrap_or(&EMPTY)
    }

    /// Whether an element identifier is mandatory for a document class.
    #[must_use]
    pub fn is_mandatory(&self, class: &DocClass, element_identifier: &str) -> bool {
        self.mandatory(class).contains(element_identifier)
    }
}

impl Default for MandatoryFields {
    fn default() -> Self {
        let class = |elements: &[&str]| {
            elements.iter().map(ToString::to_string).collect::<BTreeSet<_>>()
        };

        Self {
            classes: HashMap::from([
                (
                    "PID".to_string(),
                    class(&[
                        "issuance_date",
                        "expiry_date",
                        "issuing_authority",
                        "document_number",
                        "administrative_number",
                        "issuing_country",
                        "issuing_jurisdiction",
                        "portrait",
                        "portrait_capture_date",
                    ]),
                ),
                (
                    "AGE".to_string(),
                    class(&["issuance_date", "expiry_date", "issuing_country", "issuing_authority"]),
                ),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AGE_DOC_TYPE, MDL_DOC_TYPE, PID_DOC_TYPE};

    #[test]
    fn known_classes() {
        let policy = MandatoryFields::default();

        let pid = DocClass::from_doc_type(PID_DOC_TYPE);
        assert!(policy.is_mandatory(&pid, "portrait"));
        assert!(policy.is_mandatory(&pid, "document_number"));
        assert!(!policy.is_mandatory(&pid, "given_name"));

        let age = DocClass::from_doc_type(AGE_DOC_TYPE);
        assert_eq!(policy.mandatory(&age).len(), 4);
        assert!(!policy.is_mandatory(&age, "portrait"));
    }

    #[test]
    fn unknown_class_is_all_optional() {
        let policy = MandatoryFields::default();

        let mdl = DocClass::from_doc_type(MDL_DOC_TYPE);
        assert!(policy.mandatory(&mdl).is_empty());

        let other = DocClass::from_doc_type("org.example.loyalty.1");
        assert!(policy.mandatory(&other).is_empty());
        assert!(!policy.is_mandatory(&other, "issuance_date"));
    }

    #[test]
    fn loaded_from_configuration() {
        let policy: MandatoryFields = serde_json::from_value(serde_json::json!({
            "mDL": ["document_number", "portrait"],
            "org.example.loyalty.1": ["membership_no"]
        }))
        .expect("table should deserialize");

        assert!(policy.is_mandatory(&DocClass::Mdl, "portrait"));
        assert!(policy
            .is_mandatory(&DocClass::Other("org.example.loyalty.1".to_string()), "membership_no"));

        // loading a table replaces the defaults wholesale
        assert!(policy.mandatory(&DocClass::Pid).is_empty());
    }
}
