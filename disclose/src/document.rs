//! # Stored Documents
//!
//! Read-only snapshots of the identity documents a holder keeps in their
//! wallet, together with the addressing types used by verifier requests.
//! Documents arrive fully decoded and decrypted from the external document
//! store; this crate never sees ciphertext or storage I/O.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A namespace groups data elements within a document's data model.
/// For example `org.iso.18013.5.1` for mobile Driving Licence elements.
pub type NameSpace = String;

/// Document type of a Person Identification Data document.
pub const PID_DOC_TYPE: &str = "eu.europa.ec.eudi.pid.1";

/// Namespace holding Person Identification Data elements.
pub const PID_NAMESPACE: &str = "eu.europa.ec.eudi.pid.1";

/// Document type of a mobile Driving Licence.
pub const MDL_DOC_TYPE: &str = "org.iso.18013.5.1.mDL";

/// Namespace holding mobile Driving Licence elements.
pub const MDL_NAMESPACE: &str = "org.iso.18013.5.1";

/// Document type of an age verification (18+) pseudonym document.
pub const AGE_DOC_TYPE: &str = "eu.europa.ec.eudi.pseudonym.age_over_18.1";

/// One data point a verifier has asked for: a `(namespace, element
/// identifier)` pair belonging to a specific held document. Requests carry
/// these in verifier-specified order and the engine preserves that order
/// end to end.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RequestedElement {
    /// Identifier of the held document the element belongs to.
    pub document_id: String,

    /// Namespace the element lives in.
    pub name_space: NameSpace,

    /// Data element identifier. For example, "family_name".
    pub element_identifier: String,
}

impl RequestedElement {
    /// Convenience constructor.
    pub fn new(
        document_id: impl Into<String>, name_space: impl Into<String>,
        element_identifier: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            name_space: name_space.into(),
            element_identifier: element_identifier.into(),
        }
    }
}

/// A document held by the wallet, as returned by the external document store:
/// fully decoded, already decrypted, read-only.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoredDocument {
    /// The store's unique identifier for this document instance.
    pub id: String,

    /// Document type URI. For example, `eu.europa.ec.eudi.pid.1`.
    pub doc_type: String,

    /// Holder-assigned display name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Element data per namespace. `BTreeMap` keeps namespace iteration
    /// deterministic.
    pub claims: BTreeMap<NameSpace, Map<String, Value>>,
}

impl StoredDocument {
    /// The document type class used by the mandatory-field policy.
    #[must_use]
    pub fn class(&self) -> DocClass {
        DocClass::from_doc_type(&self.doc_type)
    }

    /// Raw value stored for a `(namespace, element identifier)` pair, if any.
    #[must_use]
    pub fn element(&self, name_space: &str, element_identifier: &str) -> Option<&Value> {
        self.claims.get(name_space)?.get(element_identifier)
    }
}

/// Document type classes recognized by the engine. Mandatory-field policy is
/// keyed by class rather than raw document type so that one policy entry
/// covers all versions of a document type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocClass {
    /// Person Identification Data.
    Pid,

    /// Mobile Driving Licence.
    Mdl,

    /// Age verification (18+) pseudonym.
    Age,

    /// Any other document type, keyed by its raw type URI.
    Other(String),
}

impl DocClass {
    /// Map a document type URI onto its class. Unknown types map to
    /// [`DocClass::Other`] and so carry no mandatory elements by default.
    #[must_use]
    pub fn from_doc_type(doc_type: &str) -> Self {
        match doc_type {
            PID_DOC_TYPE => Self::Pid,
            MDL_DOC_TYPE => Self::Mdl,
            AGE_DOC_TYPE => Self::Age,
            _ => Self::Other(doc_type.to_string()),
        }
    }

    /// The key under which this class appears in the policy table.
    #[must_use]
    pub fn policy_key(&self) -> &str {
        match self {
            Self::Pid => "PID",
            Self::Mdl => "mDL",
            Self::Age => "AGE",
            Self::Other(doc_type) => doc_type,
        }
    }

    /// Fallback display title for documents with no holder-assigned name.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Pid => "National ID".to_string(),
            Self::Mdl => "Driving Licence".to_string(),
            Self::Age => "Age Verification".to_string(),
            Self::Other(doc_type) => doc_type.clone(),
        }
    }
}

impl fmt::Display for DocClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.policy_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_from_doc_type() {
        assert_eq!(DocClass::from_doc_type(PID_DOC_TYPE), DocClass::Pid);
        assert_eq!(DocClass::from_doc_type(MDL_DOC_TYPE), DocClass::Mdl);
        assert_eq!(DocClass::from_doc_type(AGE_DOC_TYPE), DocClass::Age);
        assert_eq!(
            DocClass::from_doc_type("org.example.loyalty.1"),
            DocClass::Other("org.example.loyalty.1".to_string())
        );
    }

    #[test]
    fn element_lookup() {
        let mut elements = Map::new();
        elements.insert("family_name".to_string(), Value::String("Smith".to_string()));

        let document = StoredDocument {
            id: "doc-1".to_string(),
            doc_type: MDL_DOC_TYPE.to_string(),
            display_name: None,
            claims: BTreeMap::from([(MDL_NAMESPACE.to_string(), elements)]),
        };

        assert_eq!(
            document.element(MDL_NAMESPACE, "family_name"),
            Some(&Value::String("Smith".to_string()))
        );
        assert_eq!(document.element(MDL_NAMESPACE, "given_name"), None);
        assert_eq!(document.element("org.example.unknown", "family_name"), None);
    }
}
