//! # Disclosure Assembly
//!
//! Reduces a final consent snapshot into the minimal per-document disclosure
//! set handed to the transport layer. No cryptographic unlocking material is
//! attached here; encoding and proof construction belong to the session
//! layer.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::ConsentModel;
use crate::document::NameSpace;

/// One `(namespace, element identifier)` pair released to the verifier.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocItem {
    /// Namespace the element lives in.
    pub name_space: NameSpace,

    /// Data element identifier.
    pub element_identifier: String,
}

/// The elements released from one held document.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DisclosedDocument {
    /// The held document's store identifier.
    pub document_id: String,

    /// The released pairs, in first-seen model order. Never empty: a
    /// document with nothing checked is omitted from the selection
    /// altogether.
    pub items: Vec<DocItem>,
}

/// The minimal wire-ready disclosure set. An empty selection is a valid
/// outcome of holder choice, not an error.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DisclosureSelection {
    /// Per-document disclosures, in the order documents first appear in the
    /// consent model.
    pub documents: Vec<DisclosedDocument>,
}

impl DisclosureSelection {
    /// Whether nothing at all is disclosed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The disclosure for one document, if it contributes anything.
    #[must_use]
    pub fn get(&self, document_id: &str) -> Option<&DisclosedDocument> {
        self.documents.iter().find(|document| document.document_id == document_id)
    }
}

impl ConsentModel {
    /// Reduce this snapshot to its disclosure set: every checked item,
    /// grouped by document, both levels in first-seen order. Unchecked and
    /// unavailable items never appear; documents with zero checked items
    /// are omitted entirely.
    #[instrument(level = "debug", skip_all)]
    #[must_use]
    pub fn selection(&self) -> DisclosureSelection {
        let mut documents: Vec<DisclosedDocument> = vec![];

        for item in self.items().filter(|item| item.is_checked) {
            let position = documents
                .iter()
                .position(|document| document.document_id == item.origin.document_id);
            let position = position.unwrap_or_else(|| {
                documents.push(DisclosedDocument {
                    document_id: item.origin.document_id.clone(),
                    items: vec![],
                });
                documents.len() - 1
            });

            documents[position].items.push(DocItem {
                name_space: item.origin.name_space.clone(),
                element_identifier: item.origin.element_identifier.clone(),
            });
        }

        DisclosureSelection { documents }
    }
}
