//! # Consent Model
//!
//! The structured, holder-reviewable representation of what a verifier is
//! asking for and what the holder has chosen. A model is constructed exactly
//! once per incoming request by [`ConsentBuilder::build`], replaced (never
//! mutated in place) by each toggle/expand transition, and consumed exactly
//! once at submission by [`ConsentModel::selection`].
//!
//! The model is an immutable value: transitions take one snapshot and return
//! a new one. The hosting shell owns a single current-snapshot reference and
//! applies transitions one event at a time; any number of readers may share
//! a snapshot between writes.

mod build;
mod selection;

pub use build::ConsentBuilder;
pub use selection::{DisclosedDocument, DisclosureSelection, DocItem};

use serde::{Deserialize, Serialize};

use crate::document::NameSpace;

/// Composite key identifying one disclosure item within a consent model.
/// Two distinct `(document id, element identifier)` pairs can never collide,
/// whatever characters the identifiers contain.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct ItemUid {
    /// The held document the item belongs to.
    pub document_id: String,

    /// The element identifier within that document.
    pub element_identifier: String,
}

impl ItemUid {
    /// Convenience constructor.
    pub fn new(document_id: impl Into<String>, element_identifier: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            element_identifier: element_identifier.into(),
        }
    }
}

/// The full address an item was built from, carried through to disclosure
/// assembly.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Origin {
    /// The held document the element belongs to.
    pub document_id: String,

    /// Document type URI of that document.
    pub doc_type: String,

    /// Namespace the element lives in.
    pub name_space: NameSpace,

    /// Data element identifier.
    pub element_identifier: String,
}

/// One requested element as presented for holder review.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DisclosureItem {
    /// Unique key of this item across the whole model.
    pub uid: ItemUid,

    /// Human-readable element name.
    pub readable_name: String,

    /// Human-readable element value, or the "not available" marker.
    pub value: String,

    /// Whether the element value was present and renderable in the stored
    /// document.
    pub is_available: bool,

    /// Whether the element is mandatory for the document's type class.
    /// Mandatory items have no toggle: `is_checked` equals `is_available`
    /// for the life of the model.
    pub is_mandatory: bool,

    /// Whether the element is included in the disclosure. Defaults to
    /// `is_available`; toggling is permitted only for available optional
    /// items.
    pub is_checked: bool,

    /// Where the item came from.
    pub origin: Origin,
}

/// The batched block of mandatory elements for one document. Present on a
/// group only when at least one requested element is mandatory.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RequiredBlock {
    /// Section heading, supplied by the caller. Display text only.
    pub title: String,

    /// Whether the block is expanded for review. Presentation state only;
    /// no effect on checked states.
    pub expanded: bool,

    /// The mandatory items, in request order.
    pub items: Vec<DisclosureItem>,
}

/// Everything requested from one held document.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocumentGroup {
    /// The held document's store identifier.
    pub document_id: String,

    /// Display title for the document.
    pub title: String,

    /// The batched mandatory elements, if any were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredBlock>,

    /// The optional elements, individually toggleable, in request order.
    pub optional_items: Vec<DisclosureItem>,
}

/// Ordered consent model: one group per requested document, in the order
/// documents first appear in the request.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConsentModel {
    /// The per-document groups.
    pub groups: Vec<DocumentGroup>,
}

impl ConsentModel {
    /// Flip the expanded state of a document's required block. Returns a new
    /// snapshot; checked states are untouched. A document without a required
    /// block, or an unknown document id, leaves the model unchanged.
    #[must_use]
    pub fn toggle_required_block(&self, document_id: &str) -> Self {
        let mut next = self.clone();
        for group in &mut next.groups {
            if group.document_id == document_id {
                if let Some(required) = &mut group.required {
                    required.expanded = !required.expanded;
                }
                break;
            }
        }
        next
    }

    /// Flip the checked state of an optional item. Returns a new snapshot.
    /// Toggling an unavailable item, or a uid not present among the model's
    /// optional items, is a no-op: stale UI references are never fatal.
    /// Mandatory items are not reachable through this transition.
    #[must_use]
    pub fn toggle_optional_item(&self, uid: &ItemUid) -> Self {
        let mut next = self.clone();
        for group in &mut next.groups {
            for item in &mut group.optional_items {
                if item.uid == *uid {
                    if item.is_available {
                        item.is_checked = !item.is_checked;
                    }
                    return next;
                }
            }
        }
        next
    }

    /// All items in model order: per group, the required block's items
    /// followed by the optional items.
    pub fn items(&self) -> impl Iterator<Item = &DisclosureItem> {
        self.groups.iter().flat_map(|group| {
            group
                .required
                .iter()
                .flat_map(|required| required.items.iter())
                .chain(group.optional_items.iter())
        })
    }

    /// Find an optional item by uid.
    #[must_use]
    pub fn find_optional(&self, uid: &ItemUid) -> Option<&DisclosureItem> {
        self.groups
            .iter()
            .flat_map(|group| group.optional_items.iter())
            .find(|item| item.uid == *uid)
    }

    /// Number of items currently checked for disclosure.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items().filter(|item| item.is_checked).count()
    }
}
