//! # Request Lines
//!
//! Flattens a consent snapshot into the closed set of structural line kinds
//! a consent screen renders: document headers, spacers, dividers, optional
//! fields and the batched required-fields block. Rendering shells match on
//! [`Line`] exhaustively, so adding a kind is a compile-visible change.
//!
//! Lines are presentation only. Spacers and dividers carry no semantic
//! meaning, and re-deriving lines from a snapshot never changes the model.

use serde::{Deserialize, Serialize};

use crate::consent::{ConsentModel, DisclosureItem};

/// One structural line of a rendered consent screen.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Line {
    /// Document header.
    Document {
        /// Display title of the document.
        title: String,
    },

    /// Vertical whitespace.
    Space,

    /// Rule between consecutive optional fields.
    Divider,

    /// An individually toggleable optional field.
    OptionalField(DisclosureItem),

    /// The batched block of mandatory fields for one document.
    RequiredFields {
        /// The document the block belongs to; the expand/collapse event for
        /// the block carries this id.
        document_id: String,

        /// Section heading.
        title: String,

        /// Whether the block is expanded.
        expanded: bool,

        /// The mandatory items, in request order.
        items: Vec<DisclosureItem>,
    },
}

/// Flatten a snapshot into its presentation lines: per document - header,
/// the optional fields separated by dividers, then the required block if the
/// document has one.
#[must_use]
pub fn lines(model: &ConsentModel) -> Vec<Line> {
    let mut out = vec![];

    for group in &model.groups {
        out.push(Line::Document { title: group.title.clone() });
        out.push(Line::Space);

        let last = group.optional_items.len().saturating_sub(1);
        for (index, item) in group.optional_items.iter().enumerate() {
            out.push(Line::Space);
            out.push(Line::OptionalField(item.clone()));
            if index != last {
                out.push(Line::Space);
                out.push(Line::Divider);
            }
        }

        out.push(Line::Space);
        if let Some(required) = &group.required {
            out.push(Line::RequiredFields {
                document_id: group.document_id.clone(),
                title: required.title.clone(),
                expanded: required.expanded,
                items: required.items.clone(),
            });
            out.push(Line::Space);
        }
    }

    out
}
