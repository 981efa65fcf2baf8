//! # Request Grouping
//!
//! Turns the verifier's ordered list of requested elements, plus the
//! holder's stored documents, into the initial consent model. The build is
//! a pure, single-pass computation: deterministic and idempotent, with no
//! I/O and no suspension points.

use tracing::{debug, instrument};

use super::{ConsentModel, DisclosureItem, DocumentGroup, ItemUid, Origin, RequiredBlock};
use crate::document::RequestedElement;
use crate::error::{Error, Result};
use crate::extract;
use crate::policy::MandatoryFields;
use crate::provider::{DocumentResolver, Localize, Localizer};

/// Builds consent models from verifier requests. Holds the mandatory-field
/// policy and the display-text provider injected by the hosting wallet.
#[derive(Clone, Debug, Default)]
pub struct ConsentBuilder<L = Localizer> {
    policy: MandatoryFields,
    localizer: L,
}

impl ConsentBuilder {
    /// A builder with the default policy table and English display text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Localize> ConsentBuilder<L> {
    /// A builder with an explicit policy table and display-text provider.
    pub const fn with_localizer(policy: MandatoryFields, localizer: L) -> Self {
        Self { policy, localizer }
    }

    /// Replace the mandatory-field policy table.
    #[must_use]
    pub fn with_policy(mut self, policy: MandatoryFields) -> Self {
        self.policy = policy;
        self
    }

    /// Build the consent model for a request.
    ///
    /// Documents are processed in the order they first appear among the
    /// requested elements; elements keep request order within their
    /// document. Elements whose value is missing or unreadable become
    /// unavailable, unchecked items. Mandatory and optional items alike
    /// start with `is_checked` equal to `is_available`.
    ///
    /// # Errors
    ///
    /// `Error::DocumentNotFound` if any requested document cannot be
    /// resolved. The whole build aborts; no partial model is returned.
    #[instrument(level = "debug", skip_all, fields(elements = requested.len()))]
    pub fn build(
        &self, requested: &[RequestedElement], documents: &impl DocumentResolver,
    ) -> Result<ConsentModel> {
        let mut groups: Vec<DocumentGroup> = vec![];

        for element in requested {
            let Some(document) = documents.resolve(&element.document_id) else {
                return Err(Error::DocumentNotFound(element.document_id.clone()));
            };

            let position = groups.iter().position(|group| group.document_id == document.id);
            let position = position.unwrap_or_else(|| {
                debug!(document_id = %document.id, doc_type = %document.doc_type, "new group");
                groups.push(DocumentGroup {
                    document_id: document.id.clone(),
                    title: self.localizer.document_title(document),
                    required: None,
                    optional_items: vec![],
                });
                groups.len() - 1
            });
            let group = &mut groups[position];

            let raw = document.element(&element.name_space, &element.element_identifier);
            let value = extract::extract(raw, &self.localizer);

            let item = DisclosureItem {
                uid: ItemUid::new(&element.document_id, &element.element_identifier),
                readable_name: self.localizer.element_label(&element.element_identifier),
                value: value.text,
                is_available: value.is_available,
                is_mandatory: self
                    .policy
                    .is_mandatory(&document.class(), &element.element_identifier),
                is_checked: value.is_available,
                origin: Origin {
                    document_id: element.document_id.clone(),
                    doc_type: document.doc_type.clone(),
                    name_space: element.name_space.clone(),
                    element_identifier: element.element_identifier.clone(),
                },
            };

            if item.is_mandatory {
                group
                    .required
                    .get_or_insert_with(|| RequiredBlock {
                        title: self.localizer.required_fields_title(),
                        expanded: false,
                        items: vec![],
                    })
                    .items
                    .push(item);
            } else {
                group.optional_items.push(item);
            }
        }

        Ok(ConsentModel { groups })
    }
}
