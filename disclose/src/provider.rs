//! # Providers
//!
//! The traits exported by this module are the seams through which the
//! hosting wallet injects functionality into the engine: synchronous
//! document lookup and display text.
//!
//! See individual trait documentation for specific details.

use std::collections::HashMap;

use crate::document::StoredDocument;

/// Synchronous lookup into the wallet's local document store. The store must
/// return fully decoded, already-decrypted snapshots.
pub trait DocumentResolver {
    /// Resolve a document by its store identifier. `None` if the holder does
    /// not have the document.
    fn resolve(&self, document_id: &str) -> Option<&StoredDocument>;
}

impl DocumentResolver for HashMap<String, StoredDocument> {
    fn resolve(&self, document_id: &str) -> Option<&StoredDocument> {
        self.get(document_id)
    }
}

impl DocumentResolver for Vec<StoredDocument> {
    fn resolve(&self, document_id: &str) -> Option<&StoredDocument> {
        self.as_slice().resolve(document_id)
    }
}

impl DocumentResolver for [StoredDocument] {
    fn resolve(&self, document_id: &str) -> Option<&StoredDocument> {
        self.iter().find(|document| document.id == document_id)
    }
}

impl<R: DocumentResolver + ?Sized> DocumentResolver for &R {
    fn resolve(&self, document_id: &str) -> Option<&StoredDocument> {
        (**self).resolve(document_id)
    }
}

/// Display text for consent screens. All methods have sensible English
/// defaults; wallets localize by overriding them. None of the text carries
/// semantic meaning - in particular [`Localize::not_available`] is treated
/// as an opaque marker by the engine.
pub trait Localize {
    /// Heading of the batched required-fields section.
    fn required_fields_title(&self) -> String {
        "Verification data".to_string()
    }

    /// Marker shown in place of a value that is missing or could not be
    /// parsed.
    fn not_available(&self) -> String {
        "Not available".to_string()
    }

    /// Human-readable name for an element identifier.
    fn element_label(&self, element_identifier: &str) -> String {
        title_case(element_identifier)
    }

    /// Display title for a document. Defaults to the holder-assigned name,
    /// falling back to a generic title for the document's class.
    fn document_title(&self, document: &StoredDocument) -> String {
        document.display_name.clone().unwrap_or_else(|| document.class().title())
    }
}

/// Zero-configuration [`Localize`] implementation with English defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct Localizer;

impl Localize for Localizer {}

/// "portrait_capture_date" -> "Portrait Capture Date".
fn title_case(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
