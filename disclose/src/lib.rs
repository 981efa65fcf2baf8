//! # Selective Disclosure Consent Engine
//!
//! A wallet holding digital identity documents (a Person Identification Data
//! document, a mobile Driving Licence, ...) receives requests from verifiers
//! for specific data elements. This crate turns such a request, together with
//! the holder's stored documents, into a structured consent model the holder
//! can review, and reduces the holder's final selections back into the
//! minimal wire-ready disclosure set.
//!
//! The crate does not provide a user or service interface, nor any transport
//! or proof construction - those are the job of the hosting wallet. It also
//! never touches ciphertext: documents arrive as already-decoded snapshots
//! via the [`provider::DocumentResolver`] seam.
//!
//! # Design
//!
//! ** Consent model **
//!
//! [`ConsentBuilder::build`] runs once per incoming request and produces a
//! [`ConsentModel`]: one [`DocumentGroup`] per requested document, in request
//! order, with the document's mandatory elements batched into a single
//! required block and its optional elements listed individually. Every model
//! type serializes to and from JSON so the hosting shell can move snapshots
//! across its UI boundary.
//!
//! ** Transitions **
//!
//! The model is an immutable value. User events are applied with
//! [`ConsentModel::toggle_optional_item`] and
//! [`ConsentModel::toggle_required_block`], each returning a new snapshot.
//! The host owns the single current snapshot and applies transitions one at
//! a time.
//!
//! ** Selection **
//!
//! On submission, [`ConsentModel::selection`] reduces the final snapshot to a
//! [`DisclosureSelection`]: the checked `(namespace, element identifier)`
//! pairs per document, ready for the transport layer to encode and sign.

pub mod consent;
pub mod document;
mod error;
pub mod extract;
pub mod policy;
pub mod provider;
pub mod view;

pub use consent::{
    ConsentBuilder, ConsentModel, DisclosureItem, DisclosureSelection, DocumentGroup, ItemUid,
};
pub use document::{RequestedElement, StoredDocument};
pub use error::{Error, Result};
