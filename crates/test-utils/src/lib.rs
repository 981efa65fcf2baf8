//! # Test Utilities
//!
//! Sample stored documents and logging setup shared by the workspace's
//! tests. Documents carry realistic datasets so consent-model tests exercise
//! dates, byte payloads and composite values, not just strings.

use std::collections::{BTreeMap, HashMap};
use std::sync::Once;

use disclose::document::{
    StoredDocument, AGE_DOC_TYPE, MDL_DOC_TYPE, MDL_NAMESPACE, PID_DOC_TYPE, PID_NAMESPACE,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// Stable id of the sample PID document.
pub const PID_ID: &str = "pid-9a1f06b2";

/// Stable id of the sample mobile Driving Licence.
pub const MDL_ID: &str = "mdl-4c83d55e";

/// Stable id of the sample age verification document.
pub const AGE_ID: &str = "age-7e20c914";

/// PNG header bytes used as the sample portrait payload.
pub const PORTRAIT_BYTES: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Initialize test logging once per process. Respects `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    });
}

/// A document with the given type and one namespace of elements, under a
/// fresh random id.
pub fn document(doc_type: &str, name_space: &str, elements: Value) -> StoredDocument {
    document_with_id(&Uuid::new_v4().to_string(), doc_type, name_space, elements)
}

/// A document with the given id, type and one namespace of elements.
pub fn document_with_id(
    id: &str, doc_type: &str, name_space: &str, elements: Value,
) -> StoredDocument {
    let Value::Object(elements) = elements else {
        panic!("element data must be a JSON object");
    };
    StoredDocument {
        id: id.to_string(),
        doc_type: doc_type.to_string(),
        display_name: None,
        claims: BTreeMap::from([(name_space.to_string(), elements)]),
    }
}

/// Sample Person Identification Data document.
pub fn pid_document() -> StoredDocument {
    document_with_id(
        PID_ID,
        PID_DOC_TYPE,
        PID_NAMESPACE,
        json!({
            "family_name": "Garcia",
            "given_name": "Alex",
            "birth_date": "1990-03-14",
            "age_over_18": true,
            "issuance_date": "2024-01-01",
            "expiry_date": "2029-01-01",
            "issuing_authority": "Utopia Civil Registry",
            "document_number": "C03005988",
            "administrative_number": "9000156",
            "issuing_country": "UT",
            "issuing_jurisdiction": "UT-1",
            "portrait": PORTRAIT_BYTES.to_vec(),
            "portrait_capture_date": "2023-12-12T10:15:00Z",
        }),
    )
}

/// Sample mobile Driving Licence.
pub fn mdl_document() -> StoredDocument {
    document_with_id(
        MDL_ID,
        MDL_DOC_TYPE,
        MDL_NAMESPACE,
        json!({
            "family_name": "Garcia",
            "given_name": "Alex",
            "birth_date": "1990-03-14",
            "issue_date": "2022-06-01",
            "expiry_date": "2032-06-01",
            "issuing_country": "UT",
            "document_number": "DL-556677",
            "driving_privileges": [
                {
                    "vehicle_category_code": "A",
                    "issue_date": "2014-02-23",
                    "expiry_date": "2034-02-22"
                },
                {
                    "vehicle_category_code": "B",
                    "issue_date": "2018-08-09",
                    "expiry_date": "2038-08-08"
                }
            ],
        }),
    )
}

/// Sample age verification (18+) document.
pub fn age_document() -> StoredDocument {
    document_with_id(
        AGE_ID,
        AGE_DOC_TYPE,
        PID_NAMESPACE,
        json!({
            "age_over_18": true,
            "issuance_date": "2024-05-20",
            "expiry_date": "2025-05-20",
            "issuing_country": "UT",
            "issuing_authority": "Utopia Civil Registry",
        }),
    )
}

/// The sample documents keyed by id, ready to use as a resolver.
pub fn store() -> HashMap<String, StoredDocument> {
    [pid_document(), mdl_document(), age_document()]
        .into_iter()
        .map(|document| (document.id.clone(), document))
        .collect()
}
