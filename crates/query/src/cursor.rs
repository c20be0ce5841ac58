//! Opaque pagination cursor codec
//!
//! A cursor is the `(sort value, id)` pair of the last record on a page,
//! serialized as JSON and wrapped in URL-safe unpadded base64. Structured
//! encoding, not string concatenation: field content can never collide with
//! a separator.
//!
//! The codec is pure and allocation-only; it never touches the store. A
//! well-formed cursor pointing at a since-deleted record decodes fine —
//! staleness is the paginator's concern, and it handles it by construction
//! (the keyset predicate only needs the cursor's values).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use studyhall_core::{CursorError, SortKey};

/// Decoded pagination cursor
///
/// Callers treat the encoded form as a black box; only this codec constructs
/// or inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cursor {
    /// Sort-field value of the last record on the previous page
    pub sort_value: String,
    /// Id of the last record on the previous page
    pub id: String,
}

impl Cursor {
    /// Create a cursor from its parts
    pub fn new(sort_value: impl Into<String>, id: impl Into<String>) -> Self {
        Cursor {
            sort_value: sort_value.into(),
            id: id.into(),
        }
    }

    /// Create a cursor from a record's sort key
    pub fn from_sort_key(key: &SortKey) -> Self {
        Cursor {
            sort_value: key.value.clone(),
            id: key.id.clone(),
        }
    }

    /// The sort key this cursor positions after
    pub fn sort_key(&self) -> SortKey {
        SortKey::new(self.sort_value.clone(), self.id.clone())
    }

    /// Encode into the opaque wire form
    pub fn encode(&self) -> String {
        let payload =
            serde_json::to_vec(self).expect("two-string cursor payload always serializes");
        URL_SAFE_NO_PAD.encode(payload)
    }

    /// Decode an opaque cursor string
    ///
    /// Every failure mode — bad base64, bad UTF-8, bad JSON, wrong shape,
    /// empty fields — is [`CursorError::Malformed`]. Decoding never panics
    /// on arbitrary input.
    pub fn decode(raw: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(raw)
            .map_err(|_| CursorError::Malformed)?;
        let cursor: Cursor =
            serde_json::from_slice(&bytes).map_err(|_| CursorError::Malformed)?;
        if cursor.sort_value.is_empty() || cursor.id.is_empty() {
            return Err(CursorError::Malformed);
        }
        Ok(cursor)
    }
}
