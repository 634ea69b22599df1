//! Link Clipboard Controller
//!
//! Copies a reference field's identifiers into the session store and
//! pastes them back, reconciling against the target field's cardinality.
//! Each operation is one synchronous request/response. The controller
//! never writes the form itself: paste outcomes carry the replacement
//! value for the host layer to apply, so a failed paste can never leave
//! the field half-written.

use crate::field::FieldValue;
use crate::store::{SessionStore, StoreError, CLIPBOARD_KEY};
use serde::{Deserialize, Serialize};

/// What a multi-link paste does with identifiers already in the field.
///
/// `Merge` is the default and the documented behavior; `Replace` discards
/// the field's current identifiers in favor of the clipboard's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastePolicy {
    /// Union with the current identifiers: existing order preserved, new
    /// distinct entries appended in payload order, duplicates dropped
    #[default]
    Merge,
    /// Overwrite the field with the clipboard identifiers outright
    Replace,
}

/// Error type for clipboard operations
#[derive(Debug)]
pub enum ClipboardError {
    /// A single-link paste found multiple identifiers on the clipboard
    CardinalityMismatch { count: usize },
    /// A single-link paste found nothing on the clipboard
    EmptyClipboard,
    /// The session store failed underneath us
    Store(StoreError),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::CardinalityMismatch { .. } => {
                write!(f, "You cannot paste multiple links into a single-link field.")
            }
            ClipboardError::EmptyClipboard => write!(f, "There was nothing to paste."),
            ClipboardError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<StoreError> for ClipboardError {
    fn from(e: StoreError) -> Self {
        ClipboardError::Store(e)
    }
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Result of a copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Payload written; `count` is the number of comma-separated segments
    Copied { count: usize },
    /// The field was empty, nothing was written (informational, not a
    /// failure)
    NothingToCopy,
}

/// Result of a multi-link paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Merge policy: the union written back, `added` identifiers were new
    Merged { value: FieldValue, added: usize },
    /// Replace policy: the clipboard identifiers overwrite the field
    Replaced { value: FieldValue, count: usize },
    /// Clipboard empty; field untouched (informational)
    NothingToPaste,
    /// The field already holds every pasted identifier; field untouched
    NoNewLinks,
}

/// The clipboard controller: one session store plus a paste policy.
pub struct ClipboardController<S> {
    store: S,
    policy: PastePolicy,
}

impl<S: SessionStore> ClipboardController<S> {
    /// Controller with the default merge policy
    pub fn new(store: S) -> Self {
        Self::with_policy(store, PastePolicy::default())
    }

    pub fn with_policy(store: S, policy: PastePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> PastePolicy {
        self.policy
    }

    /// Serialize the field's current value onto the clipboard.
    ///
    /// An empty or missing value writes nothing and reports
    /// `NothingToCopy`. Otherwise the identifiers are comma-joined (a
    /// lone identifier passes through unchanged) and stored under
    /// [`CLIPBOARD_KEY`], overwriting any previous payload. A failed
    /// write leaves the previous payload in place.
    pub fn copy(&mut self, value: &FieldValue) -> Result<CopyOutcome> {
        let Some(payload) = value.to_payload() else {
            return Ok(CopyOutcome::NothingToCopy);
        };
        self.store.set(CLIPBOARD_KEY, &payload)?;
        let count = payload.split(',').count();
        Ok(CopyOutcome::Copied { count })
    }

    /// Paste the clipboard into a single-link field.
    ///
    /// Fails with `EmptyClipboard` when nothing was copied this session,
    /// and with `CardinalityMismatch` when the payload holds more than
    /// one identifier. On success returns the field's new value.
    pub fn paste_single(&mut self) -> Result<FieldValue> {
        let payload = self
            .read_payload()?
            .ok_or(ClipboardError::EmptyClipboard)?;
        let ids: Vec<&str> = payload.split(',').collect();
        if ids.len() > 1 {
            return Err(ClipboardError::CardinalityMismatch { count: ids.len() });
        }
        Ok(FieldValue::Single(ids[0].to_string()))
    }

    /// Paste the clipboard into a multi-link field holding `current`.
    ///
    /// Under [`PastePolicy::Merge`] the result is the ordered union of
    /// the current identifiers and the payload; under
    /// [`PastePolicy::Replace`] the payload overwrites the field. The
    /// field is never written here: the outcome carries the value.
    pub fn paste_multi(&mut self, current: &FieldValue) -> Result<PasteOutcome> {
        let Some(payload) = self.read_payload()? else {
            return Ok(PasteOutcome::NothingToPaste);
        };
        let incoming: Vec<String> = payload.split(',').map(str::to_string).collect();

        match self.policy {
            PastePolicy::Replace => Ok(PasteOutcome::Replaced {
                count: incoming.len(),
                value: FieldValue::Many(incoming),
            }),
            PastePolicy::Merge => {
                let existing = current.to_vec();
                let mut merged = existing.clone();
                for id in incoming {
                    if !merged.contains(&id) {
                        merged.push(id);
                    }
                }
                // The merge only ever appends, so an unchanged length
                // means an unchanged value.
                if merged.len() == existing.len() {
                    return Ok(PasteOutcome::NoNewLinks);
                }
                let added = merged.len() - existing.len();
                Ok(PasteOutcome::Merged {
                    value: FieldValue::Many(merged),
                    added,
                })
            }
        }
    }

    /// The current payload, with an empty string treated as absent
    fn read_payload(&self) -> Result<Option<String>> {
        Ok(self.store.get(CLIPBOARD_KEY)?.filter(|p| !p.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    fn many(ids: &[&str]) -> FieldValue {
        FieldValue::Many(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_copy_reports_segment_count() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        let outcome = controller.copy(&many(&["a", "b", "c"])).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { count: 3 });

        let outcome = controller
            .copy(&FieldValue::Single("rec_1".to_string()))
            .unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { count: 1 });
    }

    #[test]
    fn test_copy_empty_field_writes_nothing() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        assert_eq!(
            controller.copy(&FieldValue::Missing).unwrap(),
            CopyOutcome::NothingToCopy
        );
        assert_eq!(
            controller.copy(&FieldValue::Many(vec![])).unwrap(),
            CopyOutcome::NothingToCopy
        );
        // Clipboard untouched, so a paste still reports empty
        assert!(matches!(
            controller.paste_single(),
            Err(ClipboardError::EmptyClipboard)
        ));
    }

    #[test]
    fn test_copy_overwrites_previous_payload() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller.copy(&many(&["a", "b"])).unwrap();
        controller
            .copy(&FieldValue::Single("z".to_string()))
            .unwrap();
        assert_eq!(
            controller.paste_single().unwrap(),
            FieldValue::Single("z".to_string())
        );
    }

    #[test]
    fn test_paste_single_with_empty_clipboard() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        let err = controller.paste_single().unwrap_err();
        assert!(matches!(err, ClipboardError::EmptyClipboard));
        assert_eq!(err.to_string(), "There was nothing to paste.");
    }

    #[test]
    fn test_paste_single_rejects_multiple_links() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller.copy(&many(&["a", "b", "c"])).unwrap();
        let err = controller.paste_single().unwrap_err();
        assert!(matches!(
            err,
            ClipboardError::CardinalityMismatch { count: 3 }
        ));
        assert_eq!(
            err.to_string(),
            "You cannot paste multiple links into a single-link field."
        );
    }

    #[test]
    fn test_paste_single_accepts_lone_link_from_multi_copy() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller.copy(&many(&["only"])).unwrap();
        assert_eq!(
            controller.paste_single().unwrap(),
            FieldValue::Single("only".to_string())
        );
    }

    #[test]
    fn test_paste_multi_with_empty_clipboard() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        let outcome = controller.paste_multi(&many(&["a"])).unwrap();
        assert_eq!(outcome, PasteOutcome::NothingToPaste);
    }

    #[test]
    fn test_paste_multi_merges_in_order() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller.copy(&many(&["a", "b"])).unwrap();
        let outcome = controller.paste_multi(&many(&["b", "c"])).unwrap();
        assert_eq!(
            outcome,
            PasteOutcome::Merged {
                value: many(&["b", "c", "a"]),
                added: 1
            }
        );
    }

    #[test]
    fn test_paste_multi_into_empty_field() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller.copy(&many(&["a", "b"])).unwrap();
        let outcome = controller.paste_multi(&FieldValue::Missing).unwrap();
        assert_eq!(
            outcome,
            PasteOutcome::Merged {
                value: many(&["a", "b"]),
                added: 2
            }
        );
    }

    #[test]
    fn test_paste_multi_no_new_links() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller.copy(&many(&["a", "b"])).unwrap();
        let outcome = controller.paste_multi(&many(&["a", "b"])).unwrap();
        assert_eq!(outcome, PasteOutcome::NoNewLinks);
    }

    #[test]
    fn test_paste_multi_single_copied_into_multi() {
        let mut controller = ClipboardController::new(MemoryStore::new());
        controller
            .copy(&FieldValue::Single("a".to_string()))
            .unwrap();
        let outcome = controller.paste_multi(&many(&["b"])).unwrap();
        assert_eq!(
            outcome,
            PasteOutcome::Merged {
                value: many(&["b", "a"]),
                added: 1
            }
        );
    }

    #[test]
    fn test_replace_policy_overwrites() {
        let mut controller =
            ClipboardController::with_policy(MemoryStore::new(), PastePolicy::Replace);
        controller.copy(&many(&["a", "b"])).unwrap();
        let outcome = controller.paste_multi(&many(&["x", "y", "z"])).unwrap();
        assert_eq!(
            outcome,
            PasteOutcome::Replaced {
                value: many(&["a", "b"]),
                count: 2
            }
        );
    }

    #[test]
    fn test_replace_policy_with_empty_clipboard() {
        let mut controller =
            ClipboardController::with_policy(MemoryStore::new(), PastePolicy::Replace);
        let outcome = controller.paste_multi(&many(&["x"])).unwrap();
        assert_eq!(outcome, PasteOutcome::NothingToPaste);
    }

    proptest! {
        // Copy then paste-into-single roundtrips any identifier that
        // contains no comma.
        #[test]
        fn prop_copy_paste_single_roundtrip(id in "[^,]{1,40}") {
            let mut controller = ClipboardController::new(MemoryStore::new());
            controller.copy(&FieldValue::Single(id.clone())).unwrap();
            prop_assert_eq!(controller.paste_single().unwrap(), FieldValue::Single(id));
        }

        // Merging a payload into the field it was copied from is always
        // a no-op.
        #[test]
        fn prop_self_merge_is_noop(ids in proptest::collection::vec("[a-z0-9_]{1,12}", 1..8)) {
            let mut deduped: Vec<String> = Vec::new();
            for id in ids {
                if !deduped.contains(&id) {
                    deduped.push(id);
                }
            }
            let value = FieldValue::Many(deduped);
            let mut controller = ClipboardController::new(MemoryStore::new());
            controller.copy(&value).unwrap();
            prop_assert_eq!(controller.paste_multi(&value).unwrap(), PasteOutcome::NoNewLinks);
        }
    }
}
