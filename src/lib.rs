//! Linkclip - session clipboard for reference fields
//!
//! Copy the identifier(s) held by a reference field in a record-editing
//! form, then paste them into another reference field. The clipboard is
//! one comma-joined string in session-scoped storage; pasting reconciles
//! it against the target field's cardinality.
//!
//! # Menu contract
//!
//! | Field kind | Actions |
//! |------------|---------|
//! | single-link | "Copy link", "Paste link" |
//! | multi-link | "Copy links", "Paste link(s)" |
//!
//! Other field kinds get no actions.
//!
//! # Quick Start
//!
//! ```
//! use linkclip::{ClipboardController, FieldValue, MemoryStore, PasteOutcome};
//!
//! let mut controller = ClipboardController::new(MemoryStore::new());
//!
//! // Copy two links from one field
//! let source = FieldValue::Many(vec!["rec_a".into(), "rec_b".into()]);
//! controller.copy(&source).unwrap();
//!
//! // Paste into a field that already holds one of them
//! let target = FieldValue::Many(vec!["rec_b".into(), "rec_c".into()]);
//! let outcome = controller.paste_multi(&target).unwrap();
//! assert_eq!(
//!     outcome,
//!     PasteOutcome::Merged {
//!         value: FieldValue::Many(vec![
//!             "rec_b".into(),
//!             "rec_c".into(),
//!             "rec_a".into(),
//!         ]),
//!         added: 1,
//!     }
//! );
//! ```
//!
//! The hosting editor is consumed through the [`EditorHost`] trait and
//! the session storage through [`SessionStore`]; neither is
//! reimplemented here. [`execute_action`] wires one menu invocation end
//! to end, notification messages included.

pub mod config;
pub mod controller;
pub mod field;
pub mod host;
pub mod menu;
pub mod path;
pub mod store;

pub use config::{Config, PasteConfig};
pub use controller::{
    ClipboardController, ClipboardError, CopyOutcome, PasteOutcome, PastePolicy,
};
pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use host::{execute_action, EditorHost, HostError};
pub use menu::{actions_for, ActionId, MenuAction};
pub use path::value_at_path;
pub use store::{MemoryStore, SessionStore, StoreError, CLIPBOARD_KEY};
