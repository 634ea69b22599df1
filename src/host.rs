//! Editor host contract and action dispatch
//!
//! The hosting editor owns the form values, the field metadata, and the
//! notification surface; this module consumes that contract. One
//! `execute_action` call is one menu invocation, run to completion:
//! read the field, run the controller, write back, report.

use crate::controller::{ClipboardController, CopyOutcome, PasteOutcome};
use crate::field::{FieldDescriptor, FieldValue};
use crate::menu::ActionId;
use crate::path::value_at_path;
use crate::store::SessionStore;
use serde_json::Value;

/// Error type for host-side operations
#[derive(Debug)]
pub enum HostError {
    /// The editor's value setter rejected the write
    SetValue(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::SetValue(msg) => write!(f, "Failed to set field value: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

/// Contract consumed from the hosting form/editor.
///
/// `notice` is a transient toast; `alert` blocks until dismissed. Both
/// are fire-and-forget from the controller's point of view.
pub trait EditorHost {
    /// The form's current values as one JSON map, addressable with
    /// dotted paths
    fn form_values(&self) -> &Value;

    /// Replace the value at a field path
    fn set_field_value(&mut self, path: &str, value: FieldValue) -> Result<(), HostError>;

    /// Show a transient notification
    fn notice(&mut self, message: &str);

    /// Show a blocking alert
    fn alert(&mut self, message: &str);
}

/// Run one menu action to completion.
///
/// Reads the field's current value through the dotted-path accessor,
/// invokes the matching controller operation, applies the replacement
/// value through the host's setter, and reports the outcome through
/// notice/alert. Failures never write the field; a failed copy leaves
/// the previous clipboard payload in place.
pub fn execute_action<H, S>(
    action: ActionId,
    field: &FieldDescriptor,
    host: &mut H,
    controller: &mut ClipboardController<S>,
) where
    H: EditorHost,
    S: SessionStore,
{
    let current = value_at_path(host.form_values(), &field.path)
        .map(FieldValue::from_json)
        .unwrap_or(FieldValue::Missing);

    match action {
        ActionId::CopySingleLink | ActionId::CopyMultiLinks => {
            match controller.copy(&current) {
                Ok(CopyOutcome::Copied { count }) => {
                    host.notice(&format!("Copied {} link(s).", count));
                }
                Ok(CopyOutcome::NothingToCopy) => {
                    host.alert(&format!(
                        "Nothing to copy. Field \"{}\" is empty.",
                        field.label
                    ));
                }
                Err(e) => host.alert(&format!("Error copying link(s): {}", e)),
            }
        }
        ActionId::PasteSingleLink => match controller.paste_single() {
            Ok(value) => match host.set_field_value(&field.path, value) {
                Ok(()) => host.notice("Pasted 1 link."),
                Err(e) => host.alert(&format!("Error pasting link: {}", e)),
            },
            Err(e) => host.alert(&format!("Error pasting link: {}", e)),
        },
        ActionId::PasteMultiLinks => match controller.paste_multi(&current) {
            Ok(PasteOutcome::Merged { value, added }) => {
                match host.set_field_value(&field.path, value) {
                    Ok(()) => host.notice(&format!("Pasted {} new link(s).", added)),
                    Err(e) => host.alert(&format!("Error pasting link(s): {}", e)),
                }
            }
            Ok(PasteOutcome::Replaced { value, count }) => {
                match host.set_field_value(&field.path, value) {
                    Ok(()) => host.notice(&format!("Pasted {} link(s).", count)),
                    Err(e) => host.alert(&format!("Error pasting link(s): {}", e)),
                }
            }
            Ok(PasteOutcome::NothingToPaste) => host.alert("There was nothing to paste."),
            Ok(PasteOutcome::NoNewLinks) => {
                host.alert("Error pasting link(s): Field already has all the pasted links.");
            }
            Err(e) => host.alert(&format!("Error pasting link(s): {}", e)),
        },
    }
}
