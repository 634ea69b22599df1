//! Context-menu contract exposed to the hosting editor
//!
//! Single-link fields get "Copy link" / "Paste link", multi-link fields
//! get "Copy links" / "Paste link(s)". Every other field kind gets no
//! actions (see `FieldKind::from_field_type`).

use crate::field::FieldKind;
use serde::Serialize;

/// Identifier of a dropdown menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionId {
    CopySingleLink,
    PasteSingleLink,
    CopyMultiLinks,
    PasteMultiLinks,
}

/// One entry in a field's dropdown menu
#[derive(Debug, Clone, Serialize)]
pub struct MenuAction {
    pub id: ActionId,
    pub label: &'static str,
    /// Icon name from the editor's icon set
    pub icon: &'static str,
}

/// The actions offered for a field of the given kind
pub fn actions_for(kind: FieldKind) -> Vec<MenuAction> {
    match kind {
        FieldKind::SingleLink => vec![
            MenuAction {
                id: ActionId::CopySingleLink,
                label: "Copy link",
                icon: "clipboard",
            },
            MenuAction {
                id: ActionId::PasteSingleLink,
                label: "Paste link",
                icon: "paste",
            },
        ],
        FieldKind::MultiLink => vec![
            MenuAction {
                id: ActionId::CopyMultiLinks,
                label: "Copy links",
                icon: "clipboard-list",
            },
            MenuAction {
                id: ActionId::PasteMultiLinks,
                label: "Paste link(s)",
                icon: "paste",
            },
        ],
    }
}
