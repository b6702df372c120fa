//! Pure construction of the dialog's view tree.
//!
//! The tree is a plain description; the rendering host decides how to turn
//! it into page elements. Keeping construction side-effect free keeps the
//! dialog's state machine testable without a rendering environment.

use shared::domain::DialogMode;

/// The grey-out overlay behind the dialog box.
pub const SCREEN_ID: &str = "dialog_screen";
/// The frame the dialog box is positioned in.
pub const FRAME_ID: &str = "dialog_frame";
/// The dialog box itself.
pub const DIALOG_ID: &str = "dialog";
/// The caption row above the filename field.
pub const CAP_ID: &str = "dialog_cap";
/// The filename text input.
pub const INFIELD_ID: &str = "dialog_infield";
/// The Cancel button.
pub const CANCEL_ID: &str = "dialog_cancel";
/// The Save/Load submit button.
pub const ACCEPT_ID: &str = "dialog_accept";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Translucent rectangle greying out the window area.
    Overlay,
    Frame,
    Form,
    Row,
    TextInput,
    Button(ButtonRole),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Cancel,
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub id: String,
    pub class: Option<&'static str>,
    pub label: Option<String>,
    pub hidden: bool,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            class: None,
            label: None,
            hidden: false,
            children: Vec::new(),
        }
    }

    fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Find a node by element id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// The grey-out screen inserted under the dialog box.
pub fn overlay() -> Node {
    Node::new(NodeKind::Overlay, SCREEN_ID)
}

/// The dialog frame, box, and form for the given mode.
pub fn modal(mode: DialogMode) -> Node {
    let buttons = Node::new(NodeKind::Row, "dialog_buttonrow")
        .class("DiaButtons")
        .child(Node::new(NodeKind::Button(ButtonRole::Cancel), CANCEL_ID).label("Cancel"))
        .child(
            Node::new(NodeKind::Button(ButtonRole::Accept), ACCEPT_ID)
                .label(mode.accept_label()),
        );

    let form = Node::new(NodeKind::Form, "dialog_form")
        .child(
            Node::new(NodeKind::Row, CAP_ID)
                .class("DiaCaption")
                .label(mode.caption()),
        )
        .child(
            Node::new(NodeKind::Row, "dialog_input")
                .class("DiaInput")
                .child(Node::new(NodeKind::TextInput, INFIELD_ID)),
        )
        .child(Node::new(NodeKind::Row, "dialog_body").class("DiaBody"))
        .child(
            Node::new(NodeKind::Row, "dialog_cap2")
                .class("DiaCaption")
                .hidden(),
        )
        .child(buttons);

    Node::new(NodeKind::Frame, FRAME_ID)
        .child(Node::new(NodeKind::Row, DIALOG_ID).child(form))
}
