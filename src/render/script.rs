//! Behavior script: one handler entry per interactive node with an action.
//!
//! Each entry binds a handler name derived from the node's identifier to a
//! function invoking the captured action:
//!
//! ```text
//! a3OnClick: () => {
//!   (signIn)();
//! },
//! ```

use crate::id::Identifier;
use crate::view::node::Action;

/// DOM event a handler listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerEvent {
    Click,
}

impl HandlerEvent {
    pub fn name(self) -> &'static str {
        match self {
            HandlerEvent::Click => "Click",
        }
    }
}

/// A registration of `action` for `event` on the node named `identifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerBinding {
    pub identifier: Identifier,
    pub event: HandlerEvent,
    pub action: Action,
}

impl HandlerBinding {
    pub fn new(identifier: Identifier, event: HandlerEvent, action: Action) -> Self {
        Self {
            identifier,
            event,
            action,
        }
    }

    /// Script-side name of the handler (`a3OnClick`).
    pub fn handler_name(&self) -> String {
        format!("{}On{}", self.identifier, self.event.name())
    }

    fn write_entry(&self, out: &mut String, indent: usize) {
        out.push_str(&format!("{}: () => {{\n", self.handler_name()));
        out.push_str(&format!("{:indent$}({})();\n", "", self.action.source()));
        out.push_str("},\n");
    }
}

/// Format handler entries in the given order.
pub fn write_script(handlers: &[HandlerBinding], indent: usize) -> String {
    let mut out = String::new();
    for handler in handlers {
        handler.write_entry(&mut out, indent);
    }
    out
}
