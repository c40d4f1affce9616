//! Emitter: classified fields → script source.
//!
//! Output is three blocks separated by one blank line:
//! 1. a combined `let` declaration with each field's default,
//! 2. a constant `onEventReceived` stub,
//! 3. an `onWidgetLoad` handler that sorts `recents` by `createdAt` and
//!    reassigns every field from `fieldData`.
//!
//! Lines are joined with `\n`; there is no trailing newline.
pub mod literal;

use crate::ident::field_access;
use crate::ir::{ClassifiedField, FieldCategory};

/// Payload object the load handler reads field values from.
pub const FIELD_DATA: &str = "fieldData";

const INDENT: &str = "    ";

const ON_EVENT_RECEIVED: &[&str] = &[
    "window.addEventListener('onEventReceived', function (obj) {",
    "    if (!obj.detail.event) {",
    "      return;",
    "    }",
    "});",
];

const ON_WIDGET_LOAD_PREAMBLE: &[&str] = &[
    "window.addEventListener('onWidgetLoad', function (obj) {",
    "    let recents = obj.detail.recents;",
    "    recents.sort(function (a, b) {",
    "        return Date.parse(a.createdAt) - Date.parse(b.createdAt);",
    "    });",
    "    const fieldData = obj.detail.fieldData;",
];

const ON_WIDGET_LOAD_CLOSE: &str = "});";

#[derive(Debug, Default)]
pub struct Codegen {
    lines: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends all three blocks for `fields`. An empty slice emits nothing.
    pub fn emit(&mut self, fields: &[ClassifiedField]) {
        if fields.is_empty() {
            return;
        }
        self.emit_declarations(fields);
        self.blank();
        self.emit_event_stub();
        self.blank();
        self.emit_load_handler(fields);
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn emit_declarations(&mut self, fields: &[ClassifiedField]) {
        let last = fields.len() - 1;
        for (i, f) in fields.iter().enumerate() {
            let prefix = if i == 0 { "let " } else { INDENT };
            let suffix = if i < last { ',' } else { ';' };
            let value = literal::format_default(&f.default_value);
            self.line(format!("{prefix}{} = {value}{suffix}", f.emitted_identifier));
        }
    }

    fn emit_event_stub(&mut self) {
        for l in ON_EVENT_RECEIVED {
            self.line(*l);
        }
    }

    fn emit_load_handler(&mut self, fields: &[ClassifiedField]) {
        for l in ON_WIDGET_LOAD_PREAMBLE {
            self.line(*l);
        }
        for f in fields {
            let access = field_access(FIELD_DATA, &f.original_name);
            let assignment = match f.category {
                FieldCategory::Boolean => format!("({access} === \"yes\")"),
                _ => access,
            };
            self.line(format!("{INDENT}{} = {assignment};", f.emitted_identifier));
        }
        self.line(ON_WIDGET_LOAD_CLOSE);
    }
}

/// Convenience: render `fields` in one go.
pub fn render(fields: &[ClassifiedField]) -> String {
    let mut cg = Codegen::new();
    cg.emit(fields);
    cg.into_string()
}
