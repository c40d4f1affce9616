//! Widget field configuration → script source.
//!
//! ```text
//! raw text ──parse──▶ FieldConfig ──classify──▶ [ClassifiedField] ──codegen──▶ code
//! ```
//!
//! [`generate`] is pure: no I/O, no shared state, same input → same output.
pub mod classify;
pub mod codegen;
pub mod example;
pub mod highlight;
pub mod ident;
pub mod ir;
pub mod jq_exec;
pub mod parse;

pub use ir::{ClassifiedField, DefaultValue, FieldCategory, GenerationResult, NO_FIELDS_CODE};
pub use parse::{ConfigError, FieldConfig, Parsed};

pub fn generate(text: &str) -> GenerationResult {
    // 1) parse & validate
    let config = match parse::parse_config(text) {
        Ok(Parsed::Blank) => return GenerationResult::Empty,
        Ok(Parsed::Config(config)) => config,
        Err(error) => {
            tracing::debug!(%error, "configuration rejected");
            return GenerationResult::ParseError { message: error.to_string() };
        }
    };
    if config.is_empty() {
        return GenerationResult::no_fields(Vec::new());
    }

    // 2) classify & compute defaults
    let classify::Classification { fields, warnings } = classify::classify(&config);
    if fields.is_empty() {
        return GenerationResult::no_fields(warnings);
    }

    // 3) emit
    let code = codegen::render(&fields);
    tracing::debug!(fields = fields.len(), bytes = code.len(), "generated code");
    GenerationResult::Success { code, warnings }
}
