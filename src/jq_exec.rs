//! jq pre-selection: pull the field configuration out of a larger document
//! (e.g. a full widget export) before generation.
use anyhow::{anyhow, bail, Result};
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// Runs `filter_src` on `input`; each output as JSON text.
pub fn run_jaq(filter_src: &str, input: &Value) -> Result<Vec<String>> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(format_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let mut it = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    while let Some(item) = it.next() {
        let v = item.map_err(|e| anyhow!("jq runtime error: {e:?}"))?;
        out.push(format!("{v}"));
    }
    Ok(out)
}

/// Like [`run_jaq`], but the filter must produce exactly one value.
pub fn select_one(filter_src: &str, input: &Value) -> Result<String> {
    let mut outputs = run_jaq(filter_src, input)?;
    match outputs.len() {
        1 => Ok(outputs.remove(0)),
        0 => bail!("jq filter `{filter_src}` produced no output"),
        n => bail!("jq filter `{filter_src}` produced {n} outputs, expected one field configuration"),
    }
}

fn format_parse_errors(
    errs: Vec<(load::File<&str, ()>, load::Error<&str>)>,
) -> anyhow::Error {
    let mut s = String::new();
    for (file, err) in errs {
        s.push_str(&format!("jq parse error: {err:?} in `{}`\n", file.code));
    }
    anyhow!(s)
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> anyhow::Error {
    let mut s = String::new();
    for (file, list) in errs {
        for (name, undef) in list {
            s.push_str(&format!("jq: undefined `{name}`: {undef:?} in `{}`\n", file.code));
        }
    }
    anyhow!(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selects_nested_fields() {
        let doc = json!({"widget": {"fields": {"size": {"type": "number", "value": 3}}}});
        let text = select_one(".widget.fields", &doc).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json!({"size": {"type": "number", "value": 3}}));
    }

    #[test]
    fn rejects_multiple_outputs() {
        let doc = json!([{"a": {}}, {"b": {}}]);
        let err = select_one(".[]", &doc).unwrap_err();
        assert!(err.to_string().contains("2 outputs"));
    }

    #[test]
    fn rejects_empty_output() {
        let doc = json!({"a": {}});
        assert!(select_one("empty", &doc).is_err());
    }
}
