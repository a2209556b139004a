//! Dotted-path addressing over a YAML value tree
//!
//! `a.b.c` walks nested mappings by string key. Null leaves count as absent.

use serde_yaml::{Mapping, Value};

pub const SEPARATOR: char = '.';

/// Value stored at `path`, if any
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = tree;
    for segment in path.split(SEPARATOR) {
        current = current.as_mapping()?.get(segment)?;
    }
    (!current.is_null()).then_some(current)
}

/// Store `value` at `path`, creating intermediate sections as needed
///
/// A non-mapping value sitting where a section is required is replaced.
pub fn assign(tree: &mut Value, path: &str, value: Value) {
    if !tree.is_mapping() {
        *tree = Value::Mapping(Mapping::new());
    }
    let Value::Mapping(map) = tree else {
        return;
    };
    match path.split_once(SEPARATOR) {
        None => {
            map.insert(Value::String(path.to_string()), value);
        }
        Some((head, rest)) => {
            let child = map
                .entry(Value::String(head.to_string()))
                .or_insert(Value::Null);
            assign(child, rest, value);
        }
    }
}

/// Every path in the tree, sections included, in document order
pub fn deep_keys(tree: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(tree, None, &mut keys);
    keys
}

fn collect_keys(tree: &Value, prefix: Option<&str>, out: &mut Vec<String>) {
    let Some(map) = tree.as_mapping() else {
        return;
    };
    for (key, value) in map {
        let Some(key) = key.as_str() else {
            continue;
        };
        let full = match prefix {
            Some(prefix) => format!("{prefix}{SEPARATOR}{key}"),
            None => key.to_string(),
        };
        out.push(full.clone());
        collect_keys(value, Some(&full), out);
    }
}

/// Stored path matching `raw` ignoring case, or `raw` itself
///
/// The first match in document order wins when several paths differ only
/// by case.
pub fn resolve_case_insensitive(tree: &Value, raw: &str) -> String {
    resolve_among(deep_keys(tree), raw)
}

/// Same as [`resolve_case_insensitive`] over an explicit key list
pub fn resolve_among<I>(keys: I, raw: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let wanted = raw.to_lowercase();
    keys.into_iter()
        .find(|key| key.to_lowercase() == wanted)
        .unwrap_or_else(|| raw.to_string())
}
