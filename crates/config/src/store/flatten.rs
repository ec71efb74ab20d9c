//! Flattening of nested mappings into the dot-path namespace.
//!
//! Responsibilities:
//! - Store every value reachable from a root mapping under its dot-path.
//! - Keep composite values verbatim at their own path next to their children.
//! - Store the load's top-level mapping at the bare prefix path.
//!
//! Does NOT handle:
//! - Rejecting non-mapping roots (see `loader::pipeline`).
//! - Resolving lookups (see `lookup.rs`).
//!
//! Invariants:
//! - Last write wins per exact path; composites are replaced, never deep-merged.
//! - Sequence elements are addressed by their decimal index.
//! - Only the bare prefix gets an aggregate entry; intermediate paths below it
//!   hold their own full composite value and nothing else.
//! - An empty root mapping writes nothing, not even the prefix aggregate.

use crate::constants::PATH_DELIMITER;
use crate::types::{ConfigValue, Mapping, Namespace};

/// Join two path segments with the path delimiter.
pub(crate) fn join_path(parent: &str, child: &str) -> String {
    let mut path = String::with_capacity(parent.len() + child.len() + 1);
    path.push_str(parent);
    path.push(PATH_DELIMITER);
    path.push_str(child);
    path
}

/// Flatten `mapping` into `namespace`, returning the number of entries written.
pub(crate) fn flatten(
    namespace: &mut Namespace,
    mapping: &Mapping,
    prefix: Option<&str>,
) -> usize {
    if mapping.is_empty() {
        return 0;
    }

    let mut written = 0;
    if let Some(prefix) = prefix {
        namespace.insert(prefix.to_string(), ConfigValue::Mapping(mapping.clone()));
        written += 1;
    }

    for (key, value) in mapping.iter() {
        let path = match prefix {
            Some(prefix) => join_path(prefix, key),
            None => key.to_string(),
        };
        written += add(namespace, path, value);
    }
    written
}

fn add(namespace: &mut Namespace, path: String, value: &ConfigValue) -> usize {
    let mut written = 1;
    match value {
        ConfigValue::Mapping(map) => {
            namespace.insert(path.clone(), value.clone());
            for (key, child) in map.iter() {
                written += add(namespace, join_path(&path, key), child);
            }
        }
        ConfigValue::Sequence(items) => {
            namespace.insert(path.clone(), value.clone());
            for (index, child) in items.iter().enumerate() {
                written += add(namespace, join_path(&path, &index.to_string()), child);
            }
        }
        ConfigValue::Null
        | ConfigValue::Bool(_)
        | ConfigValue::Integer(_)
        | ConfigValue::Float(_)
        | ConfigValue::String(_) => {
            namespace.insert(path, value.clone());
        }
    }
    written
}
