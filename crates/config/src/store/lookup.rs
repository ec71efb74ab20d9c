//! Dot-path resolution against a flattened namespace.
//!
//! Resolution order, first match wins:
//! 1. the path stored verbatim;
//! 2. otherwise split on the first `.` into `head` and `rest`, and look up
//!    `rest` as one immediate child of the composite stored at `head`.
//!
//! `get`, `get_or` and `exists` all go through [`resolve`], so they agree on
//! every input.

use crate::constants::PATH_DELIMITER;
use crate::types::{ConfigValue, Namespace};

pub(crate) fn resolve<'a>(namespace: &'a Namespace, path: &str) -> Option<&'a ConfigValue> {
    if let Some(value) = namespace.get(path) {
        return Some(value);
    }

    let (head, rest) = path.split_once(PATH_DELIMITER)?;
    namespace.get(head)?.child(rest)
}
