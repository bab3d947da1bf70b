//! Stream-name lists as carried by the page's `streamNames` query parameter.

use std::collections::BTreeSet;

pub const STREAM_NAMES_PARAM: &str = "streamNames";

/// Parse every occurrence of the query parameter into an ordered list.
///
/// Each value is a single name or a comma-separated list. Blank entries are
/// dropped and duplicates collapse onto their first occurrence, since a
/// stream shown twice would mount the same anchors twice.
pub fn parse_stream_names<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = Vec::new();
    for value in values {
        for name in value.split(',').map(str::trim) {
            if !name.is_empty() && !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

pub fn join_stream_names(names: &[String]) -> String {
    names.join(",")
}

/// Append names typed by the user, keeping existing order.
pub fn add_stream_names(current: &[String], input: &str) -> Vec<String> {
    let joined = join_stream_names(current);
    parse_stream_names([joined.as_str(), input])
}

pub fn remove_stream_name(current: &[String], name: &str) -> Vec<String> {
    current
        .iter()
        .filter(|existing| existing.as_str() != name)
        .cloned()
        .collect()
}

/// Streams referenced as causes that are not on the page yet, sorted.
pub fn causation_candidates<I>(displayed: &[String], referenced: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    referenced
        .into_iter()
        .filter(|name| !name.is_empty() && !displayed.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Stream views to mount and unmount when the name list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamDiff {
    pub mounted: Vec<String>,
    pub unmounted: Vec<String>,
}

impl StreamDiff {
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}

pub fn diff_stream_names(previous: &[String], next: &[String]) -> StreamDiff {
    StreamDiff {
        mounted: next
            .iter()
            .filter(|name| !previous.contains(name))
            .cloned()
            .collect(),
        unmounted: previous
            .iter()
            .filter(|name| !next.contains(name))
            .cloned()
            .collect(),
    }
}
