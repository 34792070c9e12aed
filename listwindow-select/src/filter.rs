use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::options::LabelOf;

/// Identifies one issued asynchronous search.
///
/// Tokens increase monotonically; a resolution only applies when its token
/// is the latest issued, so a slow response can never overwrite the result
/// of a newer request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchToken(pub u64);

/// Hook invoked to start an asynchronous search.
///
/// The embedding layer performs the lookup however it likes and reports
/// back through `Select::resolve_search` with the same token.
pub type SearchHook = Arc<dyn Fn(&str, SearchToken) + Send + Sync>;

/// Where result sets come from. Selected at construction, mutually
/// exclusive.
pub enum FilterSource<T> {
    /// An in-memory master list, prefix-filtered inline on every search.
    /// The master list survives filtering; each cycle filters from scratch.
    Sync { data: Vec<T> },
    /// An external lookup; the widget shows a loading indicator from
    /// invocation until the matching resolution arrives.
    Async { hook: SearchHook },
}

impl<T> fmt::Debug for FilterSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync { data } => f.debug_struct("Sync").field("len", &data.len()).finish(),
            Self::Async { .. } => f.write_str("Async(..)"),
        }
    }
}

/// Case-insensitive prefix match.
///
/// Compared character by character through Unicode uppercasing, so
/// multi-byte labels are never sliced mid-character and `"ap"` matches
/// `"Apple"` exactly like `"AP"` does.
pub fn prefix_matches(label: &str, keyword: &str) -> bool {
    let mut label_chars = label.chars().flat_map(|c| c.to_uppercase());
    let mut keyword_chars = keyword.chars().flat_map(|c| c.to_uppercase());
    loop {
        match (label_chars.next(), keyword_chars.next()) {
            (_, None) => return true,
            (None, Some(_)) => return false,
            (Some(l), Some(k)) if l != k => return false,
            _ => {}
        }
    }
}

/// Items whose label starts with `keyword`, in dataset order.
pub fn filter_by_prefix<T: Clone>(data: &[T], keyword: &str, label_of: &LabelOf<T>) -> Vec<T> {
    data.iter()
        .filter(|item| prefix_matches(label_of(item), keyword))
        .cloned()
        .collect()
}
