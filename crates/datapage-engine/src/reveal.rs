use crate::query::QueryState;
use std::collections::BTreeSet;

/// Repeatable query parameter naming a dimension to show in full
pub const SHOW_ALL_PARAM: &str = "showAll";

/// Dimension IDs the user asked to see in full for this request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    ids: BTreeSet<String>,
}

impl RevealState {
    pub fn from_query(query: &QueryState) -> Self {
        Self {
            ids: query.get_all(SHOW_ALL_PARAM).iter().cloned().collect(),
        }
    }

    pub fn contains(&self, dimension_id: &str) -> bool {
        self.ids.contains(dimension_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RevealState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Transition a link for one dimension performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the dimension to `showAll`
    Reveal,
    /// Drop the dimension from `showAll`
    Collapse,
}

pub fn reveal_action(dimension_id: &str, current_query: &QueryState) -> RevealAction {
    if current_query.contains_value(SHOW_ALL_PARAM, dimension_id) {
        RevealAction::Collapse
    } else {
        RevealAction::Reveal
    }
}

/// Link that toggles the full option list of one dimension.
///
/// Other dimensions' `showAll` entries and unrelated parameters are kept, so
/// revealing one list never collapses a sibling. The fragment scrolls the
/// browser back to the dimension after navigation.
pub fn build_reveal_link(base_path: &str, dimension_id: &str, current_query: &QueryState) -> String {
    let mut query = current_query.clone();
    match reveal_action(dimension_id, current_query) {
        RevealAction::Reveal => query.append(SHOW_ALL_PARAM, dimension_id),
        RevealAction::Collapse => query.remove_value(SHOW_ALL_PARAM, dimension_id),
    }

    let mut link = String::from(base_path);
    let encoded = query.encode();
    if !encoded.is_empty() {
        link.push('?');
        link.push_str(&encoded);
    }
    link.push('#');
    link.push_str(dimension_id);
    link
}
