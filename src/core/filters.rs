use crate::core::matcher::{RecordFacets, Selections};

/// Free-text part of the match predicate
///
/// `needle` must already be lowercased. An empty needle matches everything;
/// otherwise it has to appear in the record's name or in any of its tags.
#[inline]
pub fn matches_text(record: &RecordFacets<'_>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if record.name.to_lowercase().contains(needle) {
        return true;
    }

    record
        .all_tags()
        .any(|tag| tag.to_lowercase().contains(needle))
}

/// Tag part of the match predicate
///
/// Every category with a non-empty selection must share at least one tag
/// with the record. Tags compare exactly.
#[inline]
pub fn matches_selections(record: &RecordFacets<'_>, selections: &Selections) -> bool {
    selections
        .iter()
        .filter(|(_, selected)| !selected.is_empty())
        .all(|(category, selected)| {
            record.tags(*category).iter().any(|tag| selected.contains(tag))
        })
}
