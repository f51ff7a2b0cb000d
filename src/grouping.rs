//! Grouping and pixel-size deduplication
//!
//! Resources are bucketed by family and style. Before a group is built its
//! members are sorted ascending by pixel size and only the first resource
//! of each size is kept.

use crate::data::{FamilyStyleKey, FontResource};
use std::collections::BTreeMap;

/// Deduplicated, size-ordered members of one family/style
///
/// Always non-empty, so `smallest` and `largest` are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildGroup {
    members: Vec<FontResource>,
}

impl BuildGroup {
    /// Sort (stable) by pixel size and drop later duplicates
    ///
    /// Returns `None` when nothing with a resolved pixel size remains.
    pub fn new(mut entries: Vec<FontResource>) -> Option<Self> {
        entries.retain(FontResource::is_resolved);
        entries.sort_by_key(|resource| resource.pixel_size);
        entries.dedup_by_key(|resource| resource.pixel_size);

        if entries.is_empty() {
            None
        } else {
            Some(Self { members: entries })
        }
    }

    pub fn members(&self) -> &[FontResource] {
        &self.members
    }

    /// Metadata source and base of the consolidated font
    pub fn smallest(&self) -> &FontResource {
        &self.members[0]
    }

    /// Outline source and em basis
    pub fn largest(&self) -> &FontResource {
        &self.members[self.members.len() - 1]
    }

    /// Members after the smallest, imported as additional strikes
    pub fn additional_strikes(&self) -> &[FontResource] {
        &self.members[1..]
    }

    pub fn pixel_sizes(&self) -> Vec<u32> {
        self.members.iter().map(|r| r.pixel_size).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Accumulates resources per family/style before deduplication
#[derive(Debug, Default, Clone)]
pub struct GroupSet {
    groups: BTreeMap<FamilyStyleKey, Vec<FontResource>>,
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource; unresolved pixel sizes are ignored
    pub fn add(&mut self, key: FamilyStyleKey, resource: FontResource) -> bool {
        if !resource.is_resolved() {
            return false;
        }
        self.groups.entry(key).or_default().push(resource);
        true
    }

    /// Append every entry of `other`, keeping per-key insertion order
    pub fn merge(&mut self, other: GroupSet) {
        for (key, entries) in other.groups {
            self.groups.entry(key).or_default().extend(entries);
        }
    }

    /// Raw (not yet deduplicated) entries of a key
    pub fn entries(&self, key: &FamilyStyleKey) -> &[FontResource] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &FamilyStyleKey> {
        self.groups.keys()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of resources across all keys
    pub fn resource_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Deduplicated groups in key order, empty groups omitted
    pub fn into_build_groups(self) -> Vec<(FamilyStyleKey, BuildGroup)> {
        self.groups
            .into_iter()
            .filter_map(|(key, entries)| BuildGroup::new(entries).map(|group| (key, group)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SourceKind, Style};

    fn res(name: &str, px: u32) -> FontResource {
        FontResource::new(
            format!("/fonts/{name}.pcf.gz"),
            format!("/tmp/{name}.bdf"),
            name,
            px,
            SourceKind::Proportional,
        )
    }

    fn names(group: &BuildGroup) -> Vec<&str> {
        group.members().iter().map(|r| r.basename.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_and_keeps_first_of_each_size() {
        let group = BuildGroup::new(vec![
            res("helvR14_75", 14),
            res("helvR10_75", 10),
            res("helvR10_100", 10),
            res("helvR12_75", 12),
            res("helvR14_100", 14),
        ])
        .unwrap();

        assert_eq!(group.pixel_sizes(), vec![10, 12, 14]);
        assert_eq!(names(&group), vec!["helvR10_75", "helvR12_75", "helvR14_75"]);
        assert_eq!(group.smallest().basename, "helvR10_75");
        assert_eq!(group.largest().basename, "helvR14_75");
        assert_eq!(group.additional_strikes().len(), 2);
    }

    #[test]
    fn deduplication_is_idempotent() {
        let once = BuildGroup::new(vec![
            res("a", 12),
            res("b", 8),
            res("c", 12),
            res("d", 8),
            res("e", 24),
        ])
        .unwrap();
        let twice = BuildGroup::new(once.members().to_vec()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn extremes_bound_every_member() {
        let group =
            BuildGroup::new(vec![res("x", 18), res("y", 7), res("z", 13), res("w", 7)]).unwrap();
        for member in group.members() {
            assert!(group.smallest().pixel_size <= member.pixel_size);
            assert!(group.largest().pixel_size >= member.pixel_size);
        }
        assert_eq!(group.smallest().basename, "y");
    }

    #[test]
    fn singleton_group_is_both_smallest_and_largest() {
        let group = BuildGroup::new(vec![res("6x13", 13)]).unwrap();
        assert_eq!(group.smallest(), group.largest());
        assert!(group.additional_strikes().is_empty());
    }

    #[test]
    fn unresolved_only_groups_are_never_built() {
        assert!(BuildGroup::new(vec![]).is_none());
        assert!(BuildGroup::new(vec![res("broken", 0)]).is_none());

        let mut set = GroupSet::new();
        assert!(!set.add(FamilyStyleKey::new("X11Helv", Style::Regular), res("broken", 0)));
        assert!(set.is_empty());
        assert!(set.into_build_groups().is_empty());
    }

    #[test]
    fn group_set_buckets_by_key_and_merges_in_order() {
        let regular = FamilyStyleKey::new("X11Helv", Style::Regular);
        let bold = FamilyStyleKey::new("X11Helv", Style::Bold);

        let mut first = GroupSet::new();
        first.add(regular.clone(), res("helvR10", 10));
        first.add(bold.clone(), res("helvB12", 12));

        let mut second = GroupSet::new();
        second.add(regular.clone(), res("helvR10_dup", 10));
        second.add(regular.clone(), res("helvR08", 8));

        first.merge(second);
        assert_eq!(first.len(), 2);
        assert_eq!(first.resource_count(), 4);
        assert_eq!(first.entries(&regular).len(), 3);

        let groups = first.into_build_groups();
        let keys: Vec<String> = groups.iter().map(|(k, _)| k.font_name()).collect();
        assert_eq!(keys, vec!["X11Helv-Bold", "X11Helv-Regular"]);

        let (_, regular_group) = &groups[1];
        assert_eq!(names(regular_group), vec!["helvR08", "helvR10"]);
    }
}
