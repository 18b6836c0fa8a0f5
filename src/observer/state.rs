use std::collections::HashMap;

use crate::external::sirens::{RegionId, RegionStatus, StatusMap};

/// Last observed status of every region reported so far.
///
/// Keys are inserted or overwritten, never removed: a region that drops out
/// of the API response keeps its last known status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationState {
    regions: HashMap<RegionId, RegionStatus>,
}

impl ObservationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a snapshot, last write wins. Returns the number of regions written.
    pub fn merge(&mut self, snapshot: StatusMap) -> usize {
        let written = snapshot.len();
        self.regions.extend(snapshot);
        written
    }

    pub fn get(&self, region: &str) -> Option<&RegionStatus> {
        self.regions.get(region)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, &RegionStatus)> {
        self.regions.iter()
    }

    /// Regions whose latest status is `full` or `partial`, sorted by name.
    pub fn active_regions(&self) -> Vec<RegionId> {
        let mut active: Vec<RegionId> = self
            .regions
            .iter()
            .filter(|(_, status)| status.is_active())
            .map(|(region, _)| region.clone())
            .collect();
        active.sort();
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[(&str, &str)]) -> StatusMap {
        entries
            .iter()
            .map(|(region, tag)| (region.to_string(), RegionStatus::from_tag(tag)))
            .collect()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = ObservationState::new();
        assert!(state.is_empty());
        assert!(state.active_regions().is_empty());
    }

    #[test]
    fn test_merge_overwrites_existing_region() {
        let mut state = ObservationState::new();
        state.merge(snapshot(&[("Kyiv", "full")]));
        state.merge(snapshot(&[("Kyiv", "no_data")]));

        assert_eq!(state.len(), 1);
        assert_eq!(state.get("Kyiv"), Some(&RegionStatus::NoData));
    }

    #[test]
    fn test_merge_never_drops_regions() {
        let mut state = ObservationState::new();
        state.merge(snapshot(&[("Kyiv", "full"), ("Lviv", "partial")]));
        state.merge(snapshot(&[("Odesa", "no_data")]));
        state.merge(StatusMap::new());

        assert_eq!(state.len(), 3);
        assert_eq!(state.get("Kyiv"), Some(&RegionStatus::Full));
        assert_eq!(state.get("Lviv"), Some(&RegionStatus::Partial));
    }

    #[test]
    fn test_merge_reports_written_count() {
        let mut state = ObservationState::new();
        assert_eq!(state.merge(snapshot(&[("Kyiv", "full"), ("Lviv", "no_data")])), 2);
        assert_eq!(state.merge(StatusMap::new()), 0);
    }

    #[test]
    fn test_active_regions_are_sorted() {
        let mut state = ObservationState::new();
        state.merge(snapshot(&[
            ("Zhytomyr", "partial"),
            ("Kyiv", "full"),
            ("Lviv", "no_data"),
            ("Cherkasy", "full"),
            ("Poltava", "unknown_tag"),
        ]));

        assert_eq!(state.active_regions(), vec!["Cherkasy", "Kyiv", "Zhytomyr"]);
    }
}
