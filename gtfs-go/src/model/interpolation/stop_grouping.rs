use std::collections::HashMap;

use crate::model::interpolation::CanonicalStopGroup;

/// the result of grouping stops: every stop belongs to exactly one group.
#[derive(Debug, Clone, Default)]
pub struct StopGrouping {
    groups: Vec<CanonicalStopGroup>,
    membership: HashMap<String, usize>,
}

impl StopGrouping {
    pub fn new(mut groups: Vec<CanonicalStopGroup>) -> StopGrouping {
        groups.sort_by(|a, b| a.id.cmp(&b.id));
        let membership = groups
            .iter()
            .enumerate()
            .flat_map(|(idx, g)| g.stop_ids.iter().map(move |id| (id.clone(), idx)))
            .collect();
        StopGrouping { groups, membership }
    }

    /// groups ordered by representative id
    pub fn groups(&self) -> &[CanonicalStopGroup] {
        &self.groups
    }

    pub fn group_of(&self, stop_id: &str) -> Option<&CanonicalStopGroup> {
        self.membership.get(stop_id).map(|idx| &self.groups[*idx])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
