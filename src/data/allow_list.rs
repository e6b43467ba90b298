use super::model::GroupId;

/// Inventory groups whose members are ships (frigates through titans,
/// including special editions and capsules).  Kept sorted for binary search.
const SHIP_GROUPS: [GroupId; 47] = [
    25, 26, 27, 28, 29, 30, 31, 237, 324, 358, 380, 381, 419, 420, 463, 485, //
    513, 540, 541, 543, 547, 659, 830, 831, 832, 833, 834, 883, 893, 894, 898, //
    900, 902, 906, 941, 963, 1022, 1201, 1202, 1283, 1305, 1527, 1534, 1538, //
    1972, 2001, 4594,
];

// ---------------------------------------------------------------------------
// AllowList
// ---------------------------------------------------------------------------

/// Fixed set of group ids a record must belong to in order to be kept.
#[derive(Debug, Clone, Copy)]
pub struct AllowList {
    groups: &'static [GroupId],
}

impl AllowList {
    /// The compiled-in ship groups.
    pub const fn ships() -> Self {
        AllowList {
            groups: &SHIP_GROUPS,
        }
    }

    pub fn contains(&self, group_id: GroupId) -> bool {
        self.groups.binary_search(&group_id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.groups.iter().copied()
    }
}
