//! Duty groups and their typed identifiers.

use serde::{Deserialize, Serialize};

use escala_calendar::WeekendDay;

/// Stable identifier of a duty group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(u32);

impl GroupId {
    /// Creates a group identifier from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a person belonging to a group.
///
/// Membership is an ordered sequence of these; how they are serialised is
/// the persistence layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    /// Creates a member identifier from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A duty group as supplied by the caller.
///
/// The caller hands groups over in rotation order; the assigner treats that
/// order as authoritative and never reorders it (cleanup eligibility
/// filters the list, it does not reorder it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    preferred_day: Option<WeekendDay>,
    members: Vec<MemberId>,
}

impl Group {
    /// Creates a group with no preferred day and no members.
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            preferred_day: None,
            members: Vec::new(),
        }
    }

    /// Sets the day of the weekend this group prefers for its duties.
    pub fn with_preferred_day(mut self, day: WeekendDay) -> Self {
        self.preferred_day = Some(day);
        self
    }

    /// Sets the ordered member list.
    pub fn with_members(mut self, members: Vec<MemberId>) -> Self {
        self.members = members;
        self
    }

    /// Returns the group identifier.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the preferred weekend day, if one is set.
    pub fn preferred_day(&self) -> Option<WeekendDay> {
        self.preferred_day
    }

    /// Returns the ordered member list.
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_newtypes() {
        assert_eq!(GroupId::new(7).get(), 7);
        assert_eq!(MemberId::new(12).get(), 12);
        assert_eq!(GroupId::new(7).to_string(), "7");
    }

    #[test]
    fn builder_defaults() {
        let group = Group::new(GroupId::new(1), "north");
        assert_eq!(group.id(), GroupId::new(1));
        assert_eq!(group.name(), "north");
        assert_eq!(group.preferred_day(), None);
        assert!(group.members().is_empty());
    }

    #[test]
    fn builder_chaining() {
        let group = Group::new(GroupId::new(2), "south")
            .with_preferred_day(WeekendDay::Sunday)
            .with_members(vec![MemberId::new(10), MemberId::new(11)]);
        assert_eq!(group.preferred_day(), Some(WeekendDay::Sunday));
        assert_eq!(group.members(), &[MemberId::new(10), MemberId::new(11)]);
    }

    #[test]
    fn id_serde_transparent() {
        let json = serde_json::to_string(&GroupId::new(42)).unwrap();
        assert_eq!(json, "42");
        let id: GroupId = serde_json::from_str("42").unwrap();
        assert_eq!(id, GroupId::new(42));
    }
}
