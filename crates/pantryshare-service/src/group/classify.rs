//! Membership resolution and group classification.
//!
//! Pure functions over in-memory group/member lists. Invitation state is a
//! server-side column; rows without one are legacy members from before the
//! invitation system and count as accepted.

use std::collections::BTreeSet;

use pantryshare_entity::group::{FriendGroup, GroupMember, MembershipStatus};

/// Which section of the group page a group lands in for a viewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSection {
    /// Groups the user owns or belongs to.
    Mine,
    /// Groups with an open invitation for the user.
    Invitations,
    /// Groups the user can discover (no association, or declined).
    Explorable,
}

/// Effective invitation state of a membership row; legacy rows (no status)
/// resolve to accepted.
pub fn effective_status(member: &GroupMember) -> MembershipStatus {
    member.status.unwrap_or(MembershipStatus::Accepted)
}

/// The viewer's membership row for a group, if any.
///
/// When several rows associate the same user with the same group, the
/// latest one wins.
pub fn membership_for<'a>(
    members: &'a [GroupMember],
    group_id: i32,
    user_id: i32,
) -> Option<&'a GroupMember> {
    members
        .iter()
        .filter(|m| m.group_id == group_id && m.user_id == user_id)
        .next_back()
}

/// Classify a group for a viewing user.
///
/// The owner always sees their group under "my groups". Otherwise the
/// membership resolves in precedence order: declined → explorable, invited
/// → invitations, accepted (including legacy) → my groups, no association →
/// explorable.
pub fn classify_for_viewer(
    group: &FriendGroup,
    membership: Option<&GroupMember>,
    viewer_id: i32,
) -> GroupSection {
    if group.owner_id == viewer_id {
        return GroupSection::Mine;
    }

    match membership {
        None => GroupSection::Explorable,
        Some(member) => match effective_status(member) {
            MembershipStatus::Declined => GroupSection::Explorable,
            MembershipStatus::Invited => GroupSection::Invitations,
            MembershipStatus::Accepted => GroupSection::Mine,
        },
    }
}

/// Distinct user ids counted as members of a group: the owner plus every
/// accepted (or legacy) association.
pub fn member_user_ids(group: &FriendGroup, members: &[GroupMember]) -> BTreeSet<i32> {
    let mut ids: BTreeSet<i32> = members
        .iter()
        .filter(|m| m.group_id == group.id)
        .filter(|m| effective_status(m) == MembershipStatus::Accepted)
        .map(|m| m.user_id)
        .collect();
    ids.insert(group.owner_id);
    ids
}

/// Member count for a group (owner-inclusive).
pub fn member_count(group: &FriendGroup, members: &[GroupMember]) -> usize {
    member_user_ids(group, members).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pantryshare_entity::group::MemberRole;

    fn group(id: i32, owner_id: i32) -> FriendGroup {
        FriendGroup {
            id,
            name: format!("group-{id}"),
            owner_id,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    fn member(id: i32, group_id: i32, user_id: i32, status: Option<MembershipStatus>) -> GroupMember {
        GroupMember {
            id,
            group_id,
            user_id,
            food_tag: None,
            status,
            role: MemberRole::Member,
        }
    }

    #[test]
    fn test_owner_always_mine() {
        let g = group(1, 7);
        // Even a declined row does not move an owner's group.
        let m = member(1, 1, 7, Some(MembershipStatus::Declined));
        assert_eq!(classify_for_viewer(&g, Some(&m), 7), GroupSection::Mine);
        assert_eq!(classify_for_viewer(&g, None, 7), GroupSection::Mine);
    }

    #[test]
    fn test_invited_goes_to_invitations() {
        let g = group(1, 2);
        let m = member(1, 1, 7, Some(MembershipStatus::Invited));
        assert_eq!(
            classify_for_viewer(&g, Some(&m), 7),
            GroupSection::Invitations
        );
    }

    #[test]
    fn test_accepted_and_legacy_go_to_mine() {
        let g = group(1, 2);
        let accepted = member(1, 1, 7, Some(MembershipStatus::Accepted));
        let legacy = member(2, 1, 7, None);
        assert_eq!(classify_for_viewer(&g, Some(&accepted), 7), GroupSection::Mine);
        assert_eq!(classify_for_viewer(&g, Some(&legacy), 7), GroupSection::Mine);
    }

    #[test]
    fn test_declined_and_unassociated_are_explorable() {
        let g = group(1, 2);
        let declined = member(1, 1, 7, Some(MembershipStatus::Declined));
        assert_eq!(
            classify_for_viewer(&g, Some(&declined), 7),
            GroupSection::Explorable
        );
        assert_eq!(classify_for_viewer(&g, None, 7), GroupSection::Explorable);
    }

    #[test]
    fn test_latest_membership_row_wins() {
        let members = vec![
            member(1, 1, 7, Some(MembershipStatus::Invited)),
            member(2, 1, 7, Some(MembershipStatus::Declined)),
        ];
        let found = membership_for(&members, 1, 7).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_member_count_is_owner_inclusive_and_distinct() {
        let g = group(1, 2);
        let members = vec![
            member(1, 1, 7, Some(MembershipStatus::Accepted)),
            member(2, 1, 8, None),                                // legacy counts
            member(3, 1, 9, Some(MembershipStatus::Invited)),     // pending does not
            member(4, 1, 10, Some(MembershipStatus::Declined)),   // declined does not
            member(5, 1, 2, Some(MembershipStatus::Accepted)),    // owner row not double-counted
            member(6, 2, 11, Some(MembershipStatus::Accepted)),   // other group ignored
        ];
        assert_eq!(member_count(&g, &members), 3); // owner 2, users 7 and 8
    }
}
