//! Group membership service: creation, invitations, responses, and the
//! per-user overview.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use pantryshare_core::error::AppError;
use pantryshare_core::result::AppResult;
use pantryshare_database::repositories::food_item::FoodItemRepository;
use pantryshare_database::repositories::friend_group::FriendGroupRepository;
use pantryshare_database::repositories::group_member::GroupMemberRepository;
use pantryshare_database::repositories::user::UserRepository;
use pantryshare_entity::food_item::{FoodItem, FoodStatus};
use pantryshare_entity::group::{
    CreateFriendGroup, CreateGroupMember, FriendGroup, GroupMember, MemberRole, MembershipStatus,
};

use super::classify::{GroupSection, classify_for_viewer, member_count, member_user_ids, membership_for};

/// A group as presented in the per-user overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group id.
    pub id: i32,
    /// Group name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Owning user.
    pub owner_id: i32,
    /// Owner display name.
    pub owner_name: String,
    /// Distinct member count, owner included.
    pub member_count: usize,
    /// Whether the viewing user owns the group.
    pub is_owner: bool,
    /// The viewer's membership row (set for invitation entries, so the
    /// response endpoint can be addressed).
    pub member_id: Option<i32>,
}

/// The three-section group overview for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOverview {
    /// Groups the user owns or belongs to.
    pub my_groups: Vec<GroupSummary>,
    /// Groups with an open invitation for the user.
    pub invitations: Vec<GroupSummary>,
    /// Groups the user can discover.
    pub explorable: Vec<GroupSummary>,
}

/// One member in the group detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetail {
    /// The member's user id.
    pub user_id: i32,
    /// Display name.
    pub user_name: String,
    /// Food tag (membership tag, falling back to the user's preference).
    pub food_tag: Option<String>,
    /// Whether this member owns the group.
    pub is_owner: bool,
}

/// Detail view of a group: members plus the shared item pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetails {
    /// The group.
    pub group: FriendGroup,
    /// Accepted members (owner included).
    pub members: Vec<MemberDetail>,
    /// `disponibil` items owned by the members.
    pub shared_items: Vec<FoodItem>,
}

/// Manages friend groups and the invitation lifecycle.
#[derive(Debug, Clone)]
pub struct GroupService {
    /// Friend group repository.
    group_repo: Arc<FriendGroupRepository>,
    /// Group member repository.
    member_repo: Arc<GroupMemberRepository>,
    /// User repository (names for the overview).
    user_repo: Arc<UserRepository>,
    /// Food item repository (shared pool for details).
    item_repo: Arc<FoodItemRepository>,
}

impl GroupService {
    /// Creates a new group service.
    pub fn new(
        group_repo: Arc<FriendGroupRepository>,
        member_repo: Arc<GroupMemberRepository>,
        user_repo: Arc<UserRepository>,
        item_repo: Arc<FoodItemRepository>,
    ) -> Self {
        Self {
            group_repo,
            member_repo,
            user_repo,
            item_repo,
        }
    }

    /// List all groups.
    pub async fn list(&self) -> AppResult<Vec<FriendGroup>> {
        self.group_repo.list().await
    }

    /// Create a group and send invitations to the given users.
    ///
    /// Invitations are independent rows created after the group; a failure
    /// part-way leaves the group with the invitations created so far, as a
    /// plain re-invite can complete the rest.
    pub async fn create_group(
        &self,
        data: CreateFriendGroup,
        invite_user_ids: Vec<i32>,
    ) -> AppResult<FriendGroup> {
        let group = self.group_repo.create(&data).await?;

        for user_id in invite_user_ids {
            self.member_repo
                .create(&CreateGroupMember {
                    group_id: group.id,
                    user_id,
                    food_tag: None,
                    status: Some(MembershipStatus::Invited),
                    role: MemberRole::Invited,
                })
                .await?;
        }

        info!(group_id = group.id, owner_id = group.owner_id, "Group created");
        Ok(group)
    }

    /// Invite a user into an existing group.
    pub async fn invite(
        &self,
        group_id: i32,
        user_id: i32,
        food_tag: Option<String>,
    ) -> AppResult<GroupMember> {
        self.group_repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::not_found("Friend group not found"))?;

        let member = self
            .member_repo
            .create(&CreateGroupMember {
                group_id,
                user_id,
                food_tag,
                status: Some(MembershipStatus::Invited),
                role: MemberRole::Invited,
            })
            .await?;

        info!(group_id, user_id, "Invitation sent");
        Ok(member)
    }

    /// Respond to an invitation: accept promotes the row to an accepted
    /// member; decline marks it declined and the group becomes explorable
    /// again for that user.
    ///
    /// Responding to a row that is not currently invited (already answered,
    /// or a legacy member) reports a conflict.
    pub async fn respond(&self, member_id: i32, accept: bool) -> AppResult<GroupMember> {
        let member = self
            .member_repo
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::not_found("Group member not found"))?;

        let (status, role) = if accept {
            (MembershipStatus::Accepted, MemberRole::Member)
        } else {
            (MembershipStatus::Declined, member.role)
        };

        let updated = self
            .member_repo
            .respond(member_id, status, role)
            .await?
            .ok_or_else(|| AppError::conflict("Invitation already answered"))?;

        info!(
            member_id,
            group_id = updated.group_id,
            user_id = updated.user_id,
            accepted = accept,
            "Invitation answered"
        );
        Ok(updated)
    }

    /// Build the three-section overview for a viewing user.
    pub async fn overview(&self, viewer_id: i32) -> AppResult<GroupOverview> {
        let (groups, members, users) = tokio::try_join!(
            self.group_repo.list(),
            self.member_repo.list(),
            self.user_repo.list()
        )?;

        let names: HashMap<i32, &str> = users.iter().map(|u| (u.id, u.name.as_str())).collect();

        let mut overview = GroupOverview {
            my_groups: Vec::new(),
            invitations: Vec::new(),
            explorable: Vec::new(),
        };

        for group in &groups {
            let membership = membership_for(&members, group.id, viewer_id);
            let summary = GroupSummary {
                id: group.id,
                name: group.name.clone(),
                description: group.description.clone(),
                owner_id: group.owner_id,
                owner_name: names
                    .get(&group.owner_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("User {}", group.owner_id)),
                member_count: member_count(group, &members),
                is_owner: group.owner_id == viewer_id,
                member_id: membership.map(|m| m.id),
            };

            match classify_for_viewer(group, membership, viewer_id) {
                GroupSection::Mine => overview.my_groups.push(summary),
                GroupSection::Invitations => overview.invitations.push(summary),
                GroupSection::Explorable => overview.explorable.push(summary),
            }
        }

        Ok(overview)
    }

    /// Build the detail view of a group: accepted members (owner included)
    /// and the `disponibil` items they share.
    pub async fn details(&self, group_id: i32) -> AppResult<GroupDetails> {
        let group = self
            .group_repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::not_found("Friend group not found"))?;

        let (group_members, users, items) = tokio::try_join!(
            self.member_repo.list_by_group(group_id),
            self.user_repo.list(),
            self.item_repo.list_by_status(FoodStatus::Disponibil)
        )?;

        let member_ids = member_user_ids(&group, &group_members);

        let members = member_ids
            .iter()
            .map(|&user_id| {
                let user = users.iter().find(|u| u.id == user_id);
                let row_tag = group_members
                    .iter()
                    .find(|m| m.user_id == user_id)
                    .and_then(|m| m.food_tag.clone());
                MemberDetail {
                    user_id,
                    user_name: user
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| format!("User {user_id}")),
                    food_tag: row_tag.or_else(|| user.and_then(|u| u.food_preference.clone())),
                    is_owner: user_id == group.owner_id,
                }
            })
            .collect();

        let shared_items = items
            .into_iter()
            .filter(|item| member_ids.contains(&item.user_id))
            .collect();

        Ok(GroupDetails {
            group,
            members,
            shared_items,
        })
    }
}
