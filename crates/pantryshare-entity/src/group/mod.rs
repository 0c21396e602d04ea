//! Friend group domain entities.

pub mod member;
pub mod model;

pub use member::{CreateGroupMember, GroupMember, MemberRole, MembershipStatus};
pub use model::{CreateFriendGroup, FriendGroup};
