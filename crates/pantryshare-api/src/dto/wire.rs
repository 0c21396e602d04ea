//! Response DTOs in the wire naming convention.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pantryshare_entity::alert::{AlertStatus, ExpirationAlert};
use pantryshare_entity::availability::Availability;
use pantryshare_entity::category::Category;
use pantryshare_entity::claim::{Claim, ClaimStatus};
use pantryshare_entity::food_item::{FoodItem, FoodStatus};
use pantryshare_entity::group::{FriendGroup, GroupMember, MemberRole, MembershipStatus};
use pantryshare_entity::social_post::SocialPost;
use pantryshare_entity::user::User;
use pantryshare_service::alert::{DisplayAlert, SyncReport};
use pantryshare_service::group::{GroupDetails, GroupOverview, GroupSummary, MemberDetail};

/// User on the wire. The stored password never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWire {
    #[serde(rename = "UserId")]
    pub id: i32,
    #[serde(rename = "UserName")]
    pub name: String,
    #[serde(rename = "UserEmail")]
    pub email: String,
    #[serde(rename = "FoodPreference")]
    pub food_preference: Option<String>,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserWire {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            food_preference: u.food_preference,
            created_at: u.created_at,
        }
    }
}

/// Category on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWire {
    #[serde(rename = "CategoryId")]
    pub id: i32,
    #[serde(rename = "CategoryName")]
    pub name: String,
}

impl From<Category> for CategoryWire {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Food item on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemWire {
    #[serde(rename = "FoodItemId")]
    pub id: i32,
    #[serde(rename = "FoodName")]
    pub name: String,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "Status")]
    pub status: FoodStatus,
    #[serde(rename = "UserId")]
    pub user_id: i32,
    #[serde(rename = "CategoryId")]
    pub category_id: i32,
}

impl From<FoodItem> for FoodItemWire {
    fn from(i: FoodItem) -> Self {
        Self {
            id: i.id,
            name: i.name,
            quantity: i.quantity,
            expiration_date: i.expiration_date,
            status: i.status,
            user_id: i.user_id,
            category_id: i.category_id,
        }
    }
}

/// Availability ledger entry on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWire {
    #[serde(rename = "AvailabilityId")]
    pub id: i32,
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    #[serde(rename = "OwnerId")]
    pub owner_id: i32,
    #[serde(rename = "AvailableFrom")]
    pub available_from: DateTime<Utc>,
}

impl From<Availability> for AvailabilityWire {
    fn from(a: Availability) -> Self {
        Self {
            id: a.id,
            food_item_id: a.food_item_id,
            owner_id: a.owner_id,
            available_from: a.available_from,
        }
    }
}

/// Persisted expiration alert on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpirationAlertWire {
    #[serde(rename = "AlertId")]
    pub id: i32,
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    #[serde(rename = "AlertDate")]
    pub alert_date: NaiveDate,
    #[serde(rename = "AlertStatus")]
    pub status: AlertStatus,
}

impl From<ExpirationAlert> for ExpirationAlertWire {
    fn from(a: ExpirationAlert) -> Self {
        Self {
            id: a.id,
            food_item_id: a.food_item_id,
            alert_date: a.alert_date,
            status: a.status,
        }
    }
}

/// Claim on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimWire {
    #[serde(rename = "ClaimId")]
    pub id: i32,
    #[serde(rename = "UserId")]
    pub user_id: i32,
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    #[serde(rename = "ClaimStatus")]
    pub status: ClaimStatus,
    #[serde(rename = "ClaimDate")]
    pub claim_date: DateTime<Utc>,
    #[serde(rename = "PickupLocation")]
    pub pickup_location: Option<String>,
}

impl From<Claim> for ClaimWire {
    fn from(c: Claim) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            food_item_id: c.food_item_id,
            status: c.status,
            claim_date: c.claim_date,
            pickup_location: c.pickup_location,
        }
    }
}

/// Friend group on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendGroupWire {
    #[serde(rename = "GroupId")]
    pub id: i32,
    #[serde(rename = "GroupName")]
    pub name: String,
    #[serde(rename = "OwnerId")]
    pub owner_id: i32,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

impl From<FriendGroup> for FriendGroupWire {
    fn from(g: FriendGroup) -> Self {
        Self {
            id: g.id,
            name: g.name,
            owner_id: g.owner_id,
            description: g.description,
            created_at: g.created_at,
        }
    }
}

/// Group membership row on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMemberWire {
    #[serde(rename = "GroupMemberId")]
    pub id: i32,
    #[serde(rename = "GroupId")]
    pub group_id: i32,
    #[serde(rename = "UserId")]
    pub user_id: i32,
    #[serde(rename = "FoodTag")]
    pub food_tag: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<MembershipStatus>,
    #[serde(rename = "Role")]
    pub role: MemberRole,
}

impl From<GroupMember> for GroupMemberWire {
    fn from(m: GroupMember) -> Self {
        Self {
            id: m.id,
            group_id: m.group_id,
            user_id: m.user_id,
            food_tag: m.food_tag,
            status: m.status,
            role: m.role,
        }
    }
}

/// Social post on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPostWire {
    #[serde(rename = "SocialPostId")]
    pub id: i32,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "PostDate")]
    pub post_date: DateTime<Utc>,
    #[serde(rename = "PostStatus")]
    pub status: String,
    #[serde(rename = "FoodItemId")]
    pub food_item_id: Option<i32>,
}

impl From<SocialPost> for SocialPostWire {
    fn from(p: SocialPost) -> Self {
        Self {
            id: p.id,
            platform: p.platform,
            message: p.message,
            post_date: p.post_date,
            status: p.status,
            food_item_id: p.food_item_id,
        }
    }
}

/// Ephemeral display alert on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayAlertWire {
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    #[serde(rename = "ItemName")]
    pub item_name: String,
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "DaysUntilExpiration")]
    pub days_until_expiration: i64,
    #[serde(rename = "Message")]
    pub message: String,
}

impl From<DisplayAlert> for DisplayAlertWire {
    fn from(a: DisplayAlert) -> Self {
        Self {
            food_item_id: a.food_item_id,
            item_name: a.item_name,
            expiration_date: a.expiration_date,
            days_until_expiration: a.days_until_expiration,
            message: a.message,
        }
    }
}

/// Sync run outcome on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReportWire {
    #[serde(rename = "Created")]
    pub created: u32,
    #[serde(rename = "Skipped")]
    pub skipped: u32,
}

impl From<SyncReport> for SyncReportWire {
    fn from(r: SyncReport) -> Self {
        Self {
            created: r.created,
            skipped: r.skipped,
        }
    }
}

/// Overview group entry on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummaryWire {
    #[serde(rename = "GroupId")]
    pub id: i32,
    #[serde(rename = "GroupName")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "OwnerId")]
    pub owner_id: i32,
    #[serde(rename = "OwnerName")]
    pub owner_name: String,
    #[serde(rename = "MemberCount")]
    pub member_count: usize,
    #[serde(rename = "IsOwner")]
    pub is_owner: bool,
    #[serde(rename = "GroupMemberId")]
    pub member_id: Option<i32>,
}

impl From<GroupSummary> for GroupSummaryWire {
    fn from(s: GroupSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            owner_id: s.owner_id,
            owner_name: s.owner_name,
            member_count: s.member_count,
            is_owner: s.is_owner,
            member_id: s.member_id,
        }
    }
}

/// Three-section group overview on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOverviewWire {
    #[serde(rename = "MyGroups")]
    pub my_groups: Vec<GroupSummaryWire>,
    #[serde(rename = "Invitations")]
    pub invitations: Vec<GroupSummaryWire>,
    #[serde(rename = "Explorable")]
    pub explorable: Vec<GroupSummaryWire>,
}

impl From<GroupOverview> for GroupOverviewWire {
    fn from(o: GroupOverview) -> Self {
        Self {
            my_groups: o.my_groups.into_iter().map(Into::into).collect(),
            invitations: o.invitations.into_iter().map(Into::into).collect(),
            explorable: o.explorable.into_iter().map(Into::into).collect(),
        }
    }
}

/// Member entry in the group detail view on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetailWire {
    #[serde(rename = "UserId")]
    pub user_id: i32,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "FoodTag")]
    pub food_tag: Option<String>,
    #[serde(rename = "IsOwner")]
    pub is_owner: bool,
}

impl From<MemberDetail> for MemberDetailWire {
    fn from(m: MemberDetail) -> Self {
        Self {
            user_id: m.user_id,
            user_name: m.user_name,
            food_tag: m.food_tag,
            is_owner: m.is_owner,
        }
    }
}

/// Group detail view on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailsWire {
    #[serde(rename = "Group")]
    pub group: FriendGroupWire,
    #[serde(rename = "Members")]
    pub members: Vec<MemberDetailWire>,
    #[serde(rename = "SharedItems")]
    pub shared_items: Vec<FoodItemWire>,
}

impl From<GroupDetails> for GroupDetailsWire {
    fn from(d: GroupDetails) -> Self {
        Self {
            group: d.group.into(),
            members: d.members.into_iter().map(Into::into).collect(),
            shared_items: d.shared_items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item_wire_field_names() {
        let wire = FoodItemWire {
            id: 5,
            name: "milk".to_string(),
            quantity: 2,
            expiration_date: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
            status: FoodStatus::Disponibil,
            user_id: 7,
            category_id: 1,
        };
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["FoodItemId"], 5);
        assert_eq!(json["FoodName"], "milk");
        assert_eq!(json["ExpirationDate"], "2026-03-12");
        assert_eq!(json["Status"], "disponibil");
        assert!(json.get("id").is_none());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_user_wire_has_no_password() {
        let user = User {
            id: 1,
            name: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            food_preference: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(UserWire::from(user)).unwrap();
        assert!(json.get("UserPassword").is_none());
        assert_eq!(json["UserName"], "ana");
    }

    #[test]
    fn test_claim_wire_round_trip() {
        let wire = ClaimWire {
            id: 3,
            user_id: 7,
            food_item_id: 5,
            status: ClaimStatus::Pending,
            claim_date: Utc::now(),
            pickup_location: None,
        };
        let json = serde_json::to_string(&wire).unwrap();
        assert!(json.contains("\"ClaimStatus\":\"pending\""));
        let back: ClaimWire = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 3);
        assert_eq!(back.status, ClaimStatus::Pending);
    }
}
