//! Request DTOs with validation, in the wire naming convention.
//!
//! Validation failures surface as one generic message, not per-field
//! diagnostics.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use pantryshare_entity::alert::{AlertStatus, CreateExpirationAlert};
use pantryshare_entity::availability::CreateAvailability;
use pantryshare_entity::category::CreateCategory;
use pantryshare_entity::claim::{ClaimStatus, CreateClaim};
use pantryshare_entity::food_item::{CreateFoodItem, FoodStatus, UpdateFoodItem};
use pantryshare_entity::group::{CreateFriendGroup, CreateGroupMember, MemberRole, MembershipStatus};
use pantryshare_entity::social_post::CreateSocialPost;
use pantryshare_entity::user::{CreateUser, UpdateUser};

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[serde(rename = "UserName")]
    #[validate(length(min = 1))]
    pub name: String,
    /// Email address.
    #[serde(rename = "UserEmail")]
    #[validate(email)]
    pub email: String,
    /// Password (stored as-is).
    #[serde(rename = "UserPassword")]
    #[validate(length(min = 1))]
    pub password: String,
    /// Food preference tag.
    #[serde(rename = "FoodPreference")]
    pub food_preference: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            password: r.password,
            food_preference: r.food_preference,
        }
    }
}

/// Update user request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(rename = "UserName")]
    pub name: Option<String>,
    /// New email address.
    #[serde(rename = "UserEmail")]
    pub email: Option<String>,
    /// New food preference tag.
    #[serde(rename = "FoodPreference")]
    pub food_preference: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            food_preference: r.food_preference.map(Some),
        }
    }
}

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[serde(rename = "CategoryName")]
    #[validate(length(min = 1))]
    pub name: String,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(r: CreateCategoryRequest) -> Self {
        Self { name: r.name }
    }
}

/// Create food item request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFoodItemRequest {
    /// Item name.
    #[serde(rename = "FoodName")]
    #[validate(length(min = 1))]
    pub name: String,
    /// Quantity (positive integer).
    #[serde(rename = "Quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,
    /// Expiration date.
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: NaiveDate,
    /// Initial status (defaults to `normal`).
    #[serde(rename = "Status", default)]
    pub status: FoodStatus,
    /// Owning user id.
    #[serde(rename = "UserId")]
    pub user_id: i32,
    /// Category id.
    #[serde(rename = "CategoryId")]
    pub category_id: i32,
}

impl From<CreateFoodItemRequest> for CreateFoodItem {
    fn from(r: CreateFoodItemRequest) -> Self {
        Self {
            name: r.name,
            quantity: r.quantity,
            expiration_date: r.expiration_date,
            status: r.status,
            user_id: r.user_id,
            category_id: r.category_id,
        }
    }
}

/// Update food item request body (partial).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFoodItemRequest {
    /// New name.
    #[serde(rename = "FoodName")]
    pub name: Option<String>,
    /// New quantity.
    #[serde(rename = "Quantity")]
    pub quantity: Option<i32>,
    /// New expiration date.
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: Option<NaiveDate>,
    /// New status.
    #[serde(rename = "Status")]
    pub status: Option<FoodStatus>,
    /// New category id.
    #[serde(rename = "CategoryId")]
    pub category_id: Option<i32>,
}

impl From<UpdateFoodItemRequest> for UpdateFoodItem {
    fn from(r: UpdateFoodItemRequest) -> Self {
        Self {
            name: r.name,
            quantity: r.quantity,
            expiration_date: r.expiration_date,
            status: r.status,
            category_id: r.category_id,
        }
    }
}

/// Mark-available request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAvailableRequest {
    /// The sharing user.
    #[serde(rename = "OwnerId")]
    pub owner_id: i32,
}

/// Create availability request body (the manual CRUD endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    /// The item being shared.
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    /// The sharing user.
    #[serde(rename = "OwnerId")]
    pub owner_id: i32,
    /// When sharing starts (defaults to now).
    #[serde(rename = "AvailableFrom")]
    pub available_from: Option<DateTime<Utc>>,
}

impl From<CreateAvailabilityRequest> for CreateAvailability {
    fn from(r: CreateAvailabilityRequest) -> Self {
        Self {
            food_item_id: r.food_item_id,
            owner_id: r.owner_id,
            available_from: r.available_from,
        }
    }
}

/// Create persisted alert request body (the manual endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpirationAlertRequest {
    /// The item the alert refers to.
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    /// The date the alert is about (defaults to today).
    #[serde(rename = "AlertDate")]
    pub alert_date: Option<NaiveDate>,
    /// Initial read state.
    #[serde(rename = "AlertStatus", default)]
    pub status: AlertStatus,
}

impl CreateExpirationAlertRequest {
    /// Resolve defaults against the given "today".
    pub fn into_create(self, today: NaiveDate) -> CreateExpirationAlert {
        CreateExpirationAlert {
            food_item_id: self.food_item_id,
            alert_date: self.alert_date.unwrap_or(today),
            status: self.status,
        }
    }
}

/// Create claim request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClaimRequest {
    /// The claiming user.
    #[serde(rename = "UserId")]
    pub user_id: i32,
    /// The claimed item.
    #[serde(rename = "FoodItemId")]
    pub food_item_id: i32,
    /// Pickup location, if already agreed.
    #[serde(rename = "PickupLocation")]
    pub pickup_location: Option<String>,
}

impl From<CreateClaimRequest> for CreateClaim {
    fn from(r: CreateClaimRequest) -> Self {
        Self {
            user_id: r.user_id,
            food_item_id: r.food_item_id,
            pickup_location: r.pickup_location,
        }
    }
}

/// Update claim request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClaimRequest {
    /// New status.
    #[serde(rename = "ClaimStatus")]
    pub status: Option<ClaimStatus>,
    /// New pickup location.
    #[serde(rename = "PickupLocation")]
    pub pickup_location: Option<String>,
}

/// Create friend group request body, with optional initial invitations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFriendGroupRequest {
    /// Group name.
    #[serde(rename = "GroupName")]
    #[validate(length(min = 1))]
    pub name: String,
    /// Owning user id.
    #[serde(rename = "OwnerId")]
    pub owner_id: i32,
    /// Free-form description.
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Users to invite on creation.
    #[serde(rename = "Invites", default)]
    pub invites: Vec<i32>,
}

impl From<CreateFriendGroupRequest> for CreateFriendGroup {
    fn from(r: CreateFriendGroupRequest) -> Self {
        Self {
            name: r.name,
            owner_id: r.owner_id,
            description: r.description,
        }
    }
}

/// Create group member request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupMemberRequest {
    /// The group.
    #[serde(rename = "GroupId")]
    pub group_id: i32,
    /// The user to associate.
    #[serde(rename = "UserId")]
    pub user_id: i32,
    /// Food tag.
    #[serde(rename = "FoodTag")]
    pub food_tag: Option<String>,
    /// Invitation state.
    #[serde(rename = "Status")]
    pub status: Option<MembershipStatus>,
    /// Role within the group.
    #[serde(rename = "Role", default)]
    pub role: MemberRole,
}

impl From<CreateGroupMemberRequest> for CreateGroupMember {
    fn from(r: CreateGroupMemberRequest) -> Self {
        Self {
            group_id: r.group_id,
            user_id: r.user_id,
            food_tag: r.food_tag,
            status: r.status,
            role: r.role,
        }
    }
}

/// Update group member request body.
///
/// A `Status` of `accepted` or `declined` runs the invitation-response
/// workflow; without one, only the food tag is updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroupMemberRequest {
    /// Invitation response.
    #[serde(rename = "Status")]
    pub status: Option<MembershipStatus>,
    /// New food tag.
    #[serde(rename = "FoodTag")]
    pub food_tag: Option<String>,
}

/// Create social post request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSocialPostRequest {
    /// Target platform label.
    #[serde(rename = "Platform")]
    #[validate(length(min = 1))]
    pub platform: String,
    /// Post body.
    #[serde(rename = "Message")]
    #[validate(length(min = 1))]
    pub message: String,
    /// Post status (defaults to "posted").
    #[serde(rename = "PostStatus")]
    pub status: Option<String>,
    /// Related food item, if any.
    #[serde(rename = "FoodItemId")]
    pub food_item_id: Option<i32>,
}

impl From<CreateSocialPostRequest> for CreateSocialPost {
    fn from(r: CreateSocialPostRequest) -> Self {
        Self {
            platform: r.platform,
            message: r.message,
            status: r.status,
            food_item_id: r.food_item_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_food_item_accepts_wire_names() {
        let json = r#"{
            "FoodName": "milk",
            "Quantity": 2,
            "ExpirationDate": "2026-03-12",
            "UserId": 7,
            "CategoryId": 1
        }"#;
        let req: CreateFoodItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "milk");
        assert_eq!(req.status, FoodStatus::Normal);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_food_item_rejects_zero_quantity() {
        let json = r#"{
            "FoodName": "milk",
            "Quantity": 0,
            "ExpirationDate": "2026-03-12",
            "UserId": 7,
            "CategoryId": 1
        }"#;
        let req: CreateFoodItemRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_alert_request_defaults_date_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let req = CreateExpirationAlertRequest {
            food_item_id: 5,
            alert_date: None,
            status: AlertStatus::Active,
        };
        assert_eq!(req.into_create(today).alert_date, today);
    }
}
