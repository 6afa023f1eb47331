use serde::{Deserialize, Serialize};

use super::{GroupId, UserId};

/// A community group.
///
/// `admin_id` is the single owner. The admin is always a member and implicitly a
/// moderator; that invariant is the server's to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub admin_id: UserId,
    #[serde(default)]
    pub admin_name: Option<String>,
    #[serde(default)]
    pub member_count: Option<i64>,
}

impl Group {
    /// Case-insensitive match of `term` against name, cuisine and description.
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.cuisine_type.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    /// First letter of the name, used when there is no image.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
    }

    pub fn draft(&self) -> GroupDraft {
        GroupDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            cuisine_type: self.cuisine_type.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Create/update request body for a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub cuisine_type: String,
    pub image_url: String,
}

/// Body of `POST /api/groups/{id}/transfer-ownership`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnership {
    pub new_admin_id: UserId,
}

/// The acting user's standing in one group, as reported by the three
/// role-check endpoints.
///
/// These flags only decide which controls are shown; the server re-checks every
/// mutating call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleFlags {
    pub is_member: bool,
    pub is_moderator: bool,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Group {
        serde_json::from_str(
            r#"{"id":5,"name":"Pasta Lovers","description":"Fresh noodles every week",
                "cuisineType":"Italian","imageUrl":null,"adminId":2}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_camel_case() {
        let g = group();
        assert_eq!(g.admin_id, 2);
        assert_eq!(g.cuisine_type, "Italian");
        assert!(g.image_url.is_none());
        assert!(g.member_count.is_none());
    }

    #[test]
    fn test_matches_any_field() {
        let g = group();
        assert!(g.matches(""));
        assert!(g.matches("pasta"));
        assert!(g.matches("ITALIAN"));
        assert!(g.matches("noodles"));
        assert!(!g.matches("sushi"));
    }

    #[test]
    fn test_transfer_body_shape() {
        let body = serde_json::to_string(&TransferOwnership { new_admin_id: 9 }).unwrap();
        assert_eq!(body, r#"{"newAdminId":9}"#);
    }

    #[test]
    fn test_initial() {
        assert_eq!(group().initial(), "P");
    }
}
