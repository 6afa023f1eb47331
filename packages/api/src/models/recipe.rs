//! Recipes and their comments.
//!
//! Unlike messages, recipe and comment timestamps travel as epoch milliseconds.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::{RecipeId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: i32,
    #[serde(default)]
    pub cook_time_minutes: i32,
    #[serde(default)]
    pub servings: i32,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl Recipe {
    /// Edit and delete controls are shown only to the author.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn total_minutes(&self) -> i32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    pub fn author_name(&self) -> &str {
        self.user_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Anonymous")
    }

    pub fn display_date(&self) -> String {
        format_millis(self.created_at)
    }

    /// Pre-filled form state for the edit page.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            instructions: self.instructions.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
            ingredients: self.ingredients.clone(),
            cuisine: self.cuisine.clone().unwrap_or_default(),
            dietary_preferences: self.dietary_preferences.clone(),
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
        }
    }
}

/// Create/update body for a recipe. The server fills in owner and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub instructions: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub dietary_preferences: Vec<String>,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub servings: i32,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            instructions: String::new(),
            image_url: String::new(),
            ingredients: Vec::new(),
            cuisine: String::new(),
            dietary_preferences: Vec::new(),
            prep_time_minutes: 0,
            cook_time_minutes: 0,
            servings: 1,
        }
    }
}

/// Filters for `GET /api/recipes/search`. Blank fields are left off the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSearch {
    pub query: Option<String>,
    pub ingredient: Option<String>,
    pub cuisine: Option<String>,
    pub dietary_preference: Option<String>,
}

impl RecipeSearch {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("query", &self.query),
            ("ingredient", &self.ingredient),
            ("cuisine", &self.cuisine),
            ("dietaryPreference", &self.dietary_preference),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v.to_string()))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// A comment on a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    pub recipe_id: RecipeId,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.user_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Anonymous")
    }

    pub fn display_date(&self) -> String {
        format_millis(self.created_at)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
}

fn format_millis(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        serde_json::from_str(
            r#"{"id":7,"title":"Carbonara","instructions":"Whisk, toss, serve",
                "imageUrl":null,"ingredients":["eggs","guanciale"],"cuisine":"Italian",
                "dietaryPreferences":[],"prepTimeMinutes":10,"cookTimeMinutes":15,
                "servings":2,"userId":3,"userName":"Ada","createdAt":1709288130000}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_epoch_millis() {
        let r = recipe();
        assert_eq!(r.display_date(), "Mar 1, 2024");
        assert_eq!(r.total_minutes(), 25);
    }

    #[test]
    fn test_total_minutes_saturates() {
        let mut r = recipe();
        r.prep_time_minutes = i32::MAX;
        r.cook_time_minutes = 30;
        assert_eq!(r.total_minutes(), i32::MAX);
    }

    #[test]
    fn test_ownership() {
        let r = recipe();
        assert!(r.is_owned_by(3));
        assert!(!r.is_owned_by(4));
    }

    #[test]
    fn test_draft_round_trips_fields() {
        let draft = recipe().to_draft();
        assert_eq!(draft.cuisine, "Italian");
        assert_eq!(draft.ingredients, vec!["eggs", "guanciale"]);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["prepTimeMinutes"], 10);
        assert!(body.get("userId").is_none());
    }

    #[test]
    fn test_search_skips_blank_fields() {
        let search = RecipeSearch {
            query: Some("pasta".into()),
            ingredient: Some("  ".into()),
            cuisine: None,
            dietary_preference: Some("Vegan".into()),
        };
        assert_eq!(
            search.query_pairs(),
            vec![("query", "pasta".to_string()), ("dietaryPreference", "Vegan".to_string())]
        );
        assert!(RecipeSearch::default().is_empty());
    }
}
