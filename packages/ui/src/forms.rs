//! # Client-side form validation
//!
//! Required-field and minimum-length checks only. Each validator turns raw form
//! input into the request body the service expects, or a [`FormErrors`] keyed by
//! field name. A form that fails validation never reaches the network.

use std::collections::BTreeMap;

use api::{DiscussionDraft, GroupDraft, RecipeDraft};

/// Cuisine choices shared by the recipe and group forms.
pub const CUISINE_TYPES: &[&str] = &[
    "Italian",
    "Mexican",
    "Chinese",
    "Indian",
    "French",
    "Japanese",
    "Thai",
    "Mediterranean",
    "American",
    "Korean",
    "Middle Eastern",
    "Vietnamese",
    "Greek",
    "Spanish",
    "Other",
];

/// Validation messages by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First message, for forms that show a single alert.
    pub fn first(&self) -> Option<&str> {
        self.fields.values().next().map(String::as_str)
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.fields.values().map(String::as_str).collect();
        write!(f, "{}", messages.join(" "))
    }
}

fn require(errors: &mut FormErrors, field: &'static str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required."));
    }
}

fn min_len(errors: &mut FormErrors, field: &'static str, label: &str, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        errors.add(field, format!("{label} must be at least {min} characters."));
    }
}

fn non_empty_rows(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw recipe form state. Numbers stay as typed text until validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeInput {
    pub title: String,
    pub instructions: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub dietary_preferences: Vec<String>,
    pub prep_time_minutes: String,
    pub cook_time_minutes: String,
    pub servings: String,
}

impl Default for RecipeInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            instructions: String::new(),
            image_url: String::new(),
            ingredients: vec![String::new()],
            cuisine: String::new(),
            dietary_preferences: vec![String::new()],
            prep_time_minutes: String::new(),
            cook_time_minutes: String::new(),
            servings: "1".to_string(),
        }
    }
}

impl From<RecipeDraft> for RecipeInput {
    fn from(draft: RecipeDraft) -> Self {
        let rows = |v: Vec<String>| if v.is_empty() { vec![String::new()] } else { v };
        Self {
            title: draft.title,
            instructions: draft.instructions,
            image_url: draft.image_url,
            ingredients: rows(draft.ingredients),
            cuisine: draft.cuisine,
            dietary_preferences: rows(draft.dietary_preferences),
            prep_time_minutes: draft.prep_time_minutes.to_string(),
            cook_time_minutes: draft.cook_time_minutes.to_string(),
            servings: draft.servings.to_string(),
        }
    }
}

/// Title and instructions are required. Blank ingredient and dietary rows are
/// dropped. Unparseable minutes become 0 and unparseable servings 1.
pub fn validate_recipe(input: &RecipeInput) -> Result<RecipeDraft, FormErrors> {
    let mut errors = FormErrors::new();
    require(&mut errors, "title", "Title", &input.title);
    require(&mut errors, "instructions", "Instructions", &input.instructions);

    let minutes = |s: &str| s.trim().parse::<i32>().map(|m| m.max(0)).unwrap_or(0);
    let servings = input
        .servings
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|s| *s > 0)
        .unwrap_or(1);

    errors.into_result(RecipeDraft {
        title: input.title.trim().to_string(),
        instructions: input.instructions.trim().to_string(),
        image_url: input.image_url.trim().to_string(),
        ingredients: non_empty_rows(&input.ingredients),
        cuisine: input.cuisine.trim().to_string(),
        dietary_preferences: non_empty_rows(&input.dietary_preferences),
        prep_time_minutes: minutes(&input.prep_time_minutes),
        cook_time_minutes: minutes(&input.cook_time_minutes),
        servings,
    })
}

pub fn validate_group(input: &GroupDraft) -> Result<GroupDraft, FormErrors> {
    let mut errors = FormErrors::new();
    require(&mut errors, "name", "Group name", &input.name);
    min_len(&mut errors, "name", "Group name", &input.name, 3);
    require(&mut errors, "description", "Description", &input.description);
    min_len(&mut errors, "description", "Description", &input.description, 10);
    require(&mut errors, "cuisine_type", "Cuisine type", &input.cuisine_type);

    errors.into_result(GroupDraft {
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        cuisine_type: input.cuisine_type.trim().to_string(),
        image_url: input.image_url.trim().to_string(),
    })
}

pub fn validate_discussion(input: &DiscussionDraft) -> Result<DiscussionDraft, FormErrors> {
    let mut errors = FormErrors::new();
    require(&mut errors, "title", "Title", &input.title);
    min_len(&mut errors, "title", "Title", &input.title, 5);
    require(&mut errors, "content", "Content", &input.content);
    min_len(&mut errors, "content", "Content", &input.content, 10);

    errors.into_result(DiscussionDraft {
        title: input.title.trim().to_string(),
        content: input.content.trim().to_string(),
    })
}

/// Title and description of a post; media is optional.
pub fn validate_post(title: &str, description: &str) -> Result<(String, String), FormErrors> {
    let mut errors = FormErrors::new();
    require(&mut errors, "title", "Title", title);
    require(&mut errors, "description", "Description", description);
    errors.into_result((title.trim().to_string(), description.trim().to_string()))
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    require(&mut errors, "email", "Email", email);
    require(&mut errors, "password", "Password", password);
    errors.into_result(())
}

pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    require(&mut errors, "name", "Name", name);
    require(&mut errors, "email", "Email", email);
    if !email.trim().is_empty() && !email.contains('@') {
        errors.add("email", "Enter a valid email address.");
    }
    require(&mut errors, "password", "Password", password);
    errors.into_result(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_input() -> RecipeInput {
        RecipeInput {
            title: "  Carbonara ".into(),
            instructions: "Whisk, toss, serve".into(),
            ingredients: vec!["eggs".into(), "  ".into(), "guanciale".into()],
            dietary_preferences: vec!["".into()],
            prep_time_minutes: "10".into(),
            cook_time_minutes: "abc".into(),
            servings: "0".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_recipe_normalises_fields() {
        let draft = validate_recipe(&recipe_input()).unwrap();
        assert_eq!(draft.title, "Carbonara");
        assert_eq!(draft.ingredients, vec!["eggs", "guanciale"]);
        assert!(draft.dietary_preferences.is_empty());
        assert_eq!(draft.prep_time_minutes, 10);
        assert_eq!(draft.cook_time_minutes, 0);
        assert_eq!(draft.servings, 1);
    }

    #[test]
    fn test_recipe_requires_title_and_instructions() {
        let input = RecipeInput {
            title: "   ".into(),
            instructions: "".into(),
            ..Default::default()
        };
        let errors = validate_recipe(&input).unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required."));
        assert_eq!(errors.get("instructions"), Some("Instructions is required."));
    }

    #[test]
    fn test_recipe_input_from_draft_keeps_an_editable_row() {
        let input = RecipeInput::from(RecipeDraft::default());
        assert_eq!(input.ingredients, vec![String::new()]);
        assert_eq!(input.servings, "1");
    }

    #[test]
    fn test_group_lengths() {
        let short = GroupDraft {
            name: "ab".into(),
            description: "too short".into(),
            cuisine_type: "".into(),
            image_url: "".into(),
        };
        let errors = validate_group(&short).unwrap_err();
        assert_eq!(errors.get("name"), Some("Group name must be at least 3 characters."));
        assert_eq!(
            errors.get("description"),
            Some("Description must be at least 10 characters.")
        );
        assert_eq!(errors.get("cuisine_type"), Some("Cuisine type is required."));

        let ok = GroupDraft {
            name: " Pasta ".into(),
            description: "Fresh noodles every week".into(),
            cuisine_type: "Italian".into(),
            image_url: "".into(),
        };
        assert_eq!(validate_group(&ok).unwrap().name, "Pasta");
    }

    #[test]
    fn test_empty_group_name_reports_required_first() {
        let errors = validate_group(&GroupDraft::default()).unwrap_err();
        assert_eq!(errors.get("name"), Some("Group name is required."));
    }

    #[test]
    fn test_discussion_lengths() {
        let draft = DiscussionDraft {
            title: "Hi".into(),
            content: "Short".into(),
        };
        let errors = validate_discussion(&draft).unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("content").is_some());

        let draft = DiscussionDraft {
            title: "Best flour?".into(),
            content: "Tipo 00 or bread flour for pizza?".into(),
        };
        assert!(validate_discussion(&draft).is_ok());
    }

    #[test]
    fn test_post_and_auth_forms() {
        assert!(validate_post("Brunch", "").is_err());
        assert_eq!(
            validate_post(" Brunch ", "eggs").unwrap(),
            ("Brunch".to_string(), "eggs".to_string())
        );
        assert!(validate_login("ada@example.com", "").is_err());
        assert!(validate_signup("Ada", "not-an-email", "pw").is_err());
        assert!(validate_signup("Ada", "ada@example.com", "pw").is_ok());
    }

    #[test]
    fn test_errors_display_and_first() {
        let errors = validate_post("", "").unwrap_err();
        assert_eq!(errors.first(), Some("Description is required."));
        assert_eq!(errors.to_string(), "Description is required. Title is required.");
    }
}
