use crate::client::{ActingUser, ApiClient};
use crate::error::ApiError;
use crate::models::{Comment, NewComment, Recipe, RecipeDraft, RecipeId, RecipeSearch, UserId};

const BASE: &str = "/api/recipes";

/// `/api/recipes` and its comment sub-resource.
#[derive(Clone, Debug)]
pub struct RecipeService {
    client: ApiClient,
}

impl RecipeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Recipe>, ApiError> {
        self.client.send_json(self.client.get(BASE)).await
    }

    pub async fn latest(&self) -> Result<Vec<Recipe>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/latest")))
            .await
    }

    pub async fn get(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}")))
            .await
    }

    pub async fn create(&self, draft: &RecipeDraft, acting: UserId) -> Result<Recipe, ApiError> {
        let recipe: Recipe = self
            .client
            .send_json(self.client.post(BASE).json(draft).acting_as(acting))
            .await?;
        tracing::info!("Created recipe {}", recipe.id);
        Ok(recipe)
    }

    pub async fn update(
        &self,
        id: RecipeId,
        draft: &RecipeDraft,
        acting: UserId,
    ) -> Result<Recipe, ApiError> {
        self.client
            .send_json(
                self.client
                    .put(&format!("{BASE}/{id}"))
                    .json(draft)
                    .acting_as(acting),
            )
            .await
    }

    pub async fn delete(&self, id: RecipeId, acting: UserId) -> Result<(), ApiError> {
        self.client
            .send_empty(self.client.delete(&format!("{BASE}/{id}")).acting_as(acting))
            .await
    }

    pub async fn by_user(&self, user: UserId) -> Result<Vec<Recipe>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/user/{user}")))
            .await
    }

    /// An empty search is the same as [`list`](Self::list).
    pub async fn search(&self, search: &RecipeSearch) -> Result<Vec<Recipe>, ApiError> {
        if search.is_empty() {
            return self.list().await;
        }
        self.client
            .send_json(
                self.client
                    .get(&format!("{BASE}/search"))
                    .query(&search.query_pairs()),
            )
            .await
    }

    pub async fn comments(&self, id: RecipeId) -> Result<Vec<Comment>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}/comments")))
            .await
    }

    pub async fn add_comment(
        &self,
        id: RecipeId,
        content: &str,
        acting: UserId,
    ) -> Result<Comment, ApiError> {
        let body = NewComment {
            content: content.trim().to_string(),
        };
        self.client
            .send_json(
                self.client
                    .post(&format!("{BASE}/{id}/comments"))
                    .json(&body)
                    .acting_as(acting),
            )
            .await
    }
}
