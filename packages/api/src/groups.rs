//! # Group service
//!
//! One method per `/api/groups` endpoint. Methods that take an `acting: UserId`
//! send it in the `userid` header; the server uses it to decide whether the call
//! is allowed.
//!
//! | Area | Methods |
//! |------|---------|
//! | CRUD | [`list`](GroupService::list), [`get`](GroupService::get), [`create`](GroupService::create), [`update`](GroupService::update), [`delete`](GroupService::delete) |
//! | Membership | [`join`](GroupService::join), [`leave`](GroupService::leave), [`members`](GroupService::members), [`remove_member`](GroupService::remove_member) |
//! | Roles | [`moderators`](GroupService::moderators), [`add_moderator`](GroupService::add_moderator), [`remove_moderator`](GroupService::remove_moderator), [`transfer_ownership`](GroupService::transfer_ownership), [`role_flags`](GroupService::role_flags) |
//! | Lookup | [`search`](GroupService::search), [`by_member`](GroupService::by_member), [`by_admin`](GroupService::by_admin) |
//! | Chat | [`messages`](GroupService::messages), [`post_message`](GroupService::post_message), [`delete_message`](GroupService::delete_message) |
//! | Discussions | [`discussions`](GroupService::discussions), [`create_discussion`](GroupService::create_discussion), [`delete_discussion`](GroupService::delete_discussion) |

use reqwest::RequestBuilder;

use crate::client::{ActingUser, ApiClient};
use crate::error::ApiError;
use crate::models::{
    Discussion, DiscussionDraft, DiscussionId, Group, GroupDraft, GroupId, Message, MessageId,
    NewMessage, RoleFlags, TransferOwnership, User, UserId,
};

const BASE: &str = "/api/groups";

#[derive(Clone, Debug)]
pub struct GroupService {
    client: ApiClient,
}

impl GroupService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Group>, ApiError> {
        self.client.send_json(self.client.get(BASE)).await
    }

    pub async fn get(&self, id: GroupId) -> Result<Group, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}")))
            .await
    }

    /// The acting user becomes admin (and first member) of the new group.
    pub async fn create(&self, draft: &GroupDraft, acting: UserId) -> Result<Group, ApiError> {
        let group: Group = self
            .client
            .send_json(self.client.post(BASE).json(draft).acting_as(acting))
            .await?;
        tracing::info!("Created group {} ({})", group.id, group.name);
        Ok(group)
    }

    pub async fn update(
        &self,
        id: GroupId,
        draft: &GroupDraft,
        acting: UserId,
    ) -> Result<Group, ApiError> {
        self.client
            .send_json(
                self.client
                    .put(&format!("{BASE}/{id}"))
                    .json(draft)
                    .acting_as(acting),
            )
            .await
    }

    pub async fn delete(&self, id: GroupId, acting: UserId) -> Result<(), ApiError> {
        self.client.send_empty(self.delete_request(id, acting)).await?;
        tracing::info!("Deleted group {id}");
        Ok(())
    }

    /// The server reads the acting user from either the `userId` query
    /// parameter or the header, so both carry it.
    fn delete_request(&self, id: GroupId, acting: UserId) -> RequestBuilder {
        self.client
            .delete(&format!("{BASE}/{id}"))
            .query(&[("userId", acting)])
            .acting_as(acting)
    }

    pub async fn join(&self, id: GroupId, acting: UserId) -> Result<(), ApiError> {
        self.client
            .send_empty(self.client.post(&format!("{BASE}/{id}/join")).acting_as(acting))
            .await
    }

    pub async fn leave(&self, id: GroupId, acting: UserId) -> Result<(), ApiError> {
        self.client
            .send_empty(self.client.post(&format!("{BASE}/{id}/leave")).acting_as(acting))
            .await
    }

    pub async fn members(&self, id: GroupId) -> Result<Vec<User>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}/members")))
            .await
    }

    pub async fn remove_member(
        &self,
        id: GroupId,
        user: UserId,
        acting: UserId,
    ) -> Result<(), ApiError> {
        self.client
            .send_empty(
                self.client
                    .delete(&format!("{BASE}/{id}/members/{user}"))
                    .acting_as(acting),
            )
            .await
    }

    pub async fn moderators(&self, id: GroupId) -> Result<Vec<User>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}/moderators")))
            .await
    }

    pub async fn add_moderator(
        &self,
        id: GroupId,
        user: UserId,
        acting: UserId,
    ) -> Result<(), ApiError> {
        self.client
            .send_empty(
                self.client
                    .post(&format!("{BASE}/{id}/moderators/{user}"))
                    .acting_as(acting),
            )
            .await
    }

    pub async fn remove_moderator(
        &self,
        id: GroupId,
        user: UserId,
        acting: UserId,
    ) -> Result<(), ApiError> {
        self.client
            .send_empty(
                self.client
                    .delete(&format!("{BASE}/{id}/moderators/{user}"))
                    .acting_as(acting),
            )
            .await
    }

    /// Hand the group to another existing member. Whatever moderator status the
    /// previous admin ends up with is the server's decision.
    pub async fn transfer_ownership(
        &self,
        id: GroupId,
        new_admin: UserId,
        acting: UserId,
    ) -> Result<(), ApiError> {
        self.client
            .send_empty(
                self.client
                    .post(&format!("{BASE}/{id}/transfer-ownership"))
                    .json(&TransferOwnership { new_admin_id: new_admin })
                    .acting_as(acting),
            )
            .await?;
        tracing::info!("Transferred group {id} to user {new_admin}");
        Ok(())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Group>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/search")).query(&[("query", query)]))
            .await
    }

    /// Groups the user belongs to.
    pub async fn by_member(&self, user: UserId) -> Result<Vec<Group>, ApiError> {
        self.client
            .send_json(
                self.client
                    .get(&format!("{BASE}/member/{user}"))
                    .acting_as(user),
            )
            .await
    }

    /// Groups the user administers.
    pub async fn by_admin(&self, user: UserId) -> Result<Vec<Group>, ApiError> {
        self.client
            .send_json(
                self.client
                    .get(&format!("{BASE}/admin/{user}"))
                    .acting_as(user),
            )
            .await
    }

    pub async fn is_member(&self, id: GroupId, acting: UserId) -> Result<bool, ApiError> {
        self.role_check(id, "is-member", acting).await
    }

    pub async fn is_moderator(&self, id: GroupId, acting: UserId) -> Result<bool, ApiError> {
        self.role_check(id, "is-moderator", acting).await
    }

    pub async fn is_admin(&self, id: GroupId, acting: UserId) -> Result<bool, ApiError> {
        self.role_check(id, "is-admin", acting).await
    }

    async fn role_check(&self, id: GroupId, check: &str, acting: UserId) -> Result<bool, ApiError> {
        self.client
            .send_json(
                self.client
                    .get(&format!("{BASE}/{id}/{check}"))
                    .acting_as(acting),
            )
            .await
    }

    /// Runs the three role checks concurrently and combines them once all have
    /// settled. Fails if any one of them fails.
    pub async fn role_flags(&self, id: GroupId, acting: UserId) -> Result<RoleFlags, ApiError> {
        let (is_member, is_moderator, is_admin) = futures::join!(
            self.is_member(id, acting),
            self.is_moderator(id, acting),
            self.is_admin(id, acting),
        );
        Ok(RoleFlags {
            is_member: is_member?,
            is_moderator: is_moderator?,
            is_admin: is_admin?,
        })
    }

    /// Full message list in server order. Members only.
    pub async fn messages(&self, id: GroupId, acting: UserId) -> Result<Vec<Message>, ApiError> {
        self.client
            .send_json(
                self.client
                    .get(&format!("{BASE}/{id}/messages"))
                    .acting_as(acting),
            )
            .await
    }

    pub async fn post_message(
        &self,
        id: GroupId,
        content: &str,
        acting: UserId,
    ) -> Result<Message, ApiError> {
        let body = NewMessage {
            content: content.to_string(),
        };
        self.client
            .send_json(
                self.client
                    .post(&format!("{BASE}/{id}/messages"))
                    .json(&body)
                    .acting_as(acting),
            )
            .await
    }

    pub async fn delete_message(
        &self,
        id: GroupId,
        message: MessageId,
        acting: UserId,
    ) -> Result<(), ApiError> {
        self.client
            .send_empty(
                self.client
                    .delete(&format!("{BASE}/{id}/messages/{message}"))
                    .acting_as(acting),
            )
            .await
    }

    pub async fn discussions(&self, id: GroupId) -> Result<Vec<Discussion>, ApiError> {
        self.client
            .send_json(self.client.get(&format!("{BASE}/{id}/discussions")))
            .await
    }

    pub async fn create_discussion(
        &self,
        id: GroupId,
        draft: &DiscussionDraft,
        acting: UserId,
    ) -> Result<Discussion, ApiError> {
        self.client
            .send_json(
                self.client
                    .post(&format!("{BASE}/{id}/discussions"))
                    .json(draft)
                    .acting_as(acting),
            )
            .await
    }

    pub async fn delete_discussion(
        &self,
        id: GroupId,
        discussion: DiscussionId,
        acting: UserId,
    ) -> Result<(), ApiError> {
        self.client
            .send_empty(
                self.client
                    .delete(&format!("{BASE}/{id}/discussions/{discussion}"))
                    .acting_as(acting),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ACTING_USER_HEADER;

    fn service() -> GroupService {
        GroupService::new(ApiClient::with_base_url("http://localhost:8080"))
    }

    #[test]
    fn test_delete_sends_user_in_query_and_header() {
        let request = service().delete_request(5, 2).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::DELETE);
        assert_eq!(request.url().path(), "/api/groups/5");
        assert_eq!(request.url().query(), Some("userId=2"));
        assert_eq!(request.headers().get(ACTING_USER_HEADER).unwrap(), "2");
    }
}
