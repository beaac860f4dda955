//! One method per API operation, grouped the way the server routes them.

use reqwest::Method;
use uuid::Uuid;

use crate::client::api::ApiClient;
use crate::client::error::ClientError;
use crate::shared::api::{
    AuthResponse, CommentRequest, ConnectionRequestBody, CreateOpportunityRequest, CreatePostRequest,
    LoginRequest, MessageResponse, SendMessageRequest, SignupRequest, UpdateProfileRequest,
};
use crate::shared::models::{
    Connection, ConversationSummary, Message, Opportunity, PendingRequest, Post, UserProfile,
};

macro_rules! resource {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<'a> {
            client: &'a ApiClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a ApiClient) -> Self {
                Self { client }
            }
        }
    };
}

resource!(
    /// `/auth`: signup and login store the returned token in the client's
    /// credential provider
    AuthApi
);
resource!(
    /// `/users`
    UsersApi
);
resource!(
    /// `/posts`
    PostsApi
);
resource!(
    /// `/opportunities`
    OpportunitiesApi
);
resource!(
    /// `/connections`
    ConnectionsApi
);
resource!(
    /// `/messages`
    MessagesApi
);

impl AuthApi<'_> {
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .client
            .send(self.client.request(Method::POST, "/auth/signup").json(request))
            .await?;
        self.client.credentials().store(&response.token)?;
        Ok(response)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .client
            .send(self.client.request(Method::POST, "/auth/login").json(request))
            .await?;
        self.client.credentials().store(&response.token)?;
        Ok(response)
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        self.client.send(self.client.request(Method::GET, "/auth/me")).await
    }

    /// Forget the stored token; no request is made
    pub fn logout(&self) -> Result<(), ClientError> {
        Ok(self.client.credentials().clear()?)
    }
}

impl UsersApi<'_> {
    pub async fn profile(&self, id: Uuid) -> Result<UserProfile, ClientError> {
        self.client
            .send(self.client.request(Method::GET, &format!("/users/{id}")))
            .await
    }

    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> Result<UserProfile, ClientError> {
        self.client
            .send(self.client.request(Method::PUT, "/users/profile").json(update))
            .await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<UserProfile>, ClientError> {
        self.client
            .send(
                self.client
                    .request(Method::GET, "/users/search")
                    .query(&[("query", query)]),
            )
            .await
    }

    pub async fn suggested(&self) -> Result<Vec<UserProfile>, ClientError> {
        self.client
            .send(self.client.request(Method::GET, "/users/suggested"))
            .await
    }
}

impl PostsApi<'_> {
    pub async fn list(&self) -> Result<Vec<Post>, ClientError> {
        self.client.send(self.client.request(Method::GET, "/posts")).await
    }

    pub async fn create(&self, request: &CreatePostRequest) -> Result<Post, ClientError> {
        self.client
            .send(self.client.request(Method::POST, "/posts").json(request))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, ClientError> {
        self.client
            .send(self.client.request(Method::GET, &format!("/posts/{id}")))
            .await
    }

    pub async fn like(&self, id: Uuid) -> Result<Post, ClientError> {
        self.client
            .send(self.client.request(Method::POST, &format!("/posts/{id}/like")))
            .await
    }

    pub async fn unlike(&self, id: Uuid) -> Result<Post, ClientError> {
        self.client
            .send(self.client.request(Method::DELETE, &format!("/posts/{id}/like")))
            .await
    }

    pub async fn comment(&self, id: Uuid, text: &str) -> Result<Post, ClientError> {
        let body = CommentRequest { text: text.to_string() };
        self.client
            .send(
                self.client
                    .request(Method::POST, &format!("/posts/{id}/comment"))
                    .json(&body),
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        self.client
            .send(self.client.request(Method::DELETE, &format!("/posts/{id}")))
            .await
    }
}

impl OpportunitiesApi<'_> {
    pub async fn list(&self) -> Result<Vec<Opportunity>, ClientError> {
        self.client
            .send(self.client.request(Method::GET, "/opportunities"))
            .await
    }

    pub async fn create(&self, request: &CreateOpportunityRequest) -> Result<Opportunity, ClientError> {
        self.client
            .send(self.client.request(Method::POST, "/opportunities").json(request))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Opportunity, ClientError> {
        self.client
            .send(self.client.request(Method::GET, &format!("/opportunities/{id}")))
            .await
    }

    pub async fn apply(&self, id: Uuid) -> Result<Opportunity, ClientError> {
        self.client
            .send(self.client.request(Method::POST, &format!("/opportunities/{id}/apply")))
            .await
    }
}

impl ConnectionsApi<'_> {
    pub async fn list(&self) -> Result<Vec<UserProfile>, ClientError> {
        self.client
            .send(self.client.request(Method::GET, "/connections"))
            .await
    }

    pub async fn pending_requests(&self) -> Result<Vec<PendingRequest>, ClientError> {
        self.client
            .send(self.client.request(Method::GET, "/connections/requests"))
            .await
    }

    pub async fn send_request(&self, recipient_id: Uuid) -> Result<Connection, ClientError> {
        let body = ConnectionRequestBody { recipient_id };
        self.client
            .send(self.client.request(Method::POST, "/connections/request").json(&body))
            .await
    }

    pub async fn accept(&self, request_id: Uuid) -> Result<Connection, ClientError> {
        self.client
            .send(self.client.request(Method::PUT, &format!("/connections/accept/{request_id}")))
            .await
    }

    pub async fn remove(&self, user_id: Uuid) -> Result<MessageResponse, ClientError> {
        self.client
            .send(self.client.request(Method::DELETE, &format!("/connections/{user_id}")))
            .await
    }
}

impl MessagesApi<'_> {
    pub async fn conversations(&self) -> Result<Vec<ConversationSummary>, ClientError> {
        self.client
            .send(self.client.request(Method::GET, "/messages/conversations"))
            .await
    }

    pub async fn with_user(&self, user_id: Uuid) -> Result<Vec<Message>, ClientError> {
        self.client
            .send(self.client.request(Method::GET, &format!("/messages/{user_id}")))
            .await
    }

    pub async fn send(&self, recipient: Uuid, content: &str) -> Result<Message, ClientError> {
        let body = SendMessageRequest {
            recipient,
            content: content.to_string(),
        };
        self.client
            .send(self.client.request(Method::POST, "/messages").json(&body))
            .await
    }
}
