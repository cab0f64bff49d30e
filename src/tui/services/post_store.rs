//! # Post Store Client
//!
//! Talks to the remote post collection over HTTP. Every call maps a non-2xx
//! status to [`StoreError::Response`] carrying the raw body text; the body of
//! a failed response is never parsed as JSON.

use anyhow::Result;
use reqwest::{Client, Response};
use thiserror::Error;

use crate::config::BlogProfile;
use crate::tui::models::{NewPost, Post, PostId, PostPatch};

const POSTS_PATH: &str = "posts";

/// Failure of a single store call
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network unreachable, DNS, connection reset, undecodable success body
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a status outside 2xx
    #[error("HTTP error! Status: {status}, Message: {body}")]
    Response { status: u16, body: String },
}

impl StoreError {
    /// HTTP status for response failures
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Response { status, .. } => Some(*status),
            StoreError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// HTTP client for the `posts` collection
#[derive(Debug, Clone)]
pub struct HttpPostStore {
    client: Client,
    base_url: String,
}

impl HttpPostStore {
    /// Create a store client for the profile's base URL
    pub fn new(profile: &BlogProfile) -> Result<Self> {
        tracing::debug!("Creating HttpPostStore for {}", profile.base_url());
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: profile.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{POSTS_PATH}", self.base_url)
    }

    fn item_url(&self, id: &PostId) -> String {
        format!("{}/{POSTS_PATH}/{id}", self.base_url)
    }

    /// Pass success responses through, turn anything else into a response failure
    async fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(StoreError::Response {
            status: status.as_u16(),
            body,
        })
    }

    /// `GET /posts`
    pub async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let posts = Self::check_status(response).await?.json().await?;
        Ok(posts)
    }

    /// `GET /posts/{id}`
    pub async fn get_post(&self, id: &PostId) -> Result<Post, StoreError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        let post = Self::check_status(response).await?.json().await?;
        Ok(post)
    }

    /// `POST /posts`; the returned post carries the assigned id
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(post)
            .send()
            .await?;
        let created = Self::check_status(response).await?.json().await?;
        Ok(created)
    }

    /// `PATCH /posts/{id}` with title and content
    pub async fn update_post(&self, id: &PostId, patch: &PostPatch) -> Result<Post, StoreError> {
        let response = self
            .client
            .patch(self.item_url(id))
            .json(patch)
            .send()
            .await?;
        let updated = Self::check_status(response).await?.json().await?;
        Ok(updated)
    }

    /// `DELETE /posts/{id}`; only the status matters
    pub async fn delete_post(&self, id: &PostId) -> Result<(), StoreError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> HttpPostStore {
        HttpPostStore::new(&BlogProfile::new("test", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn list_posts_should_decode_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "A", "author": "Ann", "image": "a.png", "content": "x", "date": "2024-01-01"},
                {"id": "2", "title": "B"}
            ])))
            .mount(&server)
            .await;

        let posts = store_for(&server).list_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, PostId::from(1));
        assert_eq!(posts[0].author, "Ann");
        assert_eq!(posts[1].id, PostId::from("2"));
    }

    #[tokio::test]
    async fn non_success_status_should_carry_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{ not json"))
            .mount(&server)
            .await;

        let err = store_for(&server)
            .get_post(&PostId::from(9))
            .await
            .unwrap_err();
        match &err {
            StoreError::Response { status, body } => {
                assert_eq!(*status, 404);
                assert_eq!(body, "{ not json");
            }
            other => panic!("Expected response failure, got {other:?}"),
        }
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "HTTP error! Status: 404, Message: { not json"
        );
    }

    #[tokio::test]
    async fn create_post_should_send_json_body() {
        let server = MockServer::start().await;
        let new_post = NewPost {
            title: "Fresh".to_string(),
            author: "Bo".to_string(),
            image: "http://img/1.png".to_string(),
            content: "Hello".to_string(),
            date: "2024-03-04".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "title": "Fresh", "author": "Bo", "image": "http://img/1.png",
                "content": "Hello", "date": "2024-03-04"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11, "title": "Fresh", "author": "Bo", "image": "http://img/1.png",
                "content": "Hello", "date": "2024-03-04"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = store_for(&server).create_post(&new_post).await.unwrap();
        assert_eq!(created.id, PostId::from(11));
        assert_eq!(created.title, "Fresh");
    }

    #[tokio::test]
    async fn update_post_should_patch_title_and_content_only() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/posts/3"))
            .and(body_json(json!({"title": "T2", "content": "C2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3, "title": "T2", "content": "C2", "author": "A", "date": "2024-01-01"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let patch = PostPatch {
            title: "T2".to_string(),
            content: "C2".to_string(),
        };
        let updated = store_for(&server)
            .update_post(&PostId::from(3), &patch)
            .await
            .unwrap();
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.author, "A");
    }

    #[tokio::test]
    async fn delete_post_should_ignore_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("whatever"))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server)
            .delete_post(&PostId::from(5))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_failure_should_report_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/5"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = store_for(&server)
            .delete_post(&PostId::from(5))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn unreachable_store_should_be_transport_failure() {
        // Reserve a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let store =
            HttpPostStore::new(&BlogProfile::new("gone", format!("http://127.0.0.1:{port}")))
                .unwrap();
        let err = store.list_posts().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }
}
