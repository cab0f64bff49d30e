//! # Flow Dispatch
//!
//! Runs store calls as independent tokio tasks and hands their results back
//! to the UI task over a channel. Nothing here is retried, queued behind
//! other work, deduplicated or cancelled; overlapping flows race and the
//! view model applies outcomes in arrival order.

use std::future::Future;
use tokio::sync::mpsc;

use super::post_store::{HttpPostStore, StoreError};
use crate::tui::models::{NewPost, Post, PostId, PostPatch};

const OUTCOME_CHANNEL_CAPACITY: usize = 32;

/// A store call requested by the view model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowRequest {
    /// Fill the list region
    ListPosts,
    /// Fill the detail region with the first post of the collection
    ShowFirstPost,
    /// Fill the detail region with one post
    ShowPost(PostId),
    /// Create a post and append it to the list
    CreatePost(NewPost),
    /// Save the edit form
    UpdatePost { id: PostId, patch: PostPatch },
    /// Delete a post
    DeletePost(PostId),
}

impl FlowRequest {
    /// Short flow name for logs
    pub fn name(&self) -> &'static str {
        match self {
            FlowRequest::ListPosts => "list-posts",
            FlowRequest::ShowFirstPost => "show-first-post",
            FlowRequest::ShowPost(_) => "show-post",
            FlowRequest::CreatePost(_) => "create-post",
            FlowRequest::UpdatePost { .. } => "update-post",
            FlowRequest::DeletePost(_) => "delete-post",
        }
    }
}

/// Result of a finished flow, delivered to the UI task
#[derive(Debug)]
pub enum FlowOutcome {
    PostsListed(Result<Vec<Post>, StoreError>),
    FirstPostLoaded(Result<Vec<Post>, StoreError>),
    PostLoaded(Result<Post, StoreError>),
    PostCreated(Result<Post, StoreError>),
    PostUpdated(Result<Post, StoreError>),
    PostDeleted {
        id: PostId,
        result: Result<(), StoreError>,
    },
}

/// Spawns store calls and collects their outcomes
pub struct FlowDispatcher {
    store: HttpPostStore,
    outcome_sender: mpsc::Sender<FlowOutcome>,
    outcome_receiver: mpsc::Receiver<FlowOutcome>,
    in_flight: usize,
}

impl FlowDispatcher {
    pub fn new(store: HttpPostStore) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
        Self {
            store,
            outcome_sender,
            outcome_receiver,
            in_flight: 0,
        }
    }

    pub fn store(&self) -> &HttpPostStore {
        &self.store
    }

    /// Number of flows whose outcome has not been collected yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start the store call for `request`. Must run inside a tokio runtime.
    pub fn dispatch(&mut self, request: FlowRequest) {
        tracing::debug!("Dispatching flow {} ({:?})", request.name(), request);
        let store = self.store.clone();

        match request {
            FlowRequest::ListPosts => {
                self.spawn(async move { FlowOutcome::PostsListed(store.list_posts().await) })
            }
            FlowRequest::ShowFirstPost => {
                self.spawn(async move { FlowOutcome::FirstPostLoaded(store.list_posts().await) })
            }
            FlowRequest::ShowPost(id) => {
                self.spawn(async move { FlowOutcome::PostLoaded(store.get_post(&id).await) })
            }
            FlowRequest::CreatePost(new_post) => self.spawn(async move {
                FlowOutcome::PostCreated(store.create_post(&new_post).await)
            }),
            FlowRequest::UpdatePost { id, patch } => self.spawn(async move {
                FlowOutcome::PostUpdated(store.update_post(&id, &patch).await)
            }),
            FlowRequest::DeletePost(id) => self.spawn(async move {
                let result = store.delete_post(&id).await;
                FlowOutcome::PostDeleted { id, result }
            }),
        }
    }

    fn spawn<F>(&mut self, flow: F)
    where
        F: Future<Output = FlowOutcome> + Send + 'static,
    {
        self.in_flight += 1;
        let outcome_sender = self.outcome_sender.clone();
        tokio::spawn(async move {
            let outcome = flow.await;
            // Receiver is gone only when the app is shutting down
            let _ = outcome_sender.send(outcome).await;
        });
    }

    /// Take a finished outcome without waiting
    pub fn poll_outcome(&mut self) -> Option<FlowOutcome> {
        let outcome = self.outcome_receiver.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }

    /// Wait for the next outcome; `None` when nothing is in flight
    pub async fn next_outcome(&mut self) -> Option<FlowOutcome> {
        if self.in_flight == 0 {
            return None;
        }
        let outcome = self.outcome_receiver.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }
}
