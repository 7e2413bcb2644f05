use serde::Serialize;

use crate::client::ApiClient;
use crate::config::Settings;
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestOptions};

/// Operations on `/comments`. There is no partial update for comments.
#[derive(Debug, Default)]
pub struct CommentApi {
    client: ApiClient,
}

impl CommentApi {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: ApiClient::new(settings),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn close(&mut self) {
        self.client.close();
    }

    pub fn get_all_comments(&self) -> Result<HttpResponse, ApiError> {
        self.client.get("/comments", RequestOptions::new())
    }

    pub fn get_comment(&self, comment_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/comments/{comment_id}"), RequestOptions::new())
    }

    pub fn create_comment<T: Serialize + ?Sized>(&self, comment: &T) -> Result<HttpResponse, ApiError> {
        self.client.post("/comments", RequestOptions::new().json(comment)?)
    }

    pub fn update_comment<T: Serialize + ?Sized>(&self, comment_id: i64, comment: &T) -> Result<HttpResponse, ApiError> {
        self.client.put(&format!("/comments/{comment_id}"), RequestOptions::new().json(comment)?)
    }

    pub fn delete_comment(&self, comment_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.delete(&format!("/comments/{comment_id}"), RequestOptions::new())
    }

    pub fn get_comments_by_post(&self, post_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get("/comments", RequestOptions::new().query("postId", post_id))
    }

    /// The address is sent as-is; the server decides whether it is valid.
    pub fn get_comments_by_email(&self, email: &str) -> Result<HttpResponse, ApiError> {
        self.client.get("/comments", RequestOptions::new().query("email", email))
    }
}
