use serde::Serialize;

use crate::client::ApiClient;
use crate::config::Settings;
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestOptions};

/// Operations on `/posts`.
#[derive(Debug, Default)]
pub struct PostApi {
    client: ApiClient,
}

impl PostApi {
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

    pub fn get_all_posts(&self) -> Result<HttpResponse, ApiError> {
        self.client.get("/posts", RequestOptions::new())
    }

    pub fn get_post(&self, post_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/posts/{post_id}"), RequestOptions::new())
    }

    pub fn create_post<T: Serialize + ?Sized>(&self, post: &T) -> Result<HttpResponse, ApiError> {
        self.client.post("/posts", RequestOptions::new().json(post)?)
    }

    pub fn update_post<T: Serialize + ?Sized>(&self, post_id: i64, post: &T) -> Result<HttpResponse, ApiError> {
        self.client.put(&format!("/posts/{post_id}"), RequestOptions::new().json(post)?)
    }

    pub fn patch_post<T: Serialize + ?Sized>(&self, post_id: i64, fields: &T) -> Result<HttpResponse, ApiError> {
        self.client.patch(&format!("/posts/{post_id}"), RequestOptions::new().json(fields)?)
    }

    pub fn delete_post(&self, post_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.delete(&format!("/posts/{post_id}"), RequestOptions::new())
    }

    pub fn get_post_comments(&self, post_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/posts/{post_id}/comments"), RequestOptions::new())
    }

    /// `GET /posts?userId={user_id}`
    pub fn get_posts_by_user(&self, user_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get("/posts", RequestOptions::new().query("userId", user_id))
    }
}
