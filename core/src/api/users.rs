use serde::Serialize;

use crate::client::ApiClient;
use crate::config::Settings;
use crate::error::ApiError;
use crate::http::{HttpResponse, RequestOptions};

/// Operations on `/users`.
#[derive(Debug, Default)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
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

    pub fn get_all_users(&self) -> Result<HttpResponse, ApiError> {
        self.client.get("/users", RequestOptions::new())
    }

    pub fn get_user(&self, user_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/users/{user_id}"), RequestOptions::new())
    }

    pub fn create_user<T: Serialize + ?Sized>(&self, user: &T) -> Result<HttpResponse, ApiError> {
        self.client.post("/users", RequestOptions::new().json(user)?)
    }

    /// Full replace of user `user_id`.
    pub fn update_user<T: Serialize + ?Sized>(&self, user_id: i64, user: &T) -> Result<HttpResponse, ApiError> {
        self.client.put(&format!("/users/{user_id}"), RequestOptions::new().json(user)?)
    }

    pub fn patch_user<T: Serialize + ?Sized>(&self, user_id: i64, fields: &T) -> Result<HttpResponse, ApiError> {
        self.client.patch(&format!("/users/{user_id}"), RequestOptions::new().json(fields)?)
    }

    pub fn delete_user(&self, user_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.delete(&format!("/users/{user_id}"), RequestOptions::new())
    }

    pub fn get_user_posts(&self, user_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/users/{user_id}/posts"), RequestOptions::new())
    }

    pub fn get_user_comments(&self, user_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/users/{user_id}/comments"), RequestOptions::new())
    }

    pub fn get_user_todos(&self, user_id: i64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("/users/{user_id}/todos"), RequestOptions::new())
    }
}
