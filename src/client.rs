//! This module provides a client to connect to a remote JSON collection of todos

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::RemoteError;
use crate::todo::{NewTodo, Todo, TodoId};
use crate::traits::EventSource;

static JSON_CONTENT_TYPE: &str = "application/json";


/// An [`EventSource`] that talks to a REST collection over HTTP.
///
/// * `GET    <base>`      lists the todos
/// * `POST   <base>`      creates one
/// * `PUT    <base>/<id>` replaces one
/// * `DELETE <base>/<id>` deletes one
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, RemoteError> {
        let base_url = Url::parse(url.as_ref())
            .map_err(|err| RemoteError::InvalidUrl(format!("{}: {}", url.as_ref(), err)))?;
        Self::from_url(base_url)
    }

    /// Create a client for the collection a config points to
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        Self::from_url(config.base_url().clone())
    }

    fn from_url(base_url: Url) -> Result<Self, RemoteError> {
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::InvalidUrl(format!("{} cannot address single items", base_url)));
        }
        Ok(Self { base_url, http: reqwest::Client::new() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the URL of a single item of the collection
    pub fn item_url(&self, id: &TodoId) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidUrl(format!("{} cannot address single items", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, RemoteError> {
        let response = request.send().await?;
        check_status(response.status(), response.url())?;
        Ok(response)
    }
}

/// Returns an error for any non-2xx status
fn check_status(status: StatusCode, url: &Url) -> Result<(), RemoteError> {
    if status.is_success() == false {
        return Err(RemoteError::Status { status, url: url.to_string() });
    }
    Ok(())
}

/// Parse a response body. A body that is not the expected JSON is a [`RemoteError::MalformedPayload`]
fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, RemoteError> {
    let payload = serde_json::from_str(text)?;
    Ok(payload)
}

#[async_trait]
impl EventSource for Client {
    async fn fetch_all(&self) -> Result<Vec<Todo>, RemoteError> {
        log::debug!("Fetching every todo from {}", self.base_url);
        let response = self.send(self.http.get(self.base_url.clone())).await?;
        let text = response.text().await?;
        let todos: Vec<Todo> = parse_payload(&text)?;
        log::debug!("Fetched {} todos", todos.len());
        Ok(todos)
    }

    async fn create(&mut self, new_todo: &NewTodo) -> Result<Todo, RemoteError> {
        log::debug!("Creating todo {:?}", new_todo.title);
        let body = serde_json::to_string(new_todo)?;
        let request = self.http
            .post(self.base_url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);
        let response = self.send(request).await?;
        let text = response.text().await?;
        let created: Todo = parse_payload(&text)?;
        log::debug!("Todo {:?} was created with id {}", created.title(), created.id());
        Ok(created)
    }

    async fn update(&mut self, id: &TodoId, todo: &Todo) -> Result<Todo, RemoteError> {
        log::debug!("Updating todo {}", id);
        let body = serde_json::to_string(todo)?;
        let request = self.http
            .put(self.item_url(id)?)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);
        let response = self.send(request).await?;
        let text = response.text().await?;
        parse_payload(&text)
    }

    async fn delete(&mut self, id: &TodoId) -> Result<(), RemoteError> {
        log::debug!("Deleting todo {}", id);
        self.send(self.http.delete(self.item_url(id)?)).await?;
        Ok(())
    }
}
