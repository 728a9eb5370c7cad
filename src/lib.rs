//! This crate keeps a list of dated todos in sync with a remote JSON collection.
//!
//! It provides an HTTP client for the collection in the [`client`] module, that can be used as a stand-alone module.
//!
//! The rest of the crate is a small model-view-controller loop:
//! * a [`Store`](store::Store) holds the todos in memory,
//! * a [`Presenter`](presenter::Presenter) turns them into render instructions for any [`Renderer`](traits::Renderer),
//! * a [`Coordinator`](coordinator::Coordinator) calls the remote collection, then updates the store, then the presenter. \
//!   Use [`build`] to wire one from a [`Config`](config::Config).

pub mod traits;

pub mod todo;
pub use todo::{NewTodo, Todo, TodoId};
pub mod store;
pub mod presenter;
pub mod coordinator;
pub use coordinator::Coordinator;

pub mod client;
pub mod config;
pub mod error;
pub mod mock_behaviour;
pub mod mock_source;
pub mod utils;

use crate::client::Client;
use crate::config::Config;
use crate::error::RemoteError;
use crate::traits::Renderer;

/// Unless you want another kind of [`EventSource`](traits::EventSource) (e.g. a mocked one), this is the coordinator you want
pub type EventListCoordinator<R> = Coordinator<Client, R>;

/// Wire a coordinator that talks to the collection described by `config`, and displays it through `renderer`.
///
/// Nothing is fetched yet, see [`Coordinator::start`]
pub fn build<R: Renderer>(config: &Config, renderer: R) -> Result<EventListCoordinator<R>, RemoteError> {
    let client = Client::from_config(config)?;
    Ok(Coordinator::new(client, renderer, config.failure_policy()))
}
