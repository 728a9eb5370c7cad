//! This module sequences remote calls with updates of the local state
//!
//! Every mutation goes through the same steps: call the [`EventSource`], then update the [`Store`],
//! then update the [`Presenter`]. What happens to the local state when the remote call fails is
//! decided by the [`FailurePolicy`].

use crate::config::FailurePolicy;
use crate::error::RemoteError;
use crate::presenter::render::RowControl;
use crate::presenter::{Presenter, UiEvent};
use crate::store::Store;
use crate::todo::{parse_input_date, NewTodo, TodoId};
use crate::traits::{EventSource, Renderer};

/// Keeps a [`Store`] and a [`Presenter`] in sync with a remote [`EventSource`].
///
/// This is the only component that talks to the source.
#[derive(Debug)]
pub struct Coordinator<S, R>
where
    S: EventSource,
    R: Renderer,
{
    source: S,
    store: Store,
    presenter: Presenter<R>,
    failure_policy: FailurePolicy,
    /// Whether `start` has run. User events are ignored until then
    started: bool,
}

impl<S, R> Coordinator<S, R>
where
    S: EventSource,
    R: Renderer,
{
    /// Create a coordinator. This does not fetch anything yet, see [`Self::start`]
    pub fn new(source: S, renderer: R, failure_policy: FailurePolicy) -> Self {
        Self {
            source,
            store: Store::new(),
            presenter: Presenter::new(renderer),
            failure_policy,
            started: false,
        }
    }

    pub fn store(&self) -> &Store { &self.store }
    pub fn presenter(&self) -> &Presenter<R> { &self.presenter }
    /// Returns the presenter, e.g. to let the user type into its forms
    pub fn presenter_mut(&mut self) -> &mut Presenter<R> { &mut self.presenter }
    pub fn source(&self) -> &S { &self.source }
    pub fn failure_policy(&self) -> FailurePolicy { self.failure_policy }
    pub fn is_started(&self) -> bool { self.started }

    /// Fetch every todo, display them, and start accepting user events.
    ///
    /// This only has an effect the first time it is called.
    /// In case the fetch fails, the list stays empty, but user events are accepted anyway.
    pub async fn start(&mut self) -> Result<(), RemoteError> {
        if self.started {
            log::warn!("This coordinator has already started");
            return Ok(());
        }
        log::info!("Starting, fetching the todo list...");
        let result = self.refresh().await;
        self.started = true;
        result
    }

    /// Fetch every todo again, and re-display them
    pub async fn refresh(&mut self) -> Result<(), RemoteError> {
        match self.source.fetch_all().await {
            Ok(todos) => {
                log::info!("Fetched {} todos", todos.len());
                self.store.replace_all(todos);
                self.presenter.render_all(self.store.get_all());
                Ok(())
            },
            Err(err) => {
                log::warn!("Unable to fetch the todo list: {}", err);
                if self.failure_policy == FailurePolicy::Mirror {
                    self.store.replace_all(Vec::new());
                    self.presenter.render_all(self.store.get_all());
                }
                Err(err)
            },
        }
    }

    /// React to something the user did
    pub async fn handle(&mut self, event: UiEvent) -> Result<(), RemoteError> {
        if self.started == false {
            log::warn!("Ignoring {:?}, this coordinator has not started yet", event);
            return Ok(());
        }
        log::debug!("Handling {:?}", event);

        match event {
            UiEvent::ShowInputForm => {
                self.presenter.show_input_form();
                Ok(())
            },
            UiEvent::SubmitNewTodo => self.add_todo().await,
            UiEvent::CancelNewTodo => {
                self.close_input_form();
                Ok(())
            },
            UiEvent::EditClicked(id) => {
                self.begin_edit(&id);
                Ok(())
            },
            UiEvent::SubmitEdit(id) => self.save_edit(&id).await,
            UiEvent::CancelEdit(_) => {
                self.presenter.render_all(self.store.get_all());
                Ok(())
            },
            UiEvent::DeleteClicked(id) => self.delete_todo(&id).await,
        }
    }

    /// Handle a click on a control of a row, identified by its element identity (`todo-<id>`).
    /// Clicks on anything that is not a todo row are ignored.
    pub async fn click_row(&mut self, element_id: &str, control: RowControl) -> Result<(), RemoteError> {
        match self.presenter.resolve_click(element_id, control) {
            None => Ok(()),
            Some(event) => self.handle(event).await,
        }
    }

    /// Handle a click on the "add" or "cancel" buttons, or a submission of the new-todo form
    pub async fn click_form(&mut self, element_id: &str) -> Result<(), RemoteError> {
        match self.presenter.resolve_form_action(element_id) {
            None => {
                log::debug!("Ignoring a click on {}", element_id);
                Ok(())
            },
            Some(event) => self.handle(event).await,
        }
    }

    fn close_input_form(&mut self) {
        self.presenter.clear_input_form();
        self.presenter.hide_input_form();
    }

    async fn add_todo(&mut self) -> Result<(), RemoteError> {
        let fields = self.presenter.input_form_fields();
        let new_todo = NewTodo {
            title: fields.title,
            completed: false,
            start_date: parse_input_date(&fields.start_date),
            end_date: parse_input_date(&fields.end_date),
        };

        match self.source.create(&new_todo).await {
            Ok(created) => {
                let already_known = self.store.get_by_id(created.id()).is_some();
                self.store.append(created.clone());
                if already_known {
                    self.presenter.render_all(self.store.get_all());
                } else {
                    self.presenter.render_one(&created);
                }
                self.close_input_form();
                Ok(())
            },
            Err(err) => {
                log::warn!("Unable to create todo {:?}: {}", new_todo.title, err);
                if self.failure_policy == FailurePolicy::Mirror {
                    self.close_input_form();
                }
                Err(err)
            },
        }
    }

    fn begin_edit(&mut self, id: &TodoId) {
        match self.store.get_by_id(id) {
            None => log::warn!("Cannot edit todo {}, it is not in the list", id),
            Some(todo) => self.presenter.show_edit_form(todo),
        }
    }

    async fn save_edit(&mut self, id: &TodoId) -> Result<(), RemoteError> {
        let original = match self.store.get_by_id(id) {
            None => {
                log::warn!("Cannot save todo {}, it is not in the list", id);
                return Ok(());
            },
            Some(todo) => todo.clone(),
        };
        let fields = match self.presenter.edit_form_fields(id) {
            None => {
                log::warn!("Cannot save todo {}, it is not being edited", id);
                return Ok(());
            },
            Some(fields) => fields,
        };
        let edited = original.merged_with(
            &fields.title,
            parse_input_date(&fields.start_date),
            parse_input_date(&fields.end_date),
        );

        let result = match self.source.update(id, &edited).await {
            Ok(updated) => {
                self.store.replace_by_id(id, updated);
                Ok(())
            },
            Err(err) => {
                log::warn!("Unable to update todo {}: {}", id, err);
                if self.failure_policy == FailurePolicy::Abort {
                    return Err(err);
                }
                self.store.replace_by_id(id, edited);
                Err(err)
            },
        };
        self.presenter.render_all(self.store.get_all());
        result
    }

    async fn delete_todo(&mut self, id: &TodoId) -> Result<(), RemoteError> {
        let result = self.source.delete(id).await;
        if let Err(err) = &result {
            log::warn!("Unable to delete todo {}: {}", id, err);
            if self.failure_policy == FailurePolicy::Abort {
                return result;
            }
        }
        self.store.remove_by_id(id);
        self.presenter.remove_one(id);
        result
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_source::MockSource;
    use crate::presenter::memory::MemoryRenderer;
    use crate::todo::Todo;

    fn coordinator(ids: &[&str]) -> Coordinator<MockSource, MemoryRenderer> {
        let todos = ids.iter()
            .map(|id| Todo::new(TodoId::from(*id), format!("Task {}", id), false, None, None))
            .collect();
        Coordinator::new(MockSource::new(todos), MemoryRenderer::new(), FailurePolicy::Mirror)
    }

    #[tokio::test]
    async fn events_before_start_are_ignored() {
        let mut coordinator = coordinator(&["1"]);
        coordinator.handle(UiEvent::DeleteClicked(TodoId::from("1"))).await.unwrap();
        assert_eq!(coordinator.source().todos().len(), 1);
        assert!(coordinator.store().is_empty());
        assert!(coordinator.is_started() == false);
    }

    #[tokio::test]
    async fn start_only_once() {
        let mut coordinator = coordinator(&["1", "2"]);
        coordinator.start().await.unwrap();
        assert_eq!(coordinator.store().len(), 2);
        assert_eq!(coordinator.presenter().renderer().row_ids(), vec!["todo-1", "todo-2"]);

        coordinator.handle(UiEvent::DeleteClicked(TodoId::from("1"))).await.unwrap();
        // A second start does not fetch again
        coordinator.start().await.unwrap();
        assert_eq!(coordinator.presenter().renderer().row_ids(), vec!["todo-2"]);
    }

    #[tokio::test]
    async fn clicks_are_dispatched() {
        let mut coordinator = coordinator(&["1"]);
        coordinator.start().await.unwrap();

        coordinator.click_form("add-event-button").await.unwrap();
        assert!(coordinator.presenter().renderer().is_input_form_visible());
        coordinator.click_form("delete-event-button").await.unwrap();
        assert!(coordinator.presenter().renderer().is_input_form_visible() == false);

        coordinator.click_row("not-a-row", RowControl::Delete).await.unwrap();
        assert_eq!(coordinator.store().len(), 1);
        coordinator.click_row("todo-1", RowControl::Delete).await.unwrap();
        assert!(coordinator.store().is_empty());
    }
}
