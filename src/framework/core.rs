//! # Core Actor Framework
//!
//! Generic building blocks for the resource actors:
//!
//! - [`Entity`]: the trait every managed resource type implements.
//! - [`ResourceActor`]: the actor owning the store and the message loop.
//! - [`ResourceClient`]: the typed handle used to talk to an actor.
//! - [`FrameworkError`]: transport-level errors (closed actor, not found).
//!
//! The loop is written once and reused for Users, Products, Categories,
//! Brands and Orders. Associated types keep it type-safe end to end: a
//! `ResourceClient<User>` cannot be sent a `ProductCreate`.
//!
//! Each actor processes its mailbox sequentially, so the store needs no
//! locking; many actors still run in parallel, one Tokio task each.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

/// Contract a resource type must satisfy to be managed by a
/// [`ResourceActor`].
///
/// Dependencies are injected late: the `Context` is passed to
/// [`ResourceActor::run`], not to the constructor, and flows into every
/// hook. Entities without dependencies use `Context = ()`.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Unique identifier (newtype over an integer in this crate).
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug;

    /// Payload for creating a new instance.
    type CreateParams: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Resource-specific operation beyond CRUD. Use `()` if none exist.
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the hooks.
    type Context: Send + Sync;

    /// Build the entity from its assigned ID and the creation payload.
    /// Runs synchronously before [`Entity::on_create`].
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Called after construction, before the entity is stored. Failing here
    /// rejects the create. Use it for cross-actor validation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Apply an update payload.
    async fn on_update(&mut self, update: Self::UpdateParams, ctx: &Self::Context)
        -> Result<(), String>;

    /// Called before the entity is removed. Failing here rejects the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Handle a custom action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

/// Transport and storage errors of the actor layer.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// One-shot response channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// The request envelope a [`ResourceClient`] sends to its actor.
///
/// Variants map to the standard resource lifecycle — Create, Get, List,
/// Update, Delete — plus `Action` for operations that do not fit CRUD.
/// `List` returns every stored entity in insertion order; the admin forms
/// use it to preload their select options.
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// The server half: owns the store and drains the mailbox.
///
/// `order` keeps insertion order so `List` is deterministic; `store` gives
/// O(1) lookup. No locks anywhere: the loop is the only owner.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Run the message loop until every client handle is dropped.
    ///
    /// `context` is injected into each entity hook, so dependencies wired
    /// after construction (other actors' clients) are available here.
    pub async fn run(mut self, context: T::Context) {
        // Short type name for log fields ("Order", not the full path).
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id, params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id, item);
                            self.order.push(id);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|stored| *stored != id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

/// The client half: a cheap, cloneable typed handle.
#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct NoteId(u32);

    impl fmt::Display for NoteId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "note_{}", self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: NoteId,
        body: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        body: String,
    }

    #[derive(Debug)]
    struct NoteUpdate {
        body: Option<String>,
    }

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    #[async_trait]
    impl Entity for Note {
        type Id = NoteId;
        type CreateParams = NoteCreate;
        type UpdateParams = NoteUpdate;
        type Action = NoteAction;
        type ActionResult = bool;
        type Context = ();

        fn from_create_params(id: NoteId, params: NoteCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                body: params.body,
                pinned: false,
            })
        }

        async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), String> {
            if let Some(body) = update.body {
                self.body = body;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: NoteAction, _ctx: &()) -> Result<bool, String> {
            match action {
                NoteAction::Pin => {
                    let changed = !self.pinned;
                    self.pinned = true;
                    Ok(changed)
                }
            }
        }
    }

    fn spawn_note_actor() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicU32::new(1));
        let next_id = move || NoteId(counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn crud_and_action_round_trip() {
        let client = spawn_note_actor();

        let id = client
            .create(NoteCreate {
                body: "first".into(),
            })
            .await
            .unwrap();

        let changed = client.perform_action(id, NoteAction::Pin).await.unwrap();
        assert!(changed);
        let changed_again = client.perform_action(id, NoteAction::Pin).await.unwrap();
        assert!(!changed_again);

        let updated = client
            .update(
                id,
                NoteUpdate {
                    body: Some("second".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.body, "second");

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_across_deletes() {
        let client = spawn_note_actor();

        let mut ids = Vec::new();
        for body in ["a", "b", "c"] {
            ids.push(client.create(NoteCreate { body: body.into() }).await.unwrap());
        }

        client.delete(ids[1]).await.unwrap();
        let listed = client.list().await.unwrap();
        let bodies: Vec<&str> = listed.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["a", "c"]);
    }

    #[tokio::test]
    async fn missing_ids_produce_not_found() {
        let client = spawn_note_actor();

        let err = client
            .update(NoteId(9), NoteUpdate { body: None })
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("note_9".into()));

        let err = client.delete(NoteId(9)).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("note_9".into()));
    }
}
