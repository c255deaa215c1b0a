//! In-memory test doubles for [`EntityClient`].
//!
//! Two styles are available:
//!
//! - [`MockClient`] — a fluent expectation API: queue up expected
//!   requests with canned responses, hand out the client, and call
//!   [`MockClient::verify`] at the end of the test.
//! - [`mock_channel`] plus the `expect_*` helpers — a raw channel you
//!   drive by hand, useful when a test needs to inspect the request
//!   payload before answering.
//!
//! Both let client-wrapper logic be tested deterministically without
//! spawning a real actor, and make error injection trivial
//! (`return_err` versus contriving a failing entity state).

use crate::client::EntityClient;
use crate::entity::Entity;
use crate::error::ActorError;
use crate::message::EntityRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: Entity> {
    Get {
        response: Result<Option<T>, ActorError>,
    },
    List {
        response: Result<Vec<T>, ActorError>,
    },
    Create {
        response: Result<T::Id, ActorError>,
    },
    Action {
        response: Result<T::ActionResult, ActorError>,
    },
}

/// Expectation-driven mock with the same call surface as a real
/// [`EntityClient`].
///
/// Expectations are consumed strictly in the order they were queued;
/// a request arriving with no matching expectation panics the mock
/// task, which surfaces as a closed channel in the code under test.
pub struct MockClient<T: Entity> {
    client: EntityClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MockClient<T> {
    /// Creates a mock with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<EntityRequest<T>>(64);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (EntityRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        EntityRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        EntityRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        EntityRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("request did not match the next expectation"),
                }
            }
        });

        Self {
            client: EntityClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> EntityClient<T> {
        self.client.clone()
    }

    /// Queues an expected `get`.
    pub fn expect_get(&mut self) -> ResponseBuilder<T, Option<T>> {
        ResponseBuilder::new(self.expectations.clone(), Expectation::wrap_get)
    }

    /// Queues an expected `list`.
    pub fn expect_list(&mut self) -> ResponseBuilder<T, Vec<T>> {
        ResponseBuilder::new(self.expectations.clone(), Expectation::wrap_list)
    }

    /// Queues an expected `create`.
    pub fn expect_create(&mut self) -> ResponseBuilder<T, T::Id> {
        ResponseBuilder::new(self.expectations.clone(), Expectation::wrap_create)
    }

    /// Queues an expected `perform_action`.
    pub fn expect_action(&mut self) -> ResponseBuilder<T, T::ActionResult> {
        ResponseBuilder::new(self.expectations.clone(), Expectation::wrap_action)
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let queue = self.expectations.lock().expect("expectation queue poisoned");
        assert!(
            queue.is_empty(),
            "{} expectation(s) were never consumed",
            queue.len()
        );
    }
}

impl<T: Entity> Expectation<T> {
    fn wrap_get(response: Result<Option<T>, ActorError>) -> Self {
        Expectation::Get { response }
    }
    fn wrap_list(response: Result<Vec<T>, ActorError>) -> Self {
        Expectation::List { response }
    }
    fn wrap_create(response: Result<T::Id, ActorError>) -> Self {
        Expectation::Create { response }
    }
    fn wrap_action(response: Result<T::ActionResult, ActorError>) -> Self {
        Expectation::Action { response }
    }
}

/// Builder finishing an expectation with a canned response.
pub struct ResponseBuilder<T: Entity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<R, ActorError>) -> Expectation<T>,
}

impl<T: Entity, R> ResponseBuilder<T, R> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
        wrap: fn(Result<R, ActorError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// The mock will answer with `Ok(value)`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// The mock will answer with the given error.
    pub fn return_err(self, error: ActorError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, ActorError>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back((self.wrap)(response));
    }
}

/// Creates a bare client plus the receiver carrying its requests.
///
/// Use this when the test needs to assert on the request payload
/// itself before replying; otherwise [`MockClient`] is less verbose.
pub fn mock_channel<T: Entity>(
    buffer: usize,
) -> (EntityClient<T>, mpsc::Receiver<EntityRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer);
    (EntityClient::new(sender), receiver)
}

/// Receives the next request, asserting it is a `Create`.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<EntityRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, ActorError>>,
)> {
    match receiver.recv().await {
        Some(EntityRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request, asserting it is a `Get`.
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<EntityRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, ActorError>>,
)> {
    match receiver.recv().await {
        Some(EntityRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request, asserting it is an `Action`.
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<EntityRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, ActorError>>,
)> {
    match receiver.recv().await {
        Some(EntityRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
