//! Client Application State
//!
//! Central state shared across egui views. Network calls run on worker
//! threads; each returns through an `mpsc` receiver that [`AppState::poll`]
//! drains once per frame.

mod load;

pub use load::LoadState;

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use uuid::Uuid;

use crate::egui_app::api::{ApiClient, ApiError};
use crate::egui_app::auth::{credentials_from_input, AuthState};
use crate::egui_app::config::Config;
use crate::egui_app::session::{Session, SessionStore};
use crate::shared::{
    LoginResponse, NewOperation, OperationIndex, OperationKind, OperationNode, ThreadSummary,
    ThreadTree,
};

/// A fetched tree together with its parent-id index
#[derive(Debug)]
pub struct LoadedTree {
    pub tree: ThreadTree,
    pub index: OperationIndex,
}

impl LoadedTree {
    pub fn new(tree: ThreadTree) -> Self {
        let index = OperationIndex::new(&tree.operations);
        Self { tree, index }
    }
}

/// Input of one inline operation form
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDraft {
    pub operation: OperationKind,
    pub operand: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for OperationDraft {
    fn default() -> Self {
        Self {
            operation: OperationKind::Add,
            operand: String::new(),
            error: None,
            submitting: false,
        }
    }
}

type Pending<T> = Option<Receiver<Result<T, ApiError>>>;

/// Run `job` on a worker thread and hand back the receiving end
fn spawn_request<T, F>(job: F) -> Receiver<Result<T, ApiError>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let _ = tx.send(job());
    });
    rx
}

/// Take a finished result out of a pending slot, if one arrived
fn take_ready<T>(pending: &mut Pending<T>) -> Option<Result<T, ApiError>> {
    let rx = pending.as_ref()?;
    match rx.try_recv() {
        Ok(result) => {
            *pending = None;
            Some(result)
        }
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => {
            *pending = None;
            None
        }
    }
}

/// Parse a numeric form field
pub fn parse_number(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter a number".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("'{}' is not a number", trimmed)),
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub api: ApiClient,
    session_store: Option<SessionStore>,
    pub auth_state: AuthState,

    pub username_input: String,
    pub password_input: String,
    pub is_register_mode: bool,
    auth_result: Pending<LoginResponse>,

    pub health: LoadState<String>,
    health_result: Pending<String>,

    pub threads: LoadState<Vec<ThreadSummary>>,
    threads_result: Pending<Vec<ThreadSummary>>,
    pub new_thread_input: String,
    pub new_thread_error: Option<String>,
    new_thread_result: Pending<ThreadSummary>,

    pub selected_thread: Option<Uuid>,
    pub tree: LoadState<Arc<LoadedTree>>,
    tree_result: Pending<ThreadTree>,

    /// Inline operation forms keyed by parent node (`None` is the thread root)
    pub drafts: HashMap<Option<Uuid>, OperationDraft>,
    operation_results: Vec<(Option<Uuid>, Receiver<Result<OperationNode, ApiError>>)>,
}

impl AppState {
    /// State for the desktop app: session from the default location
    pub fn new() -> Self {
        Self::with_parts(Config::new(), SessionStore::default_location())
    }

    pub fn with_parts(config: Config, session_store: Option<SessionStore>) -> Self {
        let session = session_store.as_ref().and_then(|store| match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring saved session: {}", e);
                None
            }
        });
        if let Some(ref session) = session {
            tracing::info!("Restored session for {}", session.user.username);
        }

        tracing::info!("Using API at {}", config.server_url());

        Self {
            api: ApiClient::new(config),
            session_store,
            auth_state: AuthState::with_session(session),
            username_input: String::new(),
            password_input: String::new(),
            is_register_mode: false,
            auth_result: None,
            health: LoadState::Idle,
            health_result: None,
            threads: LoadState::Idle,
            threads_result: None,
            new_thread_input: String::new(),
            new_thread_error: None,
            new_thread_result: None,
            selected_thread: None,
            tree: LoadState::Idle,
            tree_result: None,
            drafts: HashMap::new(),
            operation_results: Vec::new(),
        }
    }

    /// Kick off the fetches the first frame needs
    pub fn start(&mut self) {
        self.refresh_health();
        self.refresh_threads();
    }

    /// Drain every finished background request
    pub fn poll(&mut self) {
        self.check_auth_result();

        if let Some(result) = take_ready(&mut self.health_result) {
            self.health = result.map_err(|e| e.user_message()).into();
        }

        if let Some(result) = take_ready(&mut self.threads_result) {
            self.threads = result.map_err(|e| e.user_message()).into();
        }

        if let Some(result) = take_ready(&mut self.new_thread_result) {
            match result {
                Ok(thread) => {
                    tracing::info!("Created thread {}", thread.id);
                    self.new_thread_input.clear();
                    self.new_thread_error = None;
                    self.refresh_threads();
                    self.select_thread(thread.id);
                }
                Err(e) => {
                    self.handle_rejected_token(&e);
                    self.new_thread_error = Some(e.user_message());
                }
            }
        }

        if let Some(result) = take_ready(&mut self.tree_result) {
            let tree = result.map(|tree| Arc::new(LoadedTree::new(tree)));
            self.tree = tree.map_err(|e| e.user_message()).into();
        }

        self.check_operation_results();
    }

    fn check_auth_result(&mut self) {
        let Some(result) = take_ready(&mut self.auth_result) else {
            return;
        };
        self.auth_state.loading = false;

        match result {
            Ok(response) => {
                tracing::info!("Authenticated as {}", response.user.username);
                let session = Session::from(response);
                if let Some(store) = &self.session_store {
                    if let Err(e) = store.save(&session) {
                        tracing::warn!("Failed to save session: {}", e);
                    }
                }
                self.auth_state = AuthState::with_session(Some(session));
                self.password_input.clear();
                self.is_register_mode = false;
            }
            Err(e) => {
                tracing::warn!("Authentication failed: {}", e);
                self.auth_state.set_error(e.user_message());
            }
        }
    }

    fn check_operation_results(&mut self) {
        let mut finished = Vec::new();
        self.operation_results.retain(|(parent, rx)| match rx.try_recv() {
            Ok(result) => {
                finished.push((*parent, result));
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => false,
        });

        for (parent, result) in finished {
            let error = match result {
                Ok(node) => {
                    tracing::info!("Created operation {} = {}", node.id, node.result);
                    self.drafts.remove(&parent);
                    self.reload_after_submission();
                    continue;
                }
                Err(e) => {
                    self.handle_rejected_token(&e);
                    e.user_message()
                }
            };
            let draft = self.drafts.entry(parent).or_default();
            draft.submitting = false;
            draft.error = Some(error);
        }
    }

    /// Submit the login or register form
    pub fn submit_auth(&mut self) {
        let credentials = match credentials_from_input(&self.username_input, &self.password_input) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.auth_state.set_error(e);
                return;
            }
        };

        self.auth_state.loading = true;
        self.auth_state.clear_error();

        let api = self.api.clone();
        let register = self.is_register_mode;
        self.auth_result = Some(spawn_request(move || {
            if register {
                api.register_and_login(&credentials)
            } else {
                api.login(&credentials)
            }
        }));
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
    }

    /// Drop the session locally and on disk
    pub fn logout(&mut self) {
        if let Some(store) = &self.session_store {
            if let Err(e) = store.clear() {
                tracing::warn!("Failed to remove saved session: {}", e);
            }
        }
        self.auth_state = AuthState::new();
        self.password_input.clear();
        self.new_thread_error = None;
        self.drafts.clear();
        tracing::info!("Logged out");
    }

    /// A 401 on a write means the saved token is no longer accepted
    fn handle_rejected_token(&mut self, error: &ApiError) {
        if error.is_unauthorized() && self.auth_state.is_authenticated() {
            tracing::warn!("Token rejected by server, logging out");
            self.logout();
            self.auth_state.set_error("Session expired, please log in again");
        }
    }

    pub fn refresh_health(&mut self) {
        let api = self.api.clone();
        self.health = LoadState::Loading;
        self.health_result = Some(spawn_request(move || api.health()));
    }

    pub fn refresh_threads(&mut self) {
        let api = self.api.clone();
        self.threads = LoadState::Loading;
        self.threads_result = Some(spawn_request(move || api.list_threads()));
    }

    /// Select a thread and load its tree
    pub fn select_thread(&mut self, thread_id: Uuid) {
        if self.selected_thread != Some(thread_id) {
            self.drafts.clear();
        }
        self.selected_thread = Some(thread_id);
        self.refresh_tree();
    }

    pub fn refresh_tree(&mut self) {
        let Some(thread_id) = self.selected_thread else {
            return;
        };
        let api = self.api.clone();
        self.tree = LoadState::Loading;
        self.tree_result = Some(spawn_request(move || api.fetch_tree(thread_id)));
    }

    fn reload_after_submission(&mut self) {
        self.refresh_tree();
        self.refresh_threads();
    }

    pub fn submit_new_thread(&mut self) {
        if self.is_creating_thread() {
            return;
        }
        let Some(token) = self.auth_state.token().map(str::to_owned) else {
            self.new_thread_error = Some("Log in to start a thread".to_string());
            return;
        };
        let value = match parse_number(&self.new_thread_input) {
            Ok(value) => value,
            Err(e) => {
                self.new_thread_error = Some(e);
                return;
            }
        };

        self.new_thread_error = None;
        let api = self.api.clone();
        self.new_thread_result = Some(spawn_request(move || api.create_thread(&token, value)));
    }

    pub fn is_creating_thread(&self) -> bool {
        self.new_thread_result.is_some()
    }

    /// Submit the inline form attached to `parent` in the selected thread
    pub fn submit_operation(&mut self, parent: Option<Uuid>) {
        let Some(thread_id) = self.selected_thread else {
            return;
        };
        let token = self.auth_state.token().map(str::to_owned);
        let draft = self.drafts.entry(parent).or_default();

        let Some(token) = token else {
            draft.error = Some("Log in to add operations".to_string());
            return;
        };
        let right_operand = match parse_number(&draft.operand) {
            Ok(value) => value,
            Err(e) => {
                draft.error = Some(e);
                return;
            }
        };

        draft.error = None;
        draft.submitting = true;
        let request = NewOperation {
            thread_id,
            parent_id: parent,
            operation: draft.operation,
            right_operand,
        };

        let api = self.api.clone();
        let rx = spawn_request(move || api.create_operation(&token, &request));
        self.operation_results.push((parent, rx));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
