//! One-shot browser callback listener.
//!
//! The listener serves a single `/callback` route. The first request carrying
//! a verdict hands it to the waiting login flow through a oneshot channel;
//! later hits still get a page but never a second delivery.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

use super::browser::open_browser;
use super::error::AuthError;

pub const CALLBACK_PORT: u16 = 7999;
pub const CALLBACK_PATH: &str = "/callback";
const STATE_LEN: usize = 16;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

const PAGE_SUCCESS: &str = "Authentication successful. You can close this window";
const PAGE_CANCELLED: &str = "Authentication was cancelled. You can close this window";
const PAGE_FAILED: &str = "Authentication failed. Please try again";

/// Redirect target registered with the authorization provider.
pub fn redirect_uri() -> String {
    format!("http://localhost:{CALLBACK_PORT}{CALLBACK_PATH}")
}

/// Loopback address the listener binds by default.
pub fn callback_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], CALLBACK_PORT))
}

/// Random anti-forgery state for one login attempt.
pub fn generate_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LEN)
        .map(char::from)
        .collect()
}

/// One login attempt: the expected state plus the pending result.
///
/// Consumed by [`CallbackListener::wait_for_code`], so a session can be read
/// at most once.
pub struct AuthSession {
    pending: oneshot::Receiver<Option<String>>,
    handoff: Arc<CallbackHandoff>,
}

impl AuthSession {
    pub fn new(expected_state: impl Into<String>) -> Self {
        let (sender, pending) = oneshot::channel();
        Self {
            pending,
            handoff: Arc::new(CallbackHandoff {
                expected_state: expected_state.into(),
                sender: Mutex::new(Some(sender)),
            }),
        }
    }

    pub fn expected_state(&self) -> &str {
        &self.handoff.expected_state
    }
}

/// Callback-side half of the session, shared with the route handler.
struct CallbackHandoff {
    expected_state: String,
    sender: Mutex<Option<oneshot::Sender<Option<String>>>>,
}

impl CallbackHandoff {
    /// Deliver `result` if nothing was delivered yet.
    async fn deliver(&self, result: Option<String>) -> bool {
        let Some(sender) = self.sender.lock().await.take() else {
            tracing::debug!("duplicate callback ignored");
            return false;
        };
        sender.send(result).is_ok()
    }
}

#[derive(Debug, Default, Deserialize)]
struct CallbackQuery {
    state: Option<String>,
    code: Option<String>,
}

/// What a single callback request means for the login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CallbackVerdict {
    Code(String),
    Cancelled,
    StateMismatch,
}

impl CallbackVerdict {
    fn evaluate(expected_state: &str, query: CallbackQuery) -> Self {
        if query.state.as_deref() != Some(expected_state) {
            return Self::StateMismatch;
        }
        match query.code {
            Some(code) if !code.is_empty() => Self::Code(code),
            _ => Self::Cancelled,
        }
    }

    fn page(&self) -> &'static str {
        match self {
            Self::Code(_) => PAGE_SUCCESS,
            Self::Cancelled => PAGE_CANCELLED,
            Self::StateMismatch => PAGE_FAILED,
        }
    }

    fn into_result(self) -> Option<String> {
        match self {
            Self::Code(code) => Some(code),
            Self::Cancelled | Self::StateMismatch => None,
        }
    }
}

async fn handle_callback(
    State(handoff): State<Arc<CallbackHandoff>>,
    Query(query): Query<CallbackQuery>,
) -> Html<&'static str> {
    let verdict = CallbackVerdict::evaluate(&handoff.expected_state, query);
    tracing::info!(
        accepted = matches!(verdict, CallbackVerdict::Code(_)),
        "login callback received"
    );
    let page = verdict.page();
    handoff.deliver(verdict.into_result()).await;
    Html(page)
}

/// Bound callback socket, not yet serving.
pub struct CallbackListener {
    listener: TcpListener,
    addr: SocketAddr,
}

impl CallbackListener {
    /// Bind `addr`; a second concurrent login on the same port fails here.
    pub async fn bind(addr: SocketAddr) -> Result<Self, AuthError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AuthError::Bind { addr, source })?;
        let addr = listener.local_addr()?;
        tracing::debug!(%addr, "callback listener bound");
        Ok(Self { listener, addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until the session receives a result or the user presses Ctrl-C.
    pub async fn wait_for_code(self, session: AuthSession) -> Result<String, AuthError> {
        self.wait_for_code_until(session, ctrl_c()).await
    }

    /// Serve until the session receives a result or `cancel` resolves.
    ///
    /// The wait itself is unbounded; only listener shutdown is time-limited.
    pub async fn wait_for_code_until<F>(
        self,
        session: AuthSession,
        cancel: F,
    ) -> Result<String, AuthError>
    where
        F: Future<Output = ()>,
    {
        let AuthSession { pending, handoff } = session;
        let app = Router::new()
            .route(CALLBACK_PATH, get(handle_callback))
            .with_state(handoff);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let mut server = tokio::spawn(async move {
            axum::serve(self.listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        let outcome = tokio::select! {
            received = pending => match received {
                Ok(Some(code)) => Ok(code),
                Ok(None) => Err(AuthError::AuthenticationFailed),
                Err(_) => Err(AuthError::ListenerClosed),
            },
            () = cancel => Err(AuthError::Cancelled),
        };

        let _ = shutdown_tx.send(());
        match tokio::time::timeout(SHUTDOWN_GRACE, &mut server).await {
            Ok(Ok(Ok(()))) => tracing::debug!("callback listener stopped"),
            Ok(Ok(Err(err))) => tracing::warn!("callback listener failed: {err}"),
            Ok(Err(err)) => tracing::warn!("callback listener task failed: {err}"),
            Err(_) => {
                tracing::warn!("callback listener did not stop in time; aborting");
                server.abort();
            }
        }
        outcome
    }
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: wait forever instead of cancelling.
        std::future::pending::<()>().await;
    }
}

/// Bind the callback listener, open the browser, and wait for the code.
///
/// The listener is bound before the browser opens so a fast redirect cannot
/// arrive before anything is listening.
pub async fn authorize(authorization_url: &str, session: AuthSession) -> Result<String, AuthError> {
    let listener = CallbackListener::bind(callback_addr()).await?;
    authorize_with(listener, authorization_url, session, open_browser).await
}

/// [`authorize`] on an already bound listener with a caller-chosen launcher.
pub async fn authorize_with<L>(
    listener: CallbackListener,
    authorization_url: &str,
    session: AuthSession,
    launch: L,
) -> Result<String, AuthError>
where
    L: FnOnce(&str) -> Result<(), AuthError>,
{
    launch(authorization_url)?;
    listener.wait_for_code(session).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(state: Option<&str>, code: Option<&str>) -> CallbackQuery {
        CallbackQuery {
            state: state.map(str::to_string),
            code: code.map(str::to_string),
        }
    }

    // Verifies the verdict table: mismatch, missing code, and success.
    #[test]
    fn verdicts_follow_state_then_code() {
        assert_eq!(
            CallbackVerdict::evaluate("Y", query(Some("X"), Some("c"))),
            CallbackVerdict::StateMismatch
        );
        assert_eq!(
            CallbackVerdict::evaluate("Y", query(None, Some("c"))),
            CallbackVerdict::StateMismatch
        );
        assert_eq!(
            CallbackVerdict::evaluate("Y", query(Some("Y"), Some(""))),
            CallbackVerdict::Cancelled
        );
        assert_eq!(
            CallbackVerdict::evaluate("Y", query(Some("Y"), None)),
            CallbackVerdict::Cancelled
        );
        assert_eq!(
            CallbackVerdict::evaluate("Y", query(Some("Y"), Some("abc"))),
            CallbackVerdict::Code("abc".into())
        );
    }

    // Verifies generated state is unguessable-length alphanumeric.
    #[test]
    fn generated_state_is_alphanumeric() {
        let state = generate_state();
        assert_eq!(state.len(), STATE_LEN);
        assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(state, generate_state());
    }

    #[test]
    fn redirect_uri_uses_fixed_port() {
        assert_eq!(redirect_uri(), "http://localhost:7999/callback");
    }

    // Verifies a second delivery never reaches the receiver.
    #[tokio::test]
    async fn handoff_delivers_exactly_once() {
        let session = AuthSession::new("s");
        let handoff = Arc::clone(&session.handoff);
        assert!(handoff.deliver(Some("first".into())).await);
        assert!(!handoff.deliver(Some("second".into())).await);
        assert_eq!(session.pending.await.unwrap(), Some("first".to_string()));
    }

    // Verifies cancellation returns promptly and releases the port.
    #[tokio::test]
    async fn cancel_stops_waiting_and_frees_port() {
        let listener = CallbackListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind");
        let addr = listener.local_addr();
        let err = listener
            .wait_for_code_until(AuthSession::new("s"), async {})
            .await
            .expect_err("cancelled");
        assert!(matches!(err, AuthError::Cancelled));
        CallbackListener::bind(addr).await.expect("port released");
    }

    // Verifies a busy port is reported as a bind error, not a panic.
    #[tokio::test]
    async fn second_bind_on_same_port_fails() {
        let first = CallbackListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind");
        let err = CallbackListener::bind(first.local_addr())
            .await
            .err()
            .expect("second bind fails");
        assert!(matches!(err, AuthError::Bind { .. }));
    }
}
