//! Browser login and secure token storage.
//!
//! Login opens the provider's authorization page, waits for the browser to
//! hit `http://localhost:7999/callback`, exchanges the code with the backend,
//! and stores the token encrypted under `~/.idk/credentials`.

mod browser;
mod callback;
mod crypto;
mod error;
mod login;
mod store;

pub use browser::{browser_launcher_for, open_browser};
pub use callback::{
    authorize, authorize_with, callback_addr, generate_state, redirect_uri, AuthSession, CallbackListener,
    CALLBACK_PATH, CALLBACK_PORT,
};
pub use error::AuthError;
pub use login::{login, login_with, logout, verify_login};
pub use store::{CredentialStore, FileCredentialStore};
