//! Login/logout orchestration on top of the callback coordinator.

use crate::api::IdkClient;

use super::browser::open_browser;
use super::callback::{
    authorize_with, callback_addr, generate_state, redirect_uri, AuthSession, CallbackListener,
};
use super::error::AuthError;
use super::store::CredentialStore;

/// Run the browser login and persist the resulting token.
pub async fn login(client: &IdkClient, store: &dyn CredentialStore) -> Result<(), AuthError> {
    let listener = CallbackListener::bind(callback_addr()).await?;
    login_with(client, store, listener, open_browser).await
}

/// Login over `listener`, handing the authorization URL to `launch`.
///
/// The code is exchanged only after the callback's state matched; a failed
/// or cancelled callback never reaches the backend's token endpoint.
pub async fn login_with<L>(
    client: &IdkClient,
    store: &dyn CredentialStore,
    listener: CallbackListener,
    launch: L,
) -> Result<(), AuthError>
where
    L: FnOnce(&str) -> Result<(), AuthError>,
{
    let state = generate_state();
    let redirect = redirect_uri();
    let authorization_url = client.authorization_url(&state, &redirect).await?;
    tracing::debug!("authorization url received");

    let code = authorize_with(listener, &authorization_url, AuthSession::new(state), launch).await?;
    let token = client.exchange_code(&code, &redirect).await?;
    store.save(&token)?;
    tracing::info!("login completed");
    Ok(())
}

/// Forget the saved token.
pub fn logout(store: &dyn CredentialStore) -> Result<(), AuthError> {
    store.clear()
}

/// Saved token, or `NotLoggedIn`.
pub fn verify_login(store: &dyn CredentialStore) -> Result<String, AuthError> {
    store.load()
}
