//! Machine-derived encryption-at-rest for the stored token.
//!
//! A random data key encrypts the token; the data key itself is wrapped with
//! a key derived (scrypt) from machine identity, so copying the file to
//! another machine or user account leaves it unreadable.

use aes_gcm_siv::aead::{Aead, KeyInit};
use aes_gcm_siv::{Aes256GcmSiv, Nonce};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use rand::RngCore;
use scrypt::{scrypt, Params as ScryptParams};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::AuthError;

pub(crate) const CREDENTIALS_VERSION: u32 = 1;
const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;
const MACHINE_KEY_CONTEXT: &str = "idk-credentials-machine-kek-v1";
const RELOGIN_HINT: &str = "Run `idk --logout` and `idk --login` again.";

/// On-disk JSON envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct EncryptedCredentials {
    #[serde(default)]
    pub(crate) version: u32,
    #[serde(default)]
    pub(crate) salt: String,
    #[serde(default)]
    pub(crate) wrapped_key_nonce: String,
    #[serde(default)]
    pub(crate) wrapped_key: String,
    #[serde(default)]
    pub(crate) token_nonce: String,
    #[serde(default)]
    pub(crate) token_ciphertext: String,
}

pub(crate) fn encrypt_token(token: &str) -> Result<EncryptedCredentials, AuthError> {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let kek = derive_machine_kek(&salt)?;

    let mut dek = [0u8; KEY_LEN];
    rand::thread_rng().fill_bytes(&mut dek);
    let (wrapped_key_nonce, wrapped_key) = encrypt_blob(&kek, &dek)?;
    let (token_nonce, token_ciphertext) = encrypt_blob(&dek, token.as_bytes())?;

    Ok(EncryptedCredentials {
        version: CREDENTIALS_VERSION,
        salt: B64.encode(salt),
        wrapped_key_nonce: B64.encode(wrapped_key_nonce),
        wrapped_key: B64.encode(wrapped_key),
        token_nonce: B64.encode(token_nonce),
        token_ciphertext: B64.encode(token_ciphertext),
    })
}

pub(crate) fn decrypt_token(stored: &EncryptedCredentials) -> Result<String, AuthError> {
    let salt = decode_fixed::<SALT_LEN>(&stored.salt, "salt")?;
    let kek = derive_machine_kek(&salt)?;
    let wrapped_nonce = decode_fixed::<NONCE_LEN>(&stored.wrapped_key_nonce, "wrapped_key_nonce")?;
    let wrapped_key = decode_bytes(&stored.wrapped_key, "wrapped_key")?;
    let dek_raw = decrypt_blob(&kek, &wrapped_nonce, &wrapped_key).map_err(|_| {
        AuthError::Invalid(format!(
            "failed to decrypt saved credentials (machine identity may have changed). {RELOGIN_HINT}"
        ))
    })?;
    if dek_raw.len() != KEY_LEN {
        return Err(AuthError::Invalid(format!(
            "invalid key material in saved credentials. {RELOGIN_HINT}"
        )));
    }
    let mut dek = [0u8; KEY_LEN];
    dek.copy_from_slice(&dek_raw);

    let token_nonce = decode_fixed::<NONCE_LEN>(&stored.token_nonce, "token_nonce")?;
    let ciphertext = decode_bytes(&stored.token_ciphertext, "token_ciphertext")?;
    let plaintext = decrypt_blob(&dek, &token_nonce, &ciphertext).map_err(|_| {
        AuthError::Invalid(format!("failed to decrypt saved token. {RELOGIN_HINT}"))
    })?;
    String::from_utf8(plaintext)
        .map_err(|_| AuthError::Invalid(format!("saved token is not valid UTF-8. {RELOGIN_HINT}")))
}

fn derive_machine_kek(salt: &[u8; SALT_LEN]) -> Result<[u8; KEY_LEN], AuthError> {
    let mut material = machine_secret_material();
    material.extend_from_slice(salt);

    let mut hashed = Sha256::new();
    hashed.update(MACHINE_KEY_CONTEXT.as_bytes());
    hashed.update(&material);
    let seed = hashed.finalize();

    let params = ScryptParams::recommended();
    let mut key = [0u8; KEY_LEN];
    scrypt(&seed, salt, &params, &mut key)
        .map_err(|err| AuthError::Invalid(format!("failed to derive machine key: {err}")))?;
    Ok(key)
}

fn machine_secret_material() -> Vec<u8> {
    let hostname = hostname::get()
        .map(|value| value.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown-host".to_string());
    let username = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown-user".to_string());
    let home = dirs::home_dir()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let machine_id = read_machine_id().unwrap_or_default();
    format!(
        "os={}|host={hostname}|user={username}|home={home}|machine_id={machine_id}",
        std::env::consts::OS,
    )
    .into_bytes()
}

fn read_machine_id() -> Option<String> {
    ["/etc/machine-id", "/var/lib/dbus/machine-id", "/etc/hostid"]
        .iter()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn encrypt_blob(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<(Vec<u8>, Vec<u8>), AuthError> {
    let cipher = Aes256GcmSiv::new_from_slice(key)
        .map_err(|_| AuthError::Invalid("invalid encryption key length".to_string()))?;
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| AuthError::Invalid("failed to encrypt credentials".to_string()))?;
    Ok((nonce.to_vec(), ciphertext))
}

fn decrypt_blob(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, AuthError> {
    let cipher = Aes256GcmSiv::new_from_slice(key)
        .map_err(|_| AuthError::Invalid("invalid encryption key length".to_string()))?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| AuthError::Invalid("failed to decrypt credentials".to_string()))
}

fn decode_bytes(value: &str, field: &str) -> Result<Vec<u8>, AuthError> {
    B64.decode(value).map_err(|err| {
        AuthError::Invalid(format!(
            "failed to decode credentials field `{field}`: {err}"
        ))
    })
}

fn decode_fixed<const N: usize>(value: &str, field: &str) -> Result<[u8; N], AuthError> {
    let bytes = decode_bytes(value, field)?;
    let out: [u8; N] = bytes.as_slice().try_into().map_err(|_| {
        AuthError::Invalid(format!(
            "invalid credentials field `{field}` length: expected {N}, got {}",
            bytes.len()
        ))
    })?;
    Ok(out)
}
