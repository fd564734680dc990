//! idk: turn plain-English prompts into confirmed shell actions.
//!
//! A remote backend interprets the prompt and answers with a typed action
//! (command, script, directory change). This crate owns everything local:
//! confirming with the user, running commands, saving scripts, installing
//! aliases, resolving directories from shell history, and the browser login
//! that obtains the backend token.
//!
//! # Quick start
//!
//! ```no_run
//! use idk::api::IdkClient;
//! use idk::auth::FileCredentialStore;
//! use idk::dispatch::{Dispatcher, LocalEnv};
//! use idk::execution::{InteractiveRunner, SystemClipboard};
//! use idk::tui::{Renderer, TerminalConsole};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let client = IdkClient::new("https://backend.example", Duration::from_secs(60));
//! let runner = InteractiveRunner::detect().unwrap();
//! let console = TerminalConsole::new(Renderer::new(true));
//! let clipboard = SystemClipboard;
//! let store = FileCredentialStore::new(idk::config::default_credentials_path().unwrap());
//! let env = LocalEnv::detect().unwrap();
//! let outcome = Dispatcher::new(&client, &runner, &console, &clipboard, &store, env)
//!     .handle_prompt("show disk usage", None, None)
//!     .await;
//! println!("{:?}", outcome.outcome);
//! # }
//! ```

pub mod alias;
pub mod api;
pub mod auth;
pub mod build_info;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod resolve;
pub mod script;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
