//! CLI entry point for idk.

mod cli;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use idk::api::IdkClient;
use idk::auth::{login, logout, verify_login, AuthError, FileCredentialStore};
use idk::config::{default_credentials_path, load_config, Config};
use idk::dispatch::{DispatchOutcome, Dispatcher, LocalEnv, Outcome};
use idk::execution::{CommandRunner, InteractiveRunner, SystemClipboard};
use idk::tui::{Renderer, TerminalConsole};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const UPDATE_COMMAND: &str = "curl -o- https://idk-cli.github.io/scripts/install.sh | bash";
const LOG_ENV_VAR: &str = "IDK_LOG";
const HINT_LOGIN: &str = "Command: `idk --login`";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing(args.verbose);

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    // Debug log lines would be overdrawn by the spinner.
    Renderer::set_progress_enabled(!args.verbose);
    let code = run(&args, &config, &renderer).await;
    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(args: &cli::Args, config: &Config, renderer: &Renderer) -> i32 {
    let runner = match InteractiveRunner::detect() {
        Ok(runner) => runner,
        Err(e) => {
            renderer.error(&e.to_string());
            return 1;
        }
    };

    if args.update {
        return match runner.run(UPDATE_COMMAND).await {
            Ok(()) => 0,
            Err(e) => {
                renderer.error(&format!("update failed: {e}"));
                1
            }
        };
    }

    let Some(credentials_path) = default_credentials_path() else {
        renderer.error("unable to resolve home directory for saved credentials");
        return 1;
    };
    let store = FileCredentialStore::new(credentials_path);

    if args.login {
        let Some(client) = backend_client(config, renderer) else {
            return 1;
        };
        renderer.notice("Opening your browser to sign in...");
        return match login(&client, &store).await {
            Ok(()) => {
                renderer.success("Login Successful");
                renderer.hint("Try: `idk <your prompt>`");
                renderer.hint("Learn more: `idk -h`");
                0
            }
            Err(AuthError::Cancelled) => {
                renderer.notice("Login cancelled");
                1
            }
            Err(e) => {
                tracing::debug!("login failed: {e:?}");
                renderer.error(&format!("Failed to sign in. Please try again! ({e})"));
                1
            }
        };
    }

    if args.logout {
        return match logout(&store) {
            Ok(()) => {
                renderer.success("Logout Successful");
                0
            }
            Err(e) => {
                renderer.error(&format!("logout failed: {e}"));
                1
            }
        };
    }

    let readme = args.readme.as_deref().map(Path::new);
    if readme.is_some_and(|path| !path.exists()) {
        renderer.error("Invalid README file path");
        return 1;
    }

    match verify_login(&store) {
        Ok(_) => {}
        Err(AuthError::NotLoggedIn) => {
            renderer.error("You are not logged in. Please login first");
            renderer.hint(HINT_LOGIN);
            return 1;
        }
        Err(e) => {
            renderer.error(&e.to_string());
            renderer.hint(HINT_LOGIN);
            return 1;
        }
    }

    let Some(client) = backend_client(config, renderer) else {
        return 1;
    };
    let env = match LocalEnv::detect() {
        Ok(env) => env,
        Err(e) => {
            renderer.error(&e.to_string());
            return 1;
        }
    };
    let console = TerminalConsole::new(*renderer);
    let clipboard = SystemClipboard;

    let outcome = Dispatcher::new(&client, &runner, &console, &clipboard, &store, env)
        .handle_prompt(&args.prompt_text(), readme, args.alias.as_deref())
        .await;
    render_outcome(renderer, &outcome);
    if outcome.is_failure() {
        1
    } else {
        0
    }
}

fn backend_client(config: &Config, renderer: &Renderer) -> Option<IdkClient> {
    if config.backend.base_url.is_empty() {
        renderer.error(
            "No backend URL configured. Set backend.base_url in ~/.idk/config.toml or the IDK_BACKEND_URL env var.",
        );
        return None;
    }
    Some(IdkClient::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.timeout_secs),
    ))
}

fn render_outcome(renderer: &Renderer, outcome: &DispatchOutcome) {
    if let Some(message) = outcome.message.as_deref() {
        match outcome.outcome {
            Outcome::Printed => renderer.raw(message),
            Outcome::Failed => renderer.error(message),
            Outcome::Cancelled => renderer.notice(message),
            _ => renderer.success(message),
        }
    }
    if let Some(hint) = outcome.hint {
        renderer.hint(hint);
    }
}
