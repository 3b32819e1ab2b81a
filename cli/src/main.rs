mod terminal;

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront::config::{ClientConfig, ConfigError};
use storefront::http::HttpIdentityClient;
use storefront::{IdentityClient, IdentityError, LoginController, LoginOutcome, Navigator, Route, SubmitError};
use tracing_subscriber::EnvFilter;

use terminal::{FileAuthStore, SessionFileError, TerminalNavigator, TerminalNotifier};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not build HTTP client: {0}")]
    Identity(#[from] IdentityError),
    #[error("login not completed: {0}")]
    Submit(#[from] SubmitError),
    #[error("missing password; pass --password or --password-stdin")]
    MissingPassword,
    #[error("failed to read password from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("login failed")]
    LoginFailed,
    #[error("no stored session at {0}")]
    NoSession(PathBuf),
    #[error(transparent)]
    SessionFile(#[from] SessionFileError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "storefront-cli", about = "Storefront login from the terminal")]
struct Cli {
    /// Overrides `STOREFRONT_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides `STOREFRONT_LOGIN_PATH`.
    #[arg(long)]
    login_path: Option<String>,

    #[arg(long, env = "STOREFRONT_SESSION_FILE", default_value = ".storefront-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session.
    Login(LoginArgs),
    /// Show where to reset a forgotten password.
    ForgotPassword,
    /// Print the stored session.
    Session,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long, conflicts_with = "password_stdin")]
    password: Option<String>,

    #[arg(long, default_value_t = false, help = "Read the password from the first line of stdin")]
    password_stdin: bool,

    #[arg(long, help = "Page to land on after login")]
    redirect: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let store = FileAuthStore::new(cli.session_file);

    match cli.command {
        Command::Login(args) => run_login(HttpIdentityClient::new(&config)?, &config, store, args).await,
        Command::ForgotPassword => {
            TerminalNavigator::new(&config).navigate(Route::ForgotPassword.path());
            Ok(())
        }
        Command::Session => run_session(&store),
    }
}

/// Environment (or defaults) first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let base = ClientConfig::from_env()?;
    let base_url = cli.base_url.as_deref().unwrap_or(&base.base_url);
    let login_path = cli.login_path.as_deref().unwrap_or(&base.login_path);
    Ok(ClientConfig::new(base_url, login_path, base.timeouts)?)
}

async fn run_login<C: IdentityClient>(
    client: C,
    config: &ClientConfig,
    store: FileAuthStore,
    args: LoginArgs,
) -> Result<(), CliError> {
    let password = match (args.password, args.password_stdin) {
        (Some(password), _) => password,
        (None, true) => read_password_line(io::stdin().lock())?,
        (None, false) => return Err(CliError::MissingPassword),
    };

    let controller = LoginController::new(client, TerminalNotifier, store, TerminalNavigator::new(config))
        .with_redirect(args.redirect.as_deref());
    controller.set_email(args.email);
    controller.set_password(password);

    match controller.submit().await? {
        LoginOutcome::Succeeded(_) => Ok(()),
        LoginOutcome::Rejected(_) | LoginOutcome::TransportFailed => Err(CliError::LoginFailed),
    }
}

fn run_session(store: &FileAuthStore) -> Result<(), CliError> {
    let session = store.load()?.ok_or_else(|| CliError::NoSession(store.path().to_path_buf()))?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

fn read_password_line(mut reader: impl BufRead) -> Result<String, CliError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(CliError::Stdin)?;
    let password = line.trim_end_matches(['\r', '\n']).to_owned();
    if password.is_empty() {
        return Err(CliError::MissingPassword);
    }
    Ok(password)
}
