use crate::args::Cli;
use arbor_cli::{CLIConfiguration, Result};
use arbor_link::{ArborLinkClient, AuthProvider};
use std::time::Duration;

/// Build the link client from CLI arguments and configuration.
///
/// Server URL precedence: --url > --host/--port > config file > localhost.
/// Auth precedence: --token > config token > --username/--password >
/// config username/password > none.
pub fn build_client(cli: &Cli, config: &CLIConfiguration) -> Result<ArborLinkClient> {
    let server = config.resolved_server();

    let server_url = match (cli.url.clone(), cli.host.clone()) {
        (Some(url), _) => url,
        (None, Some(host)) => format!("http://{}:{}", host, cli.port),
        (None, None) => server
            .url
            .clone()
            .unwrap_or_else(|| "http://localhost:8080".to_string()),
    };

    let auth = resolve_auth(cli, config);
    if cli.verbose {
        eprintln!("Connecting to {}", server_url);
    }

    let timeout = cli.timeout.unwrap_or(server.timeout);
    let max_retries = cli.max_retries.unwrap_or(server.max_retries);

    let client = ArborLinkClient::builder()
        .base_url(server_url)
        .timeout(Duration::from_secs(timeout))
        .connect_timeout(Duration::from_secs(cli.connection_timeout))
        .auth(auth)
        .max_retries(max_retries)
        .build()?;

    Ok(client)
}

fn resolve_auth(cli: &Cli, config: &CLIConfiguration) -> AuthProvider {
    if let Some(token) = cli
        .token
        .clone()
        .or_else(|| config.auth.as_ref().and_then(|a| a.token.clone()))
    {
        return AuthProvider::jwt_token(token);
    }

    if let (Some(username), Some(password)) = (cli.username.clone(), cli.password.clone()) {
        return AuthProvider::basic_auth(username, password);
    }

    if let Some(auth) = config.auth.as_ref() {
        if let (Some(username), Some(password)) = (auth.username.clone(), auth.password.clone()) {
            return AuthProvider::basic_auth(username, password);
        }
    }

    AuthProvider::none()
}
