//! Unseen-message count query.

/// Errors returned while fetching the unseen count.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS setup error.
    #[error("TLS error: {0}")]
    Tls(#[from] crate::TlsConnectError),

    /// IMAP protocol error.
    #[error("IMAP error: {0}")]
    Imap(#[from] async_imap::error::Error),

    /// The server did not send the expected greeting.
    #[error("IMAP server sent no greeting")]
    MissingGreeting,

    /// The server rejected the credentials.
    #[error("login: {0}")]
    Login(#[source] async_imap::error::Error),

    /// The status query failed.
    #[error("status: {0}")]
    Status(#[source] async_imap::error::Error),

    /// The query did not finish in time.
    #[error("IMAP query did not finish within {after:?}")]
    Timeout {
        /// The limit that elapsed.
        after: std::time::Duration,
    },

    /// The status response carried no unseen count.
    #[error("status response for {folder} has no UNSEEN count")]
    MissingUnseen {
        /// The queried folder.
        folder: String,
    },
}

/// Connect, log in and query the number of unseen messages in the target folder.
///
/// The whole exchange is bounded by `timeout`.
pub async fn fetch_unseen(
    target: &crate::Target,
    timeout: std::time::Duration,
) -> Result<u32, FetchError> {
    tracing::debug!(
        imap_host = %target.server,
        imap_port = target.port,
        imap_folder = %target.folder,
        use_ssl = target.use_ssl,
        ?timeout,
        "checking IMAP folder"
    );

    tokio::time::timeout(timeout, connect_and_count(target))
        .await
        .map_err(|_elapsed| FetchError::Timeout { after: timeout })?
}

/// Connect over plaintext or implicit TLS and count unseen messages.
async fn connect_and_count(target: &crate::Target) -> Result<u32, FetchError> {
    let tcp_stream =
        tokio::net::TcpStream::connect((target.server.as_str(), target.port)).await?;

    if target.use_ssl {
        let tls_stream = crate::tls::connect(&target.server, tcp_stream).await?;
        login_and_count(async_imap::Client::new(tls_stream), target).await
    } else {
        login_and_count(async_imap::Client::new(tcp_stream), target).await
    }
}

/// Read the greeting, log in, count unseen messages and log out.
async fn login_and_count<S>(
    mut client: async_imap::Client<S>,
    target: &crate::Target,
) -> Result<u32, FetchError>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    client
        .read_response()
        .await?
        .ok_or(FetchError::MissingGreeting)?;

    let mut session = client
        .login(&target.username, target.password.as_str())
        .await
        .map_err(|(err, _client)| FetchError::Login(err))?;

    let unseen = unseen_count(&mut session, &target.folder).await;

    if let Err(error) = session.logout().await {
        tracing::debug!(%error, "IMAP logout failed");
    }

    unseen
}

/// Query the unseen count of a folder on an established session.
pub async fn unseen_count<S>(
    session: &mut async_imap::Session<S>,
    folder: &str,
) -> Result<u32, FetchError>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    let status = session
        .status(folder, "(UNSEEN)")
        .await
        .map_err(FetchError::Status)?;

    status.unseen.ok_or_else(|| FetchError::MissingUnseen {
        folder: folder.to_owned(),
    })
}
