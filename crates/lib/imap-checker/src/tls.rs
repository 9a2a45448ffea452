//! Implicit TLS setup with the system root certificates.

/// TLS stream type used for IMAP connections.
pub(crate) type TlsStream = tokio_rustls::client::TlsStream<tokio::net::TcpStream>;

/// Errors returned while preparing or establishing a TLS connection.
#[derive(Debug, thiserror::Error)]
pub enum TlsConnectError {
    /// Failed to load system root certificates.
    #[error("failed to load system root certificates: {0}")]
    RootCerts(#[from] rustls_native_certs::Error),

    /// The server name is not valid for TLS verification.
    #[error("invalid DNS name: {0}")]
    InvalidDnsName(String),

    /// TLS handshake or I/O error.
    #[error("TLS I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wrap a TCP stream in TLS, verifying the server as `server`.
pub(crate) async fn connect(
    server: &str,
    tcp_stream: tokio::net::TcpStream,
) -> Result<TlsStream, TlsConnectError> {
    let server_name = server_name(server)?;

    let mut root_store = rustls::RootCertStore::empty();
    let rustls_native_certs::CertificateResult { certs, errors, .. } =
        rustls_native_certs::load_native_certs();
    if certs.is_empty()
        && let Some(err) = errors.into_iter().next()
    {
        return Err(TlsConnectError::RootCerts(err));
    }
    let (added, ignored) = root_store.add_parsable_certificates(certs);
    tracing::trace!(added, ignored, "loaded system root certificates");

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();
    let connector = tokio_rustls::TlsConnector::from(std::sync::Arc::new(config));
    let tls_stream = connector.connect(server_name, tcp_stream).await?;
    Ok(tls_stream)
}

/// Parse the name the server certificate is verified against.
fn server_name(
    server: &str,
) -> Result<rustls::pki_types::ServerName<'static>, TlsConnectError> {
    rustls::pki_types::ServerName::try_from(server.to_owned())
        .map_err(|_| TlsConnectError::InvalidDnsName(server.to_owned()))
}
