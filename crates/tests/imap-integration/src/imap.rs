//! IMAP helpers.

use std::time::Duration;

use tokio::net::TcpStream;

/// Limit for one unseen count query against the container.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Waits until the server answers an unseen count query for the target.
pub async fn wait_until_ready(
    target: &imap_checker::Target,
) -> Result<u32, imap_checker::FetchError> {
    let mut attempts = 60u8;
    loop {
        let err = match imap_checker::fetch_unseen(target, QUERY_TIMEOUT).await {
            Ok(unseen) => return Ok(unseen),
            Err(err) => err,
        };

        let Some(attempts_left) = attempts.checked_sub(1) else {
            return Err(err);
        };

        attempts = attempts_left;
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}

/// Appends an unseen message to the target folder.
pub async fn deliver(
    target: &imap_checker::Target,
    subject: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stream = TcpStream::connect((target.server.as_str(), target.port)).await?;
    let mut client = async_imap::Client::new(stream);
    let Some(_) = client.read_response().await? else {
        return Err("missing IMAP greeting".into());
    };

    let mut session = client
        .login(&target.username, target.password.as_str())
        .await
        .map_err(|(err, _)| err)?;

    let message = format!("Subject: {subject}\r\n\r\nHello from tests.\r\n");
    session
        .append(&target.folder, None, None, message.as_bytes())
        .await?;
    session.logout().await?;

    Ok(())
}
