//! Docker-backed IMAP integration tests.

use std::error::Error;
use std::time::Duration;

use polling_cache::{Event, Params, PollingCache, State, SystemClock};

const IMAP_USER: &str = "test";
const IMAP_PASSWORD: &str = "secret";

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetches_unseen_count() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let server = imap_integration::Greenmail::start(IMAP_USER, IMAP_PASSWORD).await?;
    let target = server.target("INBOX");

    let before = imap_integration::wait_until_ready(&target).await?;
    imap_integration::deliver(&target, "Integration Test").await?;
    let after = imap_checker::fetch_unseen(&target, imap_integration::QUERY_TIMEOUT).await?;

    assert_eq!(after, before + 1);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cache_picks_up_new_mail_after_interval() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let server = imap_integration::Greenmail::start(IMAP_USER, IMAP_PASSWORD).await?;
    let target = server.target("INBOX");
    let before = imap_integration::wait_until_ready(&target).await?;

    let (sender, mut refreshes) = tokio::sync::mpsc::unbounded_channel();
    let cache = PollingCache::new(Params {
        compute: email_segment::FetchUnseen {
            timeout: imap_integration::QUERY_TIMEOUT,
        },
        clock: SystemClock,
        notify: move |_key: &imap_checker::Target, event: Event<imap_checker::FetchError>| {
            if !matches!(event, Event::Started) {
                let _ = sender.send(format!("{event:?}"));
            }
        },
        interval: Duration::from_millis(200),
        runtime: tokio::runtime::Handle::current(),
    });

    assert_eq!(cache.request(&target), None);
    let event = tokio::time::timeout(Duration::from_secs(10), refreshes.recv()).await?;
    assert_eq!(event.as_deref(), Some("Updated"));
    assert_eq!(cache.request(&target), Some(State::Ready(before)));

    imap_integration::deliver(&target, "Polled").await?;
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(cache.request(&target), Some(State::Ready(before)));
    let event = tokio::time::timeout(Duration::from_secs(10), refreshes.recv()).await?;
    assert_eq!(event.as_deref(), Some("Updated"));
    assert_eq!(cache.request(&target), Some(State::Ready(before + 1)));

    Ok(())
}
