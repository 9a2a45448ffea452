//! Main entrypoint for the status line printer.

mod line;

/// Print the status line on every tick until interrupted.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let loaded = config_load::with_default_env_var().await?;
    tracing::info!(config_path = %loaded.path.display(), "loaded config");

    let settings = email_segment::Settings::from_config(&loaded.config)?;
    let cache = email_segment::unseen_cache(&settings, tokio::runtime::Handle::current());

    let mut segments = Vec::new();
    for (index, config) in loaded.config.segments.iter().enumerate() {
        match email_segment::EmailImapAlert::new(config, cache.clone()) {
            Ok(segment) => segments.push(segment),
            Err(error) => {
                let name = config.name.as_deref().unwrap_or("<unnamed>");
                tracing::warn!(index, segment = %name, %error, "mail segment disabled");
            }
        }
    }
    drop(loaded);

    let mut ticker = tokio::time::interval(settings.tick);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let units = segments.iter().filter_map(|segment| segment.render()).flatten();
                println!("{}", line::format(units));
            }
            result = tokio::signal::ctrl_c() => {
                result?;
                break;
            }
        }
    }

    tracing::info!(message = "Exiting...");

    Ok(())
}
