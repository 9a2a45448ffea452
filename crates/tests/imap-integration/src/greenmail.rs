//! GreenMail container helpers.

use testcontainers::{
    GenericImage, ImageExt as _, core::IntoContainerPort as _, runners::AsyncRunner as _,
};

/// A running GreenMail server with one user.
pub struct Greenmail {
    /// The container; stopped on drop.
    pub container: testcontainers::ContainerAsync<GenericImage>,

    /// Host to connect to.
    pub host: String,

    /// Mapped plaintext IMAP port.
    pub port: u16,

    /// The configured user.
    pub user: String,

    /// The configured password.
    pub password: String,
}

impl Greenmail {
    /// Starts a GreenMail container configured with the provided credentials.
    pub async fn start(user: &str, password: &str) -> Result<Self, testcontainers::TestcontainersError> {
        let container = GenericImage::new("greenmail/standalone", "latest")
            .with_exposed_port(crate::IMAP_PORT.tcp())
            .with_wait_for(testcontainers::core::WaitFor::message_on_stdout(
                "Starting GreenMail API server at",
            ))
            .with_env_var("GREENMAIL_USERS", format!("{user}:{password}"))
            .start()
            .await?;

        let host = container.get_host().await?.to_string();
        let port = container.get_host_port_ipv4(crate::IMAP_PORT).await?;

        Ok(Self {
            container,
            host,
            port,
            user: user.to_owned(),
            password: password.to_owned(),
        })
    }

    /// The plaintext polling target for a folder of the configured user.
    pub fn target(&self, folder: &str) -> imap_checker::Target {
        imap_checker::Target {
            username: self.user.clone(),
            password: imap_checker::Password::new(self.password.as_str()),
            server: self.host.clone(),
            port: self.port,
            folder: folder.to_owned(),
            use_ssl: false,
        }
    }
}
