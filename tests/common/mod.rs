//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use freeswitch_xml_config::config::ServiceConfig;
use freeswitch_xml_config::http::{HttpServer, CONFIGURATION_PATH};
use freeswitch_xml_config::lifecycle::Shutdown;

/// A server bound to an ephemeral port. Shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, CONFIGURATION_PATH)
    }

    /// POST a form the way `mod_xml_curl` does and return the body.
    pub async fn request(&self, hostname: &str, key_value: &str) -> String {
        let res = self
            .client
            .post(self.url())
            .form(&[
                ("hostname", hostname),
                ("section", "configuration"),
                ("tag_name", "configuration"),
                ("key_name", "name"),
                ("key_value", key_value),
            ])
            .send()
            .await
            .expect("server unreachable");
        assert_eq!(res.status(), 200);
        res.text().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger("test finished");
    }
}

pub fn repo_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Start a server over the given data and template directories.
pub async fn start_server(module_data_directory: &Path, templates_directory: &Path) -> TestServer {
    let mut config = ServiceConfig::default();
    config.freeswitch.module_data_directory = module_data_directory.to_path_buf();
    config.http.templates_directory = templates_directory.to_path_buf();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    TestServer {
        addr,
        client,
        shutdown,
    }
}

/// Start a server over the shipped `moduledata/` and `templates/`.
pub async fn start_default_server() -> TestServer {
    start_server(&repo_path("moduledata"), &repo_path("templates")).await
}
