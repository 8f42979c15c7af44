use std::num::NonZeroUsize;

use crate::{config, App};

/// Builds an [`App`] whose stores live in a fresh temp directory.
/// Keep the returned guard alive for as long as the app is in use.
pub async fn build_test_app() -> (App, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");

    let config = config::Server {
        ip: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        workers: NonZeroUsize::new(1).expect("nonzero"),
        data: config::Data {
            dir: dir.path().join("data"),
            uploads: dir.path().join("uploads"),
        },
    };

    let app = App::new(config).await.expect("build test app");
    (app, dir)
}
