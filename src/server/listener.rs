use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{Instrument, error, info, info_span};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::pool::WorkerPool;
use crate::site::Site;

/// Binds the configured address and serves forever.
///
/// Only returns on a bind failure, after the pool has been shut down.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let pool = WorkerPool::new(cfg.server.workers)?;
    let addr = cfg.server.listen_addr();

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            pool.shutdown().await;
            return Err(e).with_context(|| format!("failed to bind {}", addr));
        }
    };

    info!(
        addr = %addr,
        workers = pool.size(),
        public_root = %cfg.site.public_root.display(),
        "Listening"
    );

    let site = Arc::new(Site::from_config(&cfg.site));
    serve(listener, pool, site).await
}

/// Accept loop. Each accepted socket becomes one job on `pool`; accepting
/// never waits for a job to finish, and accept errors do not stop the loop.
pub async fn serve(listener: TcpListener, pool: WorkerPool, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!(%peer, "Accepted connection");

        let conn = Connection::new(socket, Arc::clone(&site));
        let span = info_span!("connection", %peer);

        if let Err(e) = pool.submit(conn.run().instrument(span)) {
            error!(%peer, error = %e, "Failed to dispatch connection");
        }
    }
}
