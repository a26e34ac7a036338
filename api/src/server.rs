//! HTTP server handle: dataset, router and bind address in one value.
//!
//! The web binary builds a [`DashboardServer`] and runs it; an external
//! process manager can do the same, or take [`DashboardServer::router`] and
//! mount it into a larger axum application.

use std::net::SocketAddr;
use std::sync::Arc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use thiserror::Error;

use crate::config::{ConfigError, ServerConfig};
use crate::dataset::DatasetError;
use crate::model::ProductionTable;
use crate::store::{self, DatasetSlot};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("dataset generation failed: {0}")]
    Dataset(#[from] DatasetError),

    #[error("a production dataset is already installed in this process")]
    AlreadyInstalled,

    #[error("unable to load the application shell: {0}")]
    Shell(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

pub struct DashboardServer {
    router: axum::Router,
    addr: SocketAddr,
    dataset: Arc<ProductionTable>,
}

impl DashboardServer {
    /// Builds the dataset, installs it for the server functions and mounts
    /// `app` on a fresh router. Fails before anything is bound, including
    /// when another server already installed its dataset in this process.
    pub fn new(config: &ServerConfig, app: fn() -> Element) -> Result<Self, ServerError> {
        let dataset = Arc::new(config.dataset_spec().build()?);
        info!(
            rows = dataset.len(),
            start = %config.start,
            end = %config.end,
            "production dataset generated"
        );
        let dataset = claim(store::global(), dataset)?;

        let shell = ServeConfig::new().map_err(|err| ServerError::Shell(format!("{err:?}")))?;
        let router = axum::Router::new().serve_dioxus_application(shell, app);

        Ok(Self {
            router,
            addr: config.addr(),
            dataset,
        })
    }

    /// Reads [`ServerConfig`] from the environment and builds the server.
    pub fn from_env(app: fn() -> Element) -> Result<Self, ServerError> {
        let config = ServerConfig::from_env()?;
        Self::new(&config, app)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn router(&self) -> axum::Router {
        self.router.clone()
    }

    pub fn dataset(&self) -> &Arc<ProductionTable> {
        &self.dataset
    }

    pub async fn run(self) -> Result<(), ServerError> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr,
                source,
            })?;
        info!(addr = %self.addr, "dashboard listening");
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(ServerError::Serve)
    }
}

/// Installs `dataset` into `slot`, so the handle always holds the table the
/// server functions serve.
fn claim(
    slot: &DatasetSlot,
    dataset: Arc<ProductionTable>,
) -> Result<Arc<ProductionTable>, ServerError> {
    if slot.install(dataset.clone()) {
        Ok(dataset)
    } else {
        Err(ServerError::AlreadyInstalled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn second_server_cannot_replace_the_served_dataset() {
        let slot = DatasetSlot::new();
        let full = Arc::new(ServerConfig::default().dataset_spec().build().unwrap());
        let single_day = Arc::new(
            ServerConfig {
                start: date!(2024 - 10 - 05),
                end: date!(2024 - 10 - 05),
                ..ServerConfig::default()
            }
            .dataset_spec()
            .build()
            .unwrap(),
        );

        let held = claim(&slot, full.clone()).unwrap();
        assert!(Arc::ptr_eq(&held, &full));

        let err = claim(&slot, single_day).unwrap_err();
        assert!(matches!(err, ServerError::AlreadyInstalled));
        assert_eq!(slot.get().unwrap().len(), 459);
    }
}
