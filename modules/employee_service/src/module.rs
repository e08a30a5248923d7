//! Module construction: connection pool, migrations, repository, service, client

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::EmployeeApi;
use crate::domain::Service;
use crate::infra::storage::{self, repositories::SeaOrmEmployeeRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Employee service module
///
/// Owns the connection pool and the wiring built on top of it. Callers
/// construct it explicitly and pass the client around.
pub struct EmployeeServiceModule {
    config: Config,
    db: Arc<DatabaseConnection>,
    client: Arc<NativeClient>,
}

impl EmployeeServiceModule {
    pub async fn init(config: Config) -> Result<Self> {
        config.validate()?;

        let db = Arc::new(storage::connect(&config.database).await?);
        if config.run_migrations {
            storage::migrate(&db).await?;
        }

        // Build repository
        let repo = Arc::new(SeaOrmEmployeeRepository::new(db.clone()));

        // Build domain service
        let service = Arc::new(Service::new(repo, config.batch_size));

        let client = Arc::new(NativeClient::new(service));

        tracing::info!(batch_size = config.batch_size, "Employee service initialized");
        Ok(Self {
            config,
            db,
            client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn db(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }

    pub fn client(&self) -> Arc<dyn EmployeeApi> {
        self.client.clone()
    }
}
