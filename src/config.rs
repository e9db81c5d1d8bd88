use dotenvy::var;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> Self {
        Self {
            db_config: Arc::new(DbConfig::new()),
            server_ip: var("ROSTRUM_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        }
    }

    pub fn with_db_file(path: impl Into<PathBuf>) -> Self {
        Self {
            db_config: Arc::new(DbConfig { path: path.into() }),
            server_ip: "127.0.0.1:8080".to_string(),
        }
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: PathBuf,
}

impl DbConfig {
    pub fn new() -> Self {
        let path = var("ROSTRUM_DB_PATH").unwrap_or_else(|_| "instance/evaluations.db".to_string());

        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn db_file(&self) -> &Path {
        &self.path
    }

    //the directory holding the db file, which might not exist yet
    pub fn instance_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|dir| !dir.as_os_str().is_empty())
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new()
    }
}
