use crate::errors::CardError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub directory: Directory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    /// Number of sample users seeded into the in-memory card directory.
    #[serde(default = "default_sample_users")]
    pub sample_users: u32,
}

fn default_sample_users() -> u32 {
    3
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            sample_users: default_sample_users(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> Result<Self, CardError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", Server::default().host)?
            .set_default("server.port", Server::default().port)?
            .set_default(
                "directory.sample_users",
                Directory::default().sample_users,
            )?;

        // Optional file
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment overrides: CARDGATE__SERVER__PORT=9090, etc.
        builder =
            builder.add_source(config::Environment::with_prefix("CARDGATE").separator("__"));

        let cfg = builder.build()?;
        let s: Settings = cfg.try_deserialize()?;
        Ok(s)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
