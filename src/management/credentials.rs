use std::{io::Error, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::warning;

#[derive(Debug)]
pub enum CredentialError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for CredentialError {
    fn from(err: Error) -> Self {
        CredentialError::IoError(err)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Persists the Spotify client id and secret as JSON in the data directory.
///
/// A missing cache file yields empty credentials; a malformed one is logged
/// and also treated as empty, so the operator can recover by saving again.
pub struct CredentialManager {
    credentials: ClientCredentials,
}

impl CredentialManager {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            credentials: ClientCredentials {
                client_id: Some(client_id),
                client_secret: Some(client_secret),
            },
        }
    }

    pub async fn load() -> Self {
        let path = Self::get_path();
        match async_fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(credentials) => Self { credentials },
                Err(_) => {
                    warning!("Credential cache is malformed. Run spladl auth again.");
                    Self {
                        credentials: ClientCredentials::default(),
                    }
                }
            },
            Err(_) => Self {
                credentials: ClientCredentials::default(),
            },
        }
    }

    pub async fn persist(&self) -> Result<(), CredentialError> {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.credentials)
            .map_err(|e| CredentialError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| CredentialError::IoError(e))
    }

    /// Returns the cached pair, or None unless both halves are present.
    pub fn pair(&self) -> Option<(String, String)> {
        match (
            self.credentials.client_id.clone(),
            self.credentials.client_secret.clone(),
        ) {
            (Some(id), Some(secret)) => Some((id, secret)),
            _ => None,
        }
    }

    fn get_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spladl/cache/credentials.json");
        path
    }
}
