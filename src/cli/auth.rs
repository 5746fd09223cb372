use crate::{error, info, management::CredentialManager, success, warning};

/// Saves the client credential pair, or reports the cache state when no
/// pair is given.
pub async fn auth(client_id: Option<String>, client_secret: Option<String>) {
    match (client_id, client_secret) {
        (Some(id), Some(secret)) => {
            let manager = CredentialManager::new(id, secret);
            match manager.persist().await {
                Ok(_) => success!("Credentials saved."),
                Err(e) => error!("Cannot save credentials. Err: {:?}", e),
            }
        }
        _ => {
            let manager = CredentialManager::load().await;
            if manager.pair().is_some() {
                info!("Client credentials are cached. Run spladl resolve <playlist> next.");
            } else {
                warning!(
                    "No cached credentials. Run spladl auth --client-id <id> --client-secret <secret>."
                );
            }
        }
    }
}
