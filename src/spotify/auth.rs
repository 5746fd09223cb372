use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{config, types::Token};

/// Exchanges the client id and secret for an access token.
///
/// Runs the client-credentials grant against the token endpoint with HTTP
/// Basic authentication. The returned token carries its issue time so
/// callers can decide when to re-request.
pub async fn request_token(client_id: &str, client_secret: &str) -> Result<Token, String> {
    let client = Client::new();
    let basic = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let res = res.error_for_status().map_err(|e| e.to_string())?;
    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"].as_str().unwrap_or_default().to_string();
    if access_token.is_empty() {
        return Err("token endpoint returned no access_token".to_string());
    }

    Ok(Token {
        access_token,
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
