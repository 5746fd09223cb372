use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    spotify::{CatalogError, CatalogSource, auth},
    types::{PlaylistPage, Token},
    warning,
};

// Only the album identity fields are requested per track.
const PAGE_FIELDS: &str = "items(track(album(name,artists(name),external_urls))),total";

/// Authenticated catalog client backed by the Spotify Web API.
///
/// Constructed once per credential pair and passed by reference to the
/// resolver. The access token is re-requested when it nears expiry.
pub struct CatalogClient {
    client_id: String,
    client_secret: String,
    token: Token,
}

impl CatalogClient {
    /// Builds a client by exchanging the credentials for a first token.
    pub async fn connect(client_id: String, client_secret: String) -> Result<Self, String> {
        let token = auth::request_token(&client_id, &client_secret).await?;
        Ok(Self {
            client_id,
            client_secret,
            token,
        })
    }

    async fn get_valid_token(&mut self) -> Result<String, CatalogError> {
        if self.is_expired() {
            self.token = auth::request_token(&self.client_id, &self.client_secret)
                .await
                .map_err(CatalogError::Auth)?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        // saturate: the token endpoint may hand out lifetimes under the buffer
        now >= (self.token.obtained_at + self.token.expires_in).saturating_sub(240)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    /// Fetches one page of a playlist's tracks.
    ///
    /// Rate limiting is handled by honoring the `Retry-After` header for
    /// delays up to 120 seconds; 502 responses are retried after a short
    /// pause. Other failures are propagated to the caller.
    async fn playlist_page(
        &mut self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<PlaylistPage, CatalogError> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?offset={offset}&limit={limit}&fields={fields}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            offset = offset,
            limit = limit,
            fields = PAGE_FIELDS,
        );

        loop {
            let token = self.get_valid_token().await?;
            let client = Client::new();
            let response = client.get(&api_url).bearer_auth(&token).send().await;

            let response = match response {
                Ok(resp) => {
                    if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                        if let Some(retry_after) = resp.headers().get("retry-after") {
                            let retry_after = retry_after
                                .to_str()
                                .unwrap_or("0")
                                .parse::<u64>()
                                .unwrap_or(0);
                            if retry_after <= 120 {
                                sleep(Duration::from_secs(retry_after)).await;
                                continue; // retry
                            }
                            warning!(
                                "Retry after has reached an abnormal high of {} seconds.",
                                retry_after
                            );
                        }
                        return Err(CatalogError::Status(StatusCode::TOO_MANY_REQUESTS));
                    }

                    match resp.error_for_status() {
                        Ok(valid_response) => valid_response,
                        Err(err) => {
                            if let Some(status) = err.status() {
                                if status == StatusCode::BAD_GATEWAY {
                                    sleep(Duration::from_secs(10)).await;
                                    continue; // retry
                                }
                            }
                            return Err(CatalogError::Http(err)); // propagate other errors
                        }
                    }
                }
                Err(err) => {
                    return Err(CatalogError::Http(err));
                } // network or reqwest error
            };

            let page = response
                .json::<PlaylistPage>()
                .await
                .map_err(CatalogError::Http)?;
            return Ok(page);
        }
    }
}
