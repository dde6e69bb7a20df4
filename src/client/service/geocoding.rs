use dioxus_logger::tracing;

use crate::{
    client::{
        error::ApiError,
        service::{ApiClient, Auth, Method, RequestBody, Transport},
    },
    model::api::GeocodeResult,
};

const RESULT_LIMIT: usize = 5;

/// Address lookup against the third-party geocoder.
pub struct GeocodingService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> GeocodingService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn search(&self, address: &str) -> Result<Vec<GeocodeResult>, ApiError> {
        let address = address.trim();
        if address.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/search?format=json&limit={}&q={}",
            self.client.config().geocoding_url,
            RESULT_LIMIT,
            urlencoding::encode(address)
        );

        // The session token never leaves for the third-party host
        self.client
            .send(Method::Get, url, RequestBody::Empty, Auth::Anonymous)
            .await?
            .json()
    }

    /// First hit with usable coordinates as `(latitude, longitude, display name)`.
    pub async fn locate(&self, address: &str) -> Result<Option<(f64, f64, String)>, ApiError> {
        let results = self.search(address).await?;
        let hit = results.into_iter().find_map(|result| {
            let (latitude, longitude) = result.coordinates()?;
            Some((latitude, longitude, result.display_name))
        });

        if hit.is_none() {
            tracing::debug!(address = %address, "No geocoding result");
        }

        Ok(hit)
    }
}
