//! Geocoding capability interface.
//!
//! The core holds no dependency on a specific provider: the session talks to
//! a `Geocoder`, and a lookup with no result degrades to a synthesized
//! placeholder rather than failing the operation.

use async_trait::async_trait;
use rand::Rng;
use serde::Deserialize;

/// A resolved location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Provider-agnostic geocoding interface.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve free text to a location, or `None` when the provider has no
    /// answer.
    async fn search(&self, query: &str) -> Option<Location>;

    /// Describe a coordinate pair as text.
    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> String;
}

/// Offline geocoder backed by a small table of well-known cities.
///
/// Unmatched queries synthesize a placeholder location near the equator,
/// so a search never comes back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGeocoder;

const KNOWN_PLACES: [(&str, f64, f64, &str); 6] = [
    ("new york", 40.7128, -74.006, "New York, NY, USA"),
    ("los angeles", 34.0522, -118.2437, "Los Angeles, CA, USA"),
    ("chicago", 41.8781, -87.6298, "Chicago, IL, USA"),
    ("london", 51.5074, -0.1278, "London, UK"),
    ("paris", 48.8566, 2.3522, "Paris, France"),
    ("tokyo", 35.6762, 139.6503, "Tokyo, Japan"),
];

#[async_trait]
impl Geocoder for SimulatedGeocoder {
    async fn search(&self, query: &str) -> Option<Location> {
        let needle = query.to_lowercase();
        if let Some((_, lat, lng, address)) =
            KNOWN_PLACES.iter().find(|(key, ..)| key.contains(&needle))
        {
            return Some(Location {
                latitude: *lat,
                longitude: *lng,
                address: (*address).to_string(),
            });
        }

        let mut rng = rand::thread_rng();
        Some(Location {
            latitude: rng.gen_range(-5.0..5.0),
            longitude: rng.gen_range(-10.0..10.0),
            address: format!("{query} (Simulated Location)"),
        })
    }

    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> String {
        format!("Dropped Pin ({latitude:.6}, {longitude:.6})")
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocoder backed by the OpenStreetMap Nominatim API.
///
/// Transport failures and empty result sets both resolve to `None`; the
/// caller decides how to degrade.
pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self::with_base_url("https://nominatim.openstreetmap.org")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Option<Location> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("addressdetails", "1"),
                ("limit", "5"),
            ])
            .send()
            .await;

        let places: Vec<NominatimPlace> = match response {
            Ok(resp) => resp.json().await.ok()?,
            Err(e) => {
                tracing::warn!("Geocoding search failed: {}", e);
                return None;
            }
        };

        let place = places.into_iter().next()?;
        Some(Location {
            latitude: place.lat.parse().ok()?,
            longitude: place.lon.parse().ok()?,
            address: place.display_name,
        })
    }

    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> String {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json"),
                ("lat", latitude.to_string().as_str()),
                ("lon", longitude.to_string().as_str()),
            ])
            .send()
            .await;

        match response {
            Ok(resp) => match resp.json::<NominatimPlace>().await {
                Ok(place) => place.display_name,
                Err(_) => format!("({latitude:.6}, {longitude:.6})"),
            },
            Err(e) => {
                tracing::warn!("Reverse geocoding failed: {}", e);
                format!("({latitude:.6}, {longitude:.6})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_search_matches_known_cities() {
        let geo = SimulatedGeocoder;
        let location = geo.search("london").await.unwrap();
        assert_eq!(location.latitude, 51.5074);
        assert_eq!(location.address, "London, UK");

        // Partial query still matches.
        let location = geo.search("tok").await.unwrap();
        assert_eq!(location.address, "Tokyo, Japan");
    }

    #[tokio::test]
    async fn simulated_search_synthesizes_a_fallback() {
        let geo = SimulatedGeocoder;
        let location = geo.search("atlantis").await.unwrap();
        assert!(location.address.ends_with("(Simulated Location)"));
        assert!((-5.0..5.0).contains(&location.latitude));
        assert!((-10.0..10.0).contains(&location.longitude));
    }

    #[tokio::test]
    async fn simulated_reverse_lookup_formats_coordinates() {
        let geo = SimulatedGeocoder;
        let text = geo.reverse_lookup(40.7128, -74.006).await;
        assert_eq!(text, "Dropped Pin (40.712800, -74.006000)");
    }
}
