use std::collections::HashMap;

use serde::Deserialize;

use crate::map::geo::LatLng;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PricingTier {
    pub title: String,
    pub price: String,
    pub duration: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InsuranceProvider {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CoverageArea {
    pub name: String,
    pub coordinates: LatLng,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AreaStatistics {
    pub population: String,
    pub nurse_count: u32,
    pub waitlist_count: u32,
}

/// Per-area statistics keyed by coverage area name.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct StatsTable(HashMap<String, AreaStatistics>);

impl StatsTable {
    pub fn get(&self, area: &str) -> Option<&AreaStatistics> {
        self.0.get(area)
    }

    pub fn contains(&self, area: &str) -> bool {
        self.0.contains_key(area)
    }
}

impl FromIterator<(String, AreaStatistics)> for StatsTable {
    fn from_iter<T: IntoIterator<Item = (String, AreaStatistics)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The highlighted service circle and what its tooltip says.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceRadius {
    pub center: LatLng,
    pub radius_m: f64,
    pub label: String,
    pub population: String,
    pub nurse_count: u32,
}

fn default_min_zoom() -> u8 {
    3
}

fn default_max_zoom() -> u8 {
    18
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub center: LatLng,
    pub zoom: u8,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: u8,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    pub width: u32,
    pub height: u32,
    pub tile_url: String,
    #[serde(default)]
    pub attribution: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CallToActionCopy {
    pub badge: String,
    pub heading: String,
    pub body: String,
    pub contact_email: String,
    #[serde(default)]
    pub contact_subject: String,
}
