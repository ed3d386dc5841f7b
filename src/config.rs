use std::collections::HashSet;

use log::{warn, Level};
use serde::Deserialize;

use crate::error::SiteError;
use crate::models::{
    CallToActionCopy, CoverageArea, InsuranceProvider, MapSettings, PricingTier, ServiceRadius,
    StatsTable,
};

const SITE_JSON: &str = include_str!("../config/site.json");

/// Deepest zoom the carto raster tiles are published for.
pub const MAX_SUPPORTED_ZOOM: u8 = 22;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // chatty while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Everything the landing page renders. Loaded once in `main`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand: String,
    pub call_to_action: CallToActionCopy,
    pub pricing: Vec<PricingTier>,
    pub insurance_providers: Vec<InsuranceProvider>,
    pub coverage: Vec<CoverageArea>,
    #[serde(default)]
    pub area_stats: StatsTable,
    pub service_radius: ServiceRadius,
    pub map: MapSettings,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.pricing.is_empty() {
            return Err(SiteError::invalid("at least one pricing tier is required"));
        }
        if let Some(tier) = self.pricing.iter().find(|t| t.features.is_empty()) {
            return Err(SiteError::invalid(format!(
                "pricing tier '{}' lists no features",
                tier.title
            )));
        }
        let mut seen = HashSet::new();
        if let Some(area) = self.coverage.iter().find(|area| !seen.insert(area.name.as_str())) {
            return Err(SiteError::invalid(format!(
                "coverage area '{}' is listed more than once",
                area.name
            )));
        }
        let map = &self.map;
        if map.max_zoom > MAX_SUPPORTED_ZOOM {
            return Err(SiteError::invalid(format!(
                "map max_zoom {} is above {}",
                map.max_zoom, MAX_SUPPORTED_ZOOM
            )));
        }
        if map.min_zoom > map.max_zoom {
            return Err(SiteError::invalid(format!(
                "map min_zoom {} is above max_zoom {}",
                map.min_zoom, map.max_zoom
            )));
        }
        if map.zoom < map.min_zoom || map.zoom > map.max_zoom {
            return Err(SiteError::invalid(format!(
                "map zoom {} is outside {}..={}",
                map.zoom, map.min_zoom, map.max_zoom
            )));
        }
        if map.width == 0 || map.height == 0 {
            return Err(SiteError::invalid("map width and height must be non-zero"));
        }
        if !(self.service_radius.radius_m > 0.0) {
            return Err(SiteError::invalid("service radius must be positive"));
        }
        Ok(())
    }

    /// Problems that are worth a log line but still render fine.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .coverage
            .iter()
            .filter(|area| !self.area_stats.contains(&area.name))
            .map(|area| format!("no statistics for coverage area '{}'", area.name))
            .collect();

        let popular = self.pricing.iter().filter(|t| t.popular).count();
        if popular > 1 {
            warnings.push(format!("{} pricing tiers are marked popular", popular));
        }
        warnings
    }

    pub fn find_area(&self, name: &str) -> Option<&CoverageArea> {
        self.coverage.iter().find(|area| area.name == name)
    }
}

pub fn parse(raw: &str) -> Result<SiteConfig, SiteError> {
    let config: SiteConfig = serde_json::from_str(raw)?;
    config.validate()?;
    for warning in config.warnings() {
        warn!("{}", warning);
    }
    Ok(config)
}

pub fn load() -> Result<SiteConfig, SiteError> {
    parse(SITE_JSON)
}
