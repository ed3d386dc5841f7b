//! Web Mercator math for the coverage map.
//!
//! Coordinates are projected into "world pixels" (a 256px tile grid that
//! doubles per zoom level) and then shifted so the viewport center lands in
//! the middle of the map container.

use std::f64::consts::PI;
use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

use crate::models::MapSettings;

pub const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_78;
const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;
const TILE_SUBDOMAINS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

pub fn project(position: LatLng, zoom: u8) -> Point {
    let size = world_size(zoom);
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    Point {
        x: (position.lng + 180.0) / 360.0 * size,
        y: (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size,
    }
}

pub fn unproject(point: Point, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let n = PI * (1.0 - 2.0 * point.y / size);
    LatLng::new(n.sinh().atan().to_degrees(), point.x / size * 360.0 - 180.0)
}

pub fn meters_per_pixel(lat: f64, zoom: u8) -> f64 {
    EARTH_CIRCUMFERENCE_M * lat.to_radians().cos() / world_size(zoom)
}

/// Anything that can be pointed at a center and zoom level.
pub trait MapView {
    fn set_view(&mut self, center: LatLng, zoom: u8);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub key: String,
    pub url: String,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(settings: &MapSettings) -> Self {
        let mut viewport = Self {
            center: settings.center,
            zoom: settings.zoom,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            width: f64::from(settings.width),
            height: f64::from(settings.height),
        };
        viewport.set_view(settings.center, settings.zoom);
        viewport
    }

    #[cfg(test)]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[cfg(test)]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    fn origin(&self) -> Point {
        let center = project(self.center, self.zoom);
        Point {
            x: center.x - self.width / 2.0,
            y: center.y - self.height / 2.0,
        }
    }

    /// Container-relative pixel position of a coordinate.
    pub fn to_screen(&self, position: LatLng) -> Point {
        let origin = self.origin();
        let world = project(position, self.zoom);
        Point {
            x: world.x - origin.x,
            y: world.y - origin.y,
        }
    }

    pub fn radius_px(&self, at: LatLng, meters: f64) -> f64 {
        meters / meters_per_pixel(at.lat, self.zoom)
    }

    /// Moves the map content by a pointer drag of (dx, dy) pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let size = world_size(self.zoom);
        let center = project(self.center, self.zoom);
        let moved = Point {
            x: center.x - dx,
            y: (center.y - dy).clamp(0.0, size),
        };
        let mut next = unproject(moved, self.zoom);
        next.lng = (next.lng + 180.0).rem_euclid(360.0) - 180.0;
        self.center = next;
    }

    pub fn zoom_by(&mut self, delta: i8) {
        let zoom = i16::from(self.zoom) + i16::from(delta);
        self.zoom = zoom.clamp(i16::from(self.min_zoom), i16::from(self.max_zoom)) as u8;
    }

    /// Tiles covering the viewport, with their container-relative offsets.
    pub fn tiles(&self, template: &str) -> Vec<Tile> {
        let origin = self.origin();
        let count = 1i64 << self.zoom;
        let first_x = (origin.x / TILE_SIZE).floor() as i64;
        let last_x = ((origin.x + self.width) / TILE_SIZE).floor() as i64;
        let first_y = (origin.y / TILE_SIZE).floor() as i64;
        let last_y = ((origin.y + self.height) / TILE_SIZE).floor() as i64;

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            if ty < 0 || ty >= count {
                continue;
            }
            for tx in first_x..=last_x {
                let wrapped = tx.rem_euclid(count);
                let subdomain = TILE_SUBDOMAINS[((wrapped + ty) % 4) as usize];
                let url = template
                    .replace("{s}", subdomain)
                    .replace("{z}", &self.zoom.to_string())
                    .replace("{x}", &wrapped.to_string())
                    .replace("{y}", &ty.to_string())
                    .replace("{r}", "");
                tiles.push(Tile {
                    key: format!("{}/{}/{}", self.zoom, tx, ty),
                    url,
                    left: tx as f64 * TILE_SIZE - origin.x,
                    top: ty as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }
}

impl MapView for Viewport {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = center;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }
}

pub enum ViewAction {
    SetView { center: LatLng, zoom: u8 },
    PanBy { dx: f64, dy: f64 },
    ZoomBy(i8),
}

impl Reducible for Viewport {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::SetView { center, zoom } => next.set_view(center, zoom),
            ViewAction::PanBy { dx, dy } => next.pan_by(dx, dy),
            ViewAction::ZoomBy(delta) => next.zoom_by(delta),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
