//! Web-Mercator (EPSG:3857) placement of features and basemap tiles.
//!
//! World pixel space at zoom `z` is a square of `256 · 2^z` pixels with the
//! origin at the north-west corner (lon −180°, lat ≈ 85.05°).

use std::f64::consts::PI;

use crate::config::MapConfig;
use crate::village::LatLng;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude where the square Mercator world is cut off.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Deepest zoom level the public OpenStreetMap tile service serves.
pub const MAX_TILE_ZOOM: u8 = 19;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

/// Geographic position to world pixels.
pub fn project(p: LatLng, zoom: u8) -> Point {
    let size = world_size(zoom);
    let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (p.lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    Point::new(x, y)
}

/// World pixels back to a geographic position.
pub fn unproject(pt: Point, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lon = pt.x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * pt.y / size);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lon)
}

/// One basemap tile and where it sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub z: u8,
    /// Column, wrapped into `0..2^z`.
    pub x: u32,
    pub y: u32,
    /// Screen offset of the tile's top-left corner.
    pub left: f64,
    pub top: f64,
}

impl Tile {
    /// Fill a `{s}/{z}/{x}/{y}` URL template. The subdomain rotates over
    /// a/b/c by `(x + y) % 3`.
    pub fn url(&self, template: &str) -> String {
        let s = SUBDOMAINS[((self.x + self.y) % 3) as usize];
        template
            .replace("{s}", s)
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// The visible window onto the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Viewport {
    /// Zoom limits are capped at [`MAX_TILE_ZOOM`] even if the config was
    /// not validated.
    pub fn from_config(map: &MapConfig) -> Self {
        let max_zoom = map.max_zoom.min(MAX_TILE_ZOOM);
        let min_zoom = map.min_zoom.min(max_zoom);
        Self {
            center: map.center,
            zoom: map.zoom.clamp(min_zoom, max_zoom),
            width: map.width,
            height: map.height,
            min_zoom,
            max_zoom,
        }
    }

    /// World pixel shown at the top-left corner of the viewport.
    pub fn origin(&self) -> Point {
        let c = project(self.center, self.zoom);
        Point::new(c.x - self.width / 2.0, c.y - self.height / 2.0)
    }

    /// Geographic position to viewport pixels.
    pub fn to_screen(&self, p: LatLng) -> Point {
        let world = project(p, self.zoom);
        let origin = self.origin();
        Point::new(world.x - origin.x, world.y - origin.y)
    }

    /// SVG `points` attribute for a polygon or polyline.
    pub fn svg_points(&self, coords: &[LatLng]) -> String {
        coords
            .iter()
            .map(|c| {
                let p = self.to_screen(*c);
                format!("{:.1},{:.1}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Move the map so content follows a drag of `(dx, dy)` screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let size = world_size(self.zoom);
        let c = project(self.center, self.zoom);
        let y = (c.y - dy).clamp(0.0, size);
        let x = (c.x - dx).rem_euclid(size);
        self.center = unproject(Point::new(x, y), self.zoom);
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_add(1))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_sub(1))
    }

    /// Change zoom around the centre. Returns `false` if the level was
    /// already at the limit.
    pub fn set_zoom(&mut self, zoom: u8) -> bool {
        let zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.min_zoom
    }

    /// Every tile that intersects the viewport. Columns wrap around the
    /// antimeridian; rows outside the world are skipped.
    pub fn tiles(&self) -> Vec<Tile> {
        let origin = self.origin();
        let count = 1i64 << self.zoom;
        let first_col = (origin.x / TILE_SIZE).floor() as i64;
        let last_col = ((origin.x + self.width) / TILE_SIZE).ceil() as i64;
        let first_row = (origin.y / TILE_SIZE).floor().max(0.0) as i64;
        let last_row = (((origin.y + self.height) / TILE_SIZE).ceil() as i64).min(count);

        let mut tiles = Vec::new();
        for row in first_row..last_row {
            for col in first_col..last_col {
                tiles.push(Tile {
                    z: self.zoom,
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    left: col as f64 * TILE_SIZE - origin.x,
                    top: row as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn viewport() -> Viewport {
        Viewport::from_config(&MapConfig::default())
    }

    #[test]
    fn test_project_known_points() {
        let origin = project(LatLng::new(0.0, 0.0), 0);
        assert!(close(origin.x, 128.0, 1e-9) && close(origin.y, 128.0, 1e-9));

        let nw = project(LatLng::new(MAX_LATITUDE, -180.0), 1);
        assert!(close(nw.x, 0.0, 1e-9) && close(nw.y, 0.0, 1e-3));
    }

    #[test]
    fn test_unproject_inverts_project() {
        let p = LatLng::new(11.6052, 76.0829);
        let back = unproject(project(p, 9), 9);
        assert!(close(back.lat, p.lat, 1e-9) && close(back.lon, p.lon, 1e-9));
    }

    #[test]
    fn test_center_maps_to_middle() {
        let vp = viewport();
        let c = vp.to_screen(vp.center);
        assert!(close(c.x, vp.width / 2.0, 1e-9));
        assert!(close(c.y, vp.height / 2.0, 1e-9));
    }

    #[test]
    fn test_north_is_up() {
        let vp = viewport();
        let north = vp.to_screen(LatLng::new(12.0, 76.5));
        let south = vp.to_screen(LatLng::new(11.0, 76.5));
        assert!(north.y < south.y);
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let vp = viewport();
        let tiles = vp.tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.z == 9));
        assert!(tiles.iter().any(|t| t.left <= 0.0 && t.top <= 0.0));
        assert!(tiles
            .iter()
            .any(|t| t.left + TILE_SIZE >= vp.width && t.top + TILE_SIZE >= vp.height));
    }

    #[test]
    fn test_tile_columns_wrap() {
        let vp = Viewport {
            center: LatLng::new(0.0, 179.9),
            zoom: 2,
            width: 512.0,
            height: 256.0,
            min_zoom: 0,
            max_zoom: 18,
        };
        let cols: Vec<u32> = vp.tiles().iter().map(|t| t.x).collect();
        assert!(cols.contains(&0));
        assert!(cols.iter().all(|x| *x < 4));
    }

    #[test]
    fn test_tile_url_subdomain_rotation() {
        let template = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
        let tile = |x, y| Tile { z: 9, x, y, left: 0.0, top: 0.0 };
        assert_eq!(tile(364, 240).url(template), "https://b.tile.openstreetmap.org/9/364/240.png");
        assert!(tile(0, 0).url(template).starts_with("https://a."));
        assert!(tile(1, 1).url(template).starts_with("https://c."));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut vp = viewport();
        vp.zoom = vp.max_zoom;
        assert!(!vp.zoom_in());
        assert!(vp.zoom_out());
        assert_eq!(vp.zoom, vp.max_zoom - 1);
        assert!(!vp.set_zoom(vp.zoom));
    }

    #[test]
    fn test_unvalidated_deep_zoom_is_capped() {
        let map = MapConfig { zoom: 40, min_zoom: 35, max_zoom: 60, ..MapConfig::default() };
        let mut vp = Viewport::from_config(&map);
        assert_eq!((vp.zoom, vp.min_zoom, vp.max_zoom), (19, 19, 19));
        assert!(!vp.zoom_in());
        assert!(vp.tiles().iter().all(|t| t.z == MAX_TILE_ZOOM));
    }

    #[test]
    fn test_pan_moves_content_with_drag() {
        let mut vp = viewport();
        let before = vp.to_screen(LatLng::new(11.6, 76.1));
        vp.pan_by(40.0, -25.0);
        let after = vp.to_screen(LatLng::new(11.6, 76.1));
        assert!(close(after.x - before.x, 40.0, 1e-6));
        assert!(close(after.y - before.y, -25.0, 1e-6));
    }
}
