//! Static overlay geometry drawn over the basemap.

use serde::{Deserialize, Serialize};

use crate::village::{LatLng, Village};

/// Contents of the bundled map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub villages: Vec<Village>,
    pub map_layers: MapLayers,
}

/// The three geometric overlays. Biodiversity and FRA claims are drawn from
/// village records instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayers {
    pub forest_cover: MapLayer<ForestArea>,
    pub water_bodies: MapLayer<WaterBody>,
    pub farm_lands: MapLayer<FarmLand>,
}

/// A named, coloured collection of features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer<T> {
    #[serde(default)]
    pub name: String,
    pub color: String,
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestArea {
    pub coordinates: Vec<LatLng>,
    /// Canopy density in percent.
    pub density: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBody {
    pub name: String,
    pub coordinates: Vec<LatLng>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmLand {
    pub coordinates: Vec<LatLng>,
    pub crop_type: String,
}
