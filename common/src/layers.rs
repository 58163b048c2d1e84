//! Map layer visibility flags, the selected-village state and the open
//! map popup.

use tracing::debug;

use crate::village::{LatLng, Village};

/// The fixed set of toggleable map layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKey {
    ForestCover,
    WaterBodies,
    FarmLands,
    FraClaims,
    Biodiversity,
}

impl LayerKey {
    pub const ALL: [LayerKey; 5] = [
        LayerKey::ForestCover,
        LayerKey::WaterBodies,
        LayerKey::FarmLands,
        LayerKey::FraClaims,
        LayerKey::Biodiversity,
    ];

    /// Dataset key, as used in the bundled JSON.
    pub fn key(self) -> &'static str {
        match self {
            LayerKey::ForestCover => "forestCover",
            LayerKey::WaterBodies => "waterBodies",
            LayerKey::FarmLands => "farmLands",
            LayerKey::FraClaims => "fraClaims",
            LayerKey::Biodiversity => "biodiversity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayerKey::ForestCover => "Forest Cover",
            LayerKey::WaterBodies => "Water Bodies",
            LayerKey::FarmLands => "Farm Lands",
            LayerKey::FraClaims => "FRA Claims",
            LayerKey::Biodiversity => "Biodiversity",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LayerKey::ForestCover => "🌲",
            LayerKey::WaterBodies => "🌊",
            LayerKey::FarmLands => "🌾",
            LayerKey::FraClaims => "📍",
            LayerKey::Biodiversity => "🍃",
        }
    }

    /// CSS accent class for the toggle row.
    pub fn accent(self) -> &'static str {
        match self {
            LayerKey::ForestCover => "accent-green",
            LayerKey::WaterBodies => "accent-blue",
            LayerKey::FarmLands => "accent-yellow",
            LayerKey::FraClaims => "accent-purple",
            LayerKey::Biodiversity => "accent-emerald",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == key)
    }
}

/// One boolean per [`LayerKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLayers {
    flags: [bool; 5],
}

impl Default for VisibleLayers {
    fn default() -> Self {
        let mut layers = Self { flags: [false; 5] };
        layers.set(LayerKey::ForestCover, true);
        layers.set(LayerKey::WaterBodies, true);
        layers.set(LayerKey::FraClaims, true);
        layers
    }
}

impl VisibleLayers {
    fn index(layer: LayerKey) -> usize {
        match layer {
            LayerKey::ForestCover => 0,
            LayerKey::WaterBodies => 1,
            LayerKey::FarmLands => 2,
            LayerKey::FraClaims => 3,
            LayerKey::Biodiversity => 4,
        }
    }

    pub fn is_visible(&self, layer: LayerKey) -> bool {
        self.flags[Self::index(layer)]
    }

    pub fn set(&mut self, layer: LayerKey, visible: bool) {
        self.flags[Self::index(layer)] = visible;
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, layer: LayerKey) -> bool {
        let flag = &mut self.flags[Self::index(layer)];
        *flag = !*flag;
        debug!(layer = layer.key(), visible = *flag, "layer toggled");
        *flag
    }

    pub fn visible_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// `(layer, visible)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerKey, bool)> + '_ {
        LayerKey::ALL.into_iter().map(|l| (l, self.is_visible(l)))
    }
}

/// The village whose detail panel is open, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSelection {
    selected: Option<Village>,
}

impl MapSelection {
    pub fn select(&mut self, village: &Village) {
        debug!(village = %village.name, "village selected");
        self.selected = Some(village.clone());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Village> {
        self.selected.as_ref()
    }
}

/// Popup opened by clicking an overlay or marker. It belongs to the layer
/// that drew the clicked feature.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPopup {
    pub layer: LayerKey,
    pub anchor: LatLng,
    pub title: String,
    pub lines: Vec<String>,
}

impl MapPopup {
    pub fn new(layer: LayerKey, anchor: LatLng, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self { layer, anchor, title: title.into(), lines }
    }

    pub fn for_village(v: &Village) -> Self {
        Self::new(
            LayerKey::FraClaims,
            v.coordinates,
            v.name.clone(),
            vec![
                format!("District: {}", v.district),
                format!("Status: {}", v.fra_status.label()),
                format!(
                    "Claims: {} total, {} approved, {} pending, {} rejected",
                    v.claims.total, v.claims.approved, v.claims.pending, v.claims.rejected
                ),
            ],
        )
    }
}

/// Close `popup` if the layer it came from is no longer visible. Returns
/// `true` when a popup was closed.
pub fn close_hidden_popup(popup: &mut Option<MapPopup>, layers: &VisibleLayers) -> bool {
    match popup {
        Some(p) if !layers.is_visible(p.layer) => {
            debug!(layer = p.layer.key(), "popup closed with its layer");
            *popup = None;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dataset;

    #[test]
    fn test_default_visibility() {
        let layers = VisibleLayers::default();
        assert!(layers.is_visible(LayerKey::ForestCover));
        assert!(layers.is_visible(LayerKey::WaterBodies));
        assert!(!layers.is_visible(LayerKey::FarmLands));
        assert!(layers.is_visible(LayerKey::FraClaims));
        assert!(!layers.is_visible(LayerKey::Biodiversity));
        assert_eq!(layers.visible_count(), 3);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for layer in LayerKey::ALL {
            let mut layers = VisibleLayers::default();
            let before = layers;
            assert_ne!(layers.toggle(layer), before.is_visible(layer));
            layers.toggle(layer);
            assert_eq!(layers, before);
        }
    }

    #[test]
    fn test_key_lookup() {
        for layer in LayerKey::ALL {
            assert_eq!(LayerKey::from_key(layer.key()), Some(layer));
        }
        assert_eq!(LayerKey::from_key("roads"), None);
    }

    #[test]
    fn test_selection_holds_clicked_village() {
        let ds = Dataset::bundled().unwrap();
        let clicked = &ds.map.villages[3];
        let mut sel = MapSelection::default();
        sel.select(clicked);
        assert_eq!(sel.selected(), Some(clicked));
        sel.select(&ds.map.villages[0]);
        assert_eq!(sel.selected().map(|v| v.id), Some(ds.map.villages[0].id));
        sel.clear();
        assert!(sel.selected().is_none());
    }

    #[test]
    fn test_popup_closes_with_its_layer() {
        let ds = Dataset::bundled().unwrap();
        let village = &ds.map.villages[0];
        let mut layers = VisibleLayers::default();
        let mut popup = Some(MapPopup::for_village(village));
        assert_eq!(popup.as_ref().map(|p| p.title.as_str()), Some(village.name.as_str()));

        layers.toggle(LayerKey::ForestCover);
        assert!(!close_hidden_popup(&mut popup, &layers));
        assert!(popup.is_some());

        layers.toggle(LayerKey::FraClaims);
        assert!(close_hidden_popup(&mut popup, &layers));
        assert!(popup.is_none());

        layers.toggle(LayerKey::FraClaims);
        assert!(!close_hidden_popup(&mut popup, &layers));
        assert!(popup.is_none());
    }
}
