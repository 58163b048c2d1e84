//! Reusable view components.

pub mod chart_widget;
pub mod filter_sidebar;
pub mod header_bar;
pub mod info_panel;
pub mod insight_card;
pub mod layer_toggle_group;
pub mod loading_skeleton;
pub mod map_container;
pub mod recorder_widget;
pub mod stat_card;
pub mod upload_drawer;
