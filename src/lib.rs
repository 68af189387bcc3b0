//! reachmap builds multi-modal transit accessibility maps. it downloads
//! GTFS-style schedule feeds into a local cache, loads them into weighted
//! transit graphs, merges those graphs into a street network by snapping
//! stops onto their nearest street nodes, and derives isochrone polygons
//! (areas reachable within a travel time budget) from arbitrary center
//! points of the merged network.
pub mod algorithm;
pub mod cache;
pub mod isochrone;
pub mod network;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_ops;
