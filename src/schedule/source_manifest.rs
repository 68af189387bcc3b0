use std::collections::HashMap;

/// the default feed manifest: Madrid-area transit agencies published as
/// ArcGIS open-data items. each entry maps a logical dataset name onto the
/// URL of its GTFS-style archive.
pub fn default_sources() -> HashMap<String, String> {
    HashMap::from([
        (
            String::from("metro"),
            String::from(
                "https://www.arcgis.com/sharing/rest/content/items/5c7f2951962540d69ffe8f640d94c246/data",
            ),
        ),
        (
            String::from("cercanias"),
            String::from(
                "https://www.arcgis.com/sharing/rest/content/items/1a25440bf66f499bae2657ec7fb40144/data",
            ),
        ),
        (
            String::from("trams"),
            String::from(
                "https://www.arcgis.com/sharing/rest/content/items/aaed26cc0ff64b0c947ac0bc3e033196/data",
            ),
        ),
    ])
}
