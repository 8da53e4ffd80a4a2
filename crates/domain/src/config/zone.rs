use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Flat zone file, one `<name> <class> <type> <value>` record per line.
    #[serde(default = "default_zone_file")]
    pub file: String,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            file: default_zone_file(),
        }
    }
}

fn default_zone_file() -> String {
    "zone.db".to_string()
}
