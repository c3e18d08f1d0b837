//! Application metadata (`VCAP_APPLICATION`)

use serde::{Deserialize, Serialize};

/// The subset of `VCAP_APPLICATION` used for startup diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VcapApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_index: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_uris: Vec<String>,
}
