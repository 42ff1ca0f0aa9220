use serde::{Deserialize, Serialize};

pub const GET_CLUSTERS: &str = "/api/clusters";

/// A named group of foods sharing a nutritional trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub cluster_id: u32,
    pub name: String,
    pub foods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterList {
    pub clusters: Vec<Cluster>,
}
