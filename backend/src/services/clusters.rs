//! Fixed food clusters served by `/api/clusters`.

use crate::routes::clusters::{Cluster, ClusterList};

const CLUSTERS: [(u32, &str, [&str; 3]); 3] = [
    (1, "High Protein", ["Chicken", "Eggs", "Greek Yogurt"]),
    (2, "Low Carb", ["Avocado", "Salmon", "Cheese"]),
    (3, "Balanced Meals", ["Oats", "Rice", "Beans"]),
];

pub fn get_clusters() -> ClusterList {
    let clusters = CLUSTERS
        .iter()
        .map(|(cluster_id, name, foods)| Cluster {
            cluster_id: *cluster_id,
            name: (*name).to_string(),
            foods: foods.iter().map(|f| (*f).to_string()).collect(),
        })
        .collect();
    ClusterList { clusters }
}
