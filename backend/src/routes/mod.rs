pub mod clusters;
pub mod insights;
pub mod meta;
pub mod recipes;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::insights::GET_INSIGHTS, "/api/insights");
        assert_eq!(super::recipes::GET_RECIPES, "/api/recipes");
        assert_eq!(super::clusters::GET_CLUSTERS, "/api/clusters");
    }
}
