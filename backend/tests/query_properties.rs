//! Property tests for the query engine.

use proptest::prelude::*;

use nutri_insights::models::{FilterSpec, Recipe};
use nutri_insights::services::query::{matches, query};

const DIETS: [&str; 4] = ["vegan", "keto", "paleo", "Vegetarian"];

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    (0i64..1000, "[a-zA-Z ]{0,12}", 0usize..DIETS.len(), 0.0f64..900.0, 0.0f64..80.0).prop_map(
        |(id, name, diet, calories, protein)| {
            Recipe::new(id, name, DIETS[diet], calories, protein)
        },
    )
}

fn filter_strategy() -> impl Strategy<Value = FilterSpec> {
    (
        prop_oneof![Just("all".to_string()), Just("VEGAN".to_string()), Just("keto".to_string())],
        "[a-z]{0,2}",
        1usize..6,
        1usize..6,
    )
        .prop_map(|(diet, q, page, page_size)| {
            FilterSpec::default()
                .with_diet_type(&diet)
                .with_text_query(&q)
                .with_page(page, page_size)
        })
}

proptest! {
    #[test]
    fn total_is_independent_of_pagination(
        records in prop::collection::vec(recipe_strategy(), 0..30),
        filter in filter_strategy(),
        other_page in 1usize..10,
        other_size in 1usize..10,
    ) {
        let expected = records.iter().filter(|r| matches(*r, &filter)).count();
        let first = query(&records, &filter);
        let second = query(&records, &filter.clone().with_page(other_page, other_size));
        prop_assert_eq!(first.total, expected);
        prop_assert_eq!(second.total, expected);
    }

    #[test]
    fn page_past_the_end_is_empty(
        records in prop::collection::vec(recipe_strategy(), 0..30),
        filter in filter_strategy(),
        extra in 1usize..5,
    ) {
        let total = query(&records, &filter).total;
        let last_page = total.div_ceil(filter.page_size);
        let beyond = filter.clone().with_page(last_page + extra, filter.page_size);
        prop_assert!(query(&records, &beyond).items.is_empty());
    }

    #[test]
    fn items_fit_the_window_and_keep_order(
        records in prop::collection::vec(recipe_strategy(), 0..30),
        filter in filter_strategy(),
    ) {
        let result = query(&records, &filter);
        prop_assert!(result.items.len() <= filter.page_size);

        let matched: Vec<&Recipe> = records.iter().filter(|r| matches(*r, &filter)).collect();
        let offset = (filter.page - 1) * filter.page_size;
        for (i, item) in result.items.iter().enumerate() {
            prop_assert_eq!(item, matched[offset + i]);
        }
    }

    #[test]
    fn query_does_not_mutate_input(
        records in prop::collection::vec(recipe_strategy(), 0..20),
        filter in filter_strategy(),
    ) {
        let before = records.clone();
        let _ = query(&records, &filter);
        prop_assert_eq!(records, before);
    }
}
