//! Property-based tests for ranking and recommendation.
//!
//! Catalogs are generated with realistic review aggregates: every review
//! scores each category within `0..=REVIEW_SCORE_MAX` and declares at most one
//! purpose per counter.

use std::cmp::Ordering;

use proptest::prelude::*;

use car_pick_api::models::{
    Category, Model, PriceRange, Purpose, RecommendationRequest, REVIEW_SCORE_MAX,
};
use car_pick_api::services::{rank, recommend, recommendation::recommendation_order};

// ============================================================================
// STRATEGIES
// ============================================================================

/// A model with a placeholder id. Names come from a small pool to force ties.
fn model_strategy() -> impl Strategy<Value = Model> {
    (0i64..20)
        .prop_flat_map(|reviews| {
            (
                prop::sample::select(vec!["Avante", "K5", "Sonata", "Casper"]),
                0i32..6000,
                2i32..10,
                prop::collection::vec(0..=REVIEW_SCORE_MAX * reviews, 5),
                prop::collection::vec(0..=reviews, 5),
                Just(reviews),
            )
        })
        .prop_map(|(name, price, people, sums, counts, reviews)| Model {
            id: 0,
            name: name.to_string(),
            description: String::new(),
            information_url: format!("https://cars.example.com/{}", name),
            price,
            people,
            mpg_sum: sums[0],
            safe_sum: sums[1],
            space_sum: sums[2],
            design_sum: sums[3],
            fun_sum: sums[4],
            work_count: counts[0],
            drive_count: counts[1],
            long_count: counts[2],
            kids_count: counts[3],
            travel_count: counts[4],
            review_count: reviews,
        })
}

/// A catalog with unique ids
fn catalog_strategy() -> impl Strategy<Value = Vec<Model>> {
    prop::collection::vec(model_strategy(), 0..12).prop_map(|models| {
        models
            .into_iter()
            .enumerate()
            .map(|(i, mut m)| {
                m.id = i as i64 + 1;
                m
            })
            .collect()
    })
}

/// A catalog together with a shuffled copy of it
fn shuffled_catalog_strategy() -> impl Strategy<Value = (Vec<Model>, Vec<Model>)> {
    catalog_strategy().prop_flat_map(|models| (Just(models.clone()), Just(models).prop_shuffle()))
}

fn keyword_strategy() -> impl Strategy<Value = Option<Category>> {
    prop::option::of(prop::sample::select(Category::ALL.to_vec()))
}

fn range_strategy() -> impl Strategy<Value = PriceRange> {
    (prop::option::of(0i32..6000), prop::option::of(0i32..6000))
        .prop_map(|(min, max)| PriceRange::from_bounds(min, max))
}

fn request_strategy() -> impl Strategy<Value = RecommendationRequest> {
    (
        0u32..5,
        0u32..5,
        prop::option::of(0i32..3000),
        prop::option::of(3000i32..8000),
        prop::sample::select(Category::ALL.to_vec()),
        prop::sample::select(Category::ALL.to_vec()),
        prop::sample::select(Purpose::ALL.to_vec()),
    )
        .prop_map(
            |(adults, kids, min_price, max_price, priority1, priority2, purpose)| {
                RecommendationRequest {
                    adults,
                    kids,
                    min_price,
                    max_price,
                    priority1,
                    priority2,
                    purpose,
                }
            },
        )
}

fn keyword_score(model: &Model, keyword: Option<Category>) -> f64 {
    match keyword {
        Some(category) => model.keyword_average(category),
        None => model.all_keyword_average(),
    }
}

fn sorted_ids(models: &[Model]) -> Vec<i64> {
    let mut ids: Vec<i64> = models.iter().map(|m| m.id).collect();
    ids.sort();
    ids
}

// ============================================================================
// RANKING
// ============================================================================

proptest! {
    /// The ranking holds exactly the models inside the price window.
    #[test]
    fn prop_rank_is_permutation_of_filtered_input(
        models in catalog_strategy(),
        keyword in keyword_strategy(),
        range in range_strategy(),
    ) {
        let ranked = rank(&models, keyword, range);
        let filtered: Vec<Model> = models
            .iter()
            .filter(|m| range.contains(m.price))
            .cloned()
            .collect();

        prop_assert_eq!(sorted_ids(&ranked), sorted_ids(&filtered));
    }

    /// Neighbours respect score desc, review count desc, name asc.
    #[test]
    fn prop_rank_respects_three_tier_order(
        models in catalog_strategy(),
        keyword in keyword_strategy(),
    ) {
        let ranked = rank(&models, keyword, PriceRange::default());

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let order = keyword_score(b, keyword)
                .total_cmp(&keyword_score(a, keyword))
                .then_with(|| b.review_count.cmp(&a.review_count))
                .then_with(|| a.name.cmp(&b.name));

            prop_assert!(
                order != Ordering::Greater,
                "{} (id {}) ranked before {} (id {})",
                a.name, a.id, b.name, b.id
            );
        }
    }

    /// Input order never changes the ranking.
    #[test]
    fn prop_rank_ignores_input_order(
        (models, shuffled) in shuffled_catalog_strategy(),
        keyword in keyword_strategy(),
        range in range_strategy(),
    ) {
        prop_assert_eq!(rank(&models, keyword, range), rank(&shuffled, keyword, range));
    }
}

// ============================================================================
// RECOMMENDATION
// ============================================================================

proptest! {
    /// Recommending never touches the catalog.
    #[test]
    fn prop_recommend_leaves_input_unchanged(
        models in catalog_strategy(),
        request in request_strategy(),
    ) {
        let control = models.clone();
        let _ = recommend(&models, &request);
        prop_assert_eq!(models, control);
    }

    /// The picks are the head of the recommendation order, with explanation
    /// percentages that stay within 0..=100 for realistic reviews.
    #[test]
    fn prop_recommend_picks_head_of_order(
        models in catalog_strategy(),
        request in request_strategy(),
    ) {
        match recommend(&models, &request) {
            Ok([first, second]) => {
                let order = recommendation_order(&models, &request);
                prop_assert_eq!(first.id, order[0]);
                prop_assert_eq!(second.id, order[1]);
                for pick in [&first, &second] {
                    prop_assert!((0..=100).contains(&pick.priority_percent));
                    prop_assert!((0..=100).contains(&pick.purpose_percent));
                }
            }
            Err(_) => prop_assert!(models.len() < 2),
        }
    }

    /// Input order never changes the recommendation.
    #[test]
    fn prop_recommend_ignores_input_order(
        (models, shuffled) in shuffled_catalog_strategy(),
        request in request_strategy(),
    ) {
        prop_assert_eq!(
            recommendation_order(&models, &request),
            recommendation_order(&shuffled, &request)
        );
    }
}
