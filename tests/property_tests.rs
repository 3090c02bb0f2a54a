use menu_rs::models::{
    validate_name, validate_optional_text, validate_price, Category, CreateCategoryRequest,
    CreateDishRequest, MAX_CATEGORY_NAME_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_DISH_NAME_LENGTH,
};
use menu_rs::repositories::{InMemoryMenuRepository, MenuRepository};
use proptest::prelude::*;
use rust_decimal::Decimal;

// Property-based test strategies
prop_compose! {
    fn arb_valid_name()(name in "[a-zA-Z0-9 ]{1,60}") -> String {
        name
    }
}

prop_compose! {
    fn arb_valid_price()(cents in 0u32..100000) -> Decimal {
        // Generate prices as cents and convert to decimal with exactly 2 decimal places
        Decimal::from_parts(cents, 0, 0, false, 2)
    }
}

prop_compose! {
    fn arb_create_dish_request()(
        name in arb_valid_name(),
        description in "[a-zA-Z0-9 .,!]{0,200}",
        price in arb_valid_price(),
        is_available in any::<bool>(),
    ) -> CreateDishRequest {
        CreateDishRequest {
            name,
            description,
            price,
            is_available,
            category_id: 1,
        }
    }
}

fn current_thread_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

proptest! {
    #[test]
    fn test_name_validation(name in ".*") {
        let result = validate_name("category_name", &name, MAX_CATEGORY_NAME_LENGTH);
        let trimmed = name.trim();

        let acceptable = !trimmed.is_empty()
            && trimmed.len() <= MAX_CATEGORY_NAME_LENGTH
            && !trimmed.chars().any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t');

        if acceptable {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn test_price_validation_sign_rule(price_f64 in -10000.0f64..10000.0) {
        if let Some(price) = Decimal::from_f64_retain(price_f64) {
            let result = validate_price(&price);

            if price >= Decimal::ZERO {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
            }
        }
    }

    #[test]
    fn test_description_length_rule(description in proptest::collection::vec(any::<char>(), 0..1100)) {
        let description: String = description.into_iter().collect();
        let result = validate_optional_text("dish_description", &description, MAX_DESCRIPTION_LENGTH);

        if description.len() <= MAX_DESCRIPTION_LENGTH {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn test_create_dish_request_strategy_is_valid(request in arb_create_dish_request()) {
        prop_assert!(validate_name("dish_name", &request.name, MAX_DISH_NAME_LENGTH).is_ok());
        prop_assert!(validate_price(&request.price).is_ok());
    }

    #[test]
    fn test_dish_request_serialization_roundtrip(request in arb_create_dish_request()) {
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: CreateDishRequest = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(request.name, deserialized.name);
        prop_assert_eq!(request.description, deserialized.description);
        prop_assert_eq!(request.price, deserialized.price);
        prop_assert_eq!(request.is_available, deserialized.is_available);
    }

    #[test]
    fn test_display_ordering_is_total_over_order_and_id(orders in proptest::collection::vec(-100i32..100, 1..20)) {
        // Categories built in arbitrary order always list sorted by
        // (order, id), with id breaking ties
        let mut categories: Vec<Category> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| {
                Category::new(
                    (i + 1) as u64,
                    CreateCategoryRequest {
                        name: format!("Category {}", i + 1),
                        order: *order,
                    },
                )
            })
            .collect();

        categories.sort_by_key(|c| c.display_key());

        for pair in categories.windows(2) {
            let earlier = &pair[0];
            let later = &pair[1];
            prop_assert!(
                earlier.order < later.order
                    || (earlier.order == later.order && earlier.id < later.id)
            );
        }
    }

    #[test]
    fn test_store_listing_sorted_for_any_insertion_sequence(orders in proptest::collection::vec(-50i32..50, 1..12)) {
        let runtime = current_thread_runtime();

        runtime.block_on(async {
            let repo = InMemoryMenuRepository::new();

            for (i, order) in orders.iter().enumerate() {
                repo.create_category(CreateCategoryRequest {
                    name: format!("Category {}", i + 1),
                    order: *order,
                })
                .await
                .unwrap();
            }

            let listed = repo.list_categories().await.unwrap();
            assert_eq!(listed.len(), orders.len());

            for pair in listed.windows(2) {
                assert!(pair[0].display_key() < pair[1].display_key());
            }
        });
    }

    #[test]
    fn test_store_ids_unique_and_monotonic(count in 1usize..20) {
        let runtime = current_thread_runtime();

        runtime.block_on(async {
            let repo = InMemoryMenuRepository::new();
            let mut previous_id = 0;

            for i in 0..count {
                let category = repo
                    .create_category(CreateCategoryRequest {
                        name: format!("Category {}", i),
                        order: 0,
                    })
                    .await
                    .unwrap();

                assert!(category.id > previous_id);
                previous_id = category.id;
            }
        });
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_string_validation() {
        assert!(validate_name("dish_name", "", MAX_DISH_NAME_LENGTH).is_err());
        assert!(validate_name("dish_name", "  ", MAX_DISH_NAME_LENGTH).is_err());
    }

    #[test]
    fn test_zero_and_negative_prices() {
        assert!(validate_price(&Decimal::ZERO).is_ok()); // Zero-priced dishes are legal
        assert!(validate_price(&dec!(-0.01)).is_err());
        assert!(validate_price(&Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_boundary_name_lengths() {
        assert!(validate_name("category_name", "a", MAX_CATEGORY_NAME_LENGTH).is_ok());
        assert!(validate_name(
            "category_name",
            &"a".repeat(MAX_CATEGORY_NAME_LENGTH),
            MAX_CATEGORY_NAME_LENGTH
        )
        .is_ok());
        assert!(validate_name(
            "category_name",
            &"a".repeat(MAX_CATEGORY_NAME_LENGTH + 1),
            MAX_CATEGORY_NAME_LENGTH
        )
        .is_err());
    }

    #[test]
    fn test_special_characters_in_names() {
        assert!(validate_name("dish_name", "Dish with spaces", MAX_DISH_NAME_LENGTH).is_ok());
        assert!(validate_name("dish_name", "Dish123", MAX_DISH_NAME_LENGTH).is_ok());
        assert!(validate_name("dish_name", "Crème brûlée", MAX_DISH_NAME_LENGTH).is_ok());
        assert!(validate_name("dish_name", "Dish\x00control", MAX_DISH_NAME_LENGTH).is_err());
    }
}
