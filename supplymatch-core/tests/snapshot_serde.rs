//! Deserialisation of input snapshots as the CLI reads them.
#![cfg(feature = "serde")]

use rstest::rstest;
use supplymatch_core::{ProductCatalogue, RestaurantIngredients};

#[rstest]
fn catalogue_deserialises_from_json_array() {
    let catalogue: ProductCatalogue =
        serde_json::from_str(r#"["Chicken Salad", "Beef Burger"]"#).expect("valid catalogue");
    assert_eq!(catalogue.position("Beef Burger"), Some(1));
}

#[rstest]
#[case(r#"["Chicken Salad", "Chicken Salad"]"#)]
#[case(r#"["Chicken Salad", ""]"#)]
fn catalogue_deserialisation_validates_items(#[case] payload: &str) {
    let result: Result<ProductCatalogue, _> = serde_json::from_str(payload);
    assert!(result.is_err(), "invalid catalogue should be rejected");
}

#[rstest]
fn ingredients_deserialise_from_json_object() {
    let restaurants: RestaurantIngredients = serde_json::from_str(
        r#"{"Restaurant A": ["chicken", "lettuce", "chicken"], "Restaurant B": []}"#,
    )
    .expect("valid ingredients");
    assert_eq!(restaurants.len(), 2);
    assert_eq!(
        restaurants.ingredients("Restaurant A").map(<[String]>::len),
        Some(3)
    );
    assert_eq!(
        restaurants.ingredients("Restaurant B").map(<[String]>::len),
        Some(0)
    );
}

#[rstest]
fn catalogue_serialises_in_order() {
    let catalogue =
        ProductCatalogue::new(["Tomato Soup", "Cheese Sandwich"]).expect("valid catalogue");
    let json = serde_json::to_string(&catalogue).expect("serialise catalogue");
    assert_eq!(json, r#"["Tomato Soup","Cheese Sandwich"]"#);
}
