//! Integration tests for the GraphQL resolvers
//!
//! Runs queries and mutations against a schema backed by a seeded
//! in-memory store.

mod common;

use common::*;
use rstest::rstest;
use serde_json::json;

const PRODUCTS: &str = r#"
    query Products($filter: ProductFilterType) {
        products(filter: $filter) { _id name categoryId description price quantity created updated }
    }
"#;

#[tokio::test]
async fn test_info() {
    let (schema, _) = seeded_schema();
    let data = execute_ok(&schema, "{ info }", json!({})).await;
    assert_eq!(
        data["info"],
        "This is my practice, manually-created GraphQL Api!!!"
    );
}

#[tokio::test]
async fn test_empty_filter_returns_everything() {
    let (schema, _) = seeded_schema();

    let unfiltered = execute_ok(&schema, PRODUCTS, json!({})).await;
    let empty = execute_ok(&schema, PRODUCTS, json!({ "filter": {} })).await;

    assert_eq!(names(&unfiltered["products"]), ["Widget A", "Widget B"]);
    assert_eq!(unfiltered, empty);
}

#[rstest]
#[case::lowercase_full_name(json!({ "name": "widget a" }), &["Widget A"])]
#[case::uppercase_substring(json!({ "name": "IDGE" }), &["Widget A", "Widget B"])]
#[case::no_substring_match(json!({ "name": "gadget" }), &[])]
#[case::exact_quantity(json!({ "quantity": 5 }), &["Widget B"])]
#[case::exact_price(json!({ "price": 2.5 }), &["Widget A", "Widget B"])]
#[case::name_and_quantity(json!({ "name": "widget", "quantity": 3 }), &["Widget A"])]
#[case::conflicting_fields(json!({ "name": "widget b", "quantity": 3 }), &[])]
#[tokio::test]
async fn test_product_filters(#[case] filter: serde_json::Value, #[case] expected: &[&str]) {
    let (schema, _) = seeded_schema();
    let data = execute_ok(&schema, PRODUCTS, json!({ "filter": filter })).await;
    assert_eq!(names(&data["products"]), expected);
}

#[tokio::test]
async fn test_regex_metacharacters_match_literally() {
    let (schema, _) = seeded_schema();
    let data = execute_ok(&schema, PRODUCTS, json!({ "filter": { "name": "widget.*" } })).await;
    assert_eq!(data["products"], json!([]));
}

#[tokio::test]
async fn test_filter_by_category_id() {
    let (schema, seed) = seeded_schema();
    let data = execute_ok(
        &schema,
        PRODUCTS,
        json!({ "filter": { "categoryId": seed.category.id.to_hex() } }),
    )
    .await;
    assert_eq!(names(&data["products"]), ["Widget A"]);
}

#[tokio::test]
async fn test_create_then_find_by_id() {
    let (schema, _) = seeded_schema();

    let created = execute_ok(
        &schema,
        r#"mutation {
            create_product(name: "Gizmo", description: "Small", price: 4.25, quantity: 7) {
                _id name categoryId description price quantity created updated
            }
        }"#,
        json!({}),
    )
    .await;
    let created = &created["create_product"];
    assert!(created["created"].is_string());
    assert!(created["updated"].is_null());

    let found = execute_ok(
        &schema,
        PRODUCTS,
        json!({ "filter": { "_id": created["_id"] } }),
    )
    .await;
    assert_eq!(found["products"], json!([created]));
}

#[tokio::test]
async fn test_update_changes_only_requested_field() {
    let (schema, seed) = seeded_schema();
    let id = seed.widget_a.id.to_hex();

    let before = execute_ok(&schema, PRODUCTS, json!({ "filter": { "_id": id } })).await;

    let result = execute_ok(
        &schema,
        r#"mutation Update($id: ID) {
            update_products(filter: { _id: $id }, update: { price: 5 }) { ok n nModified }
        }"#,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(
        result["update_products"],
        json!({ "ok": true, "n": 1, "nModified": 1 })
    );

    let after = execute_ok(&schema, PRODUCTS, json!({ "filter": { "_id": id } })).await;
    let mut expected = before["products"][0].clone();
    expected["price"] = json!(5.0);
    assert_eq!(after["products"][0], expected);

    // The other widget is untouched
    let other = execute_ok(
        &schema,
        PRODUCTS,
        json!({ "filter": { "_id": seed.widget_b.id.to_hex() } }),
    )
    .await;
    assert_eq!(other["products"][0]["price"], json!(2.5));
}

#[tokio::test]
async fn test_update_reports_unchanged_matches() {
    let (schema, _) = seeded_schema();

    let result = execute_ok(
        &schema,
        r#"mutation {
            update_products(filter: { name: "widget" }, update: { quantity: 5 }) { ok n nModified }
        }"#,
        json!({}),
    )
    .await;

    assert_eq!(
        result["update_products"],
        json!({ "ok": true, "n": 2, "nModified": 1 })
    );
}

#[tokio::test]
async fn test_delete_then_find_returns_empty() {
    let (schema, seed) = seeded_schema();
    let id = seed.widget_a.id.to_hex();

    let result = execute_ok(
        &schema,
        r#"mutation Delete($id: ID!) { delete_product(_id: $id) { ok n } }"#,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(result["delete_product"], json!({ "ok": true, "n": 1 }));

    let found = execute_ok(&schema, PRODUCTS, json!({ "filter": { "_id": id } })).await;
    assert_eq!(found["products"], json!([]));

    // A second delete of the same identifier removes nothing
    let again = execute_ok(
        &schema,
        r#"mutation Delete($id: ID!) { delete_product(_id: $id) { ok n } }"#,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(again["delete_product"], json!({ "ok": true, "n": 0 }));
}

#[tokio::test]
async fn test_delete_by_filter() {
    let (schema, _) = seeded_schema();

    let result = execute_ok(
        &schema,
        r#"mutation { delete_product_byid(filter: { quantity: 5 }) { ok n nModified } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        result["delete_product_byid"],
        json!({ "ok": true, "n": 1, "nModified": null })
    );

    let remaining = execute_ok(&schema, PRODUCTS, json!({})).await;
    assert_eq!(names(&remaining["products"]), ["Widget A"]);
}

#[tokio::test]
async fn test_categories_and_nested_category() {
    let (schema, seed) = seeded_schema();

    let data = execute_ok(
        &schema,
        r#"{
            getAllCategories { _id name }
            products { name category { _id name } }
        }"#,
        json!({}),
    )
    .await;

    assert_eq!(
        data["getAllCategories"],
        json!([{ "_id": seed.category.id.to_hex(), "name": "Widgets" }])
    );

    let products = data["products"].as_array().unwrap();
    let widget_a = products.iter().find(|p| p["name"] == "Widget A").unwrap();
    let widget_b = products.iter().find(|p| p["name"] == "Widget B").unwrap();
    assert_eq!(widget_a["category"]["name"], "Widgets");
    assert!(widget_b["category"].is_null());
}

#[tokio::test]
async fn test_get_all_categories_ignores_id() {
    let (schema, _) = seeded_schema();
    let data = execute_ok(
        &schema,
        r#"{ getAllCategories(id: "000000000000000000000000") { name } }"#,
        json!({}),
    )
    .await;
    assert_eq!(data["getAllCategories"], json!([{ "name": "Widgets" }]));
}

#[tokio::test]
async fn test_get_category_by_id() {
    let (schema, seed) = seeded_schema();
    let query = r#"query Category($id: ID!) { getCategoryById(id: $id) { name } }"#;

    let found = execute_ok(&schema, query, json!({ "id": seed.category.id.to_hex() })).await;
    assert_eq!(found["getCategoryById"], json!({ "name": "Widgets" }));

    let missing = execute_ok(&schema, query, json!({ "id": "0123456789abcdef01234567" })).await;
    assert!(missing["getCategoryById"].is_null());
}

#[rstest]
#[case::filter_id(r#"{ products(filter: { _id: "not-an-id" }) { name } }"#)]
#[case::filter_category(r#"{ products(filter: { categoryId: "123" }) { name } }"#)]
#[case::category_lookup(r#"{ getCategoryById(id: "xyz") { name } }"#)]
#[case::delete(r#"mutation { delete_product(_id: "bad") { n } }"#)]
#[case::create_category(r#"mutation { create_product(name: "x", categoryId: "bad") { _id } }"#)]
#[case::update_category(
    r#"mutation { update_products(update: { categoryId: "bad" }) { n } }"#
)]
#[tokio::test]
async fn test_malformed_id_is_invalid_id_error(#[case] query: &str) {
    let (schema, _) = seeded_schema();
    let response = execute(&schema, query, json!({})).await;
    assert_eq!(first_error_code(&response).as_deref(), Some("INVALID_ID"));
}

#[tokio::test]
async fn test_failed_update_leaves_store_unchanged() {
    let (schema, _) = seeded_schema();
    let before = execute_ok(&schema, PRODUCTS, json!({})).await;

    let response = execute(
        &schema,
        r#"mutation { update_products(update: { categoryId: "bad", price: 1 }) { n } }"#,
        json!({}),
    )
    .await;
    assert!(!response.errors.is_empty());

    let after = execute_ok(&schema, PRODUCTS, json!({})).await;
    assert_eq!(before, after);
}
