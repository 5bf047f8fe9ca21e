//! Integration tests for the orders repository against a real database.

use assert_matches::assert_matches;
use pmdweb_core::order::{Destination, OrderCategory};
use pmdweb_core::pagination::{PageRequest, Pagination};
use pmdweb_db::models::order::{CreateOrder, UpdateOrder};
use pmdweb_db::repositories::OrderRepo;
use pmdweb_db::seed;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_order(year: &str, title: &str, display_order: i32) -> CreateOrder {
    CreateOrder {
        year: year.to_string(),
        title: title.to_string(),
        category: OrderCategory::Directive,
        date: None,
        destination: Destination::None,
        display_order,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_positive_id(pool: PgPool) {
    let order = OrderRepo::create(&pool, &new_order("2568", "Test", 0))
        .await
        .unwrap();

    assert!(order.id > 0);
    assert_eq!(order.category, "คำสั่ง");
    assert_eq!(order.file_path, None);
    assert_eq!(order.link, None);

    let found = OrderRepo::find_by_id(&pool, order.id).await.unwrap();
    assert_eq!(found.map(|o| o.title), Some("Test".to_string()));
}

#[sqlx::test(migrations = "./migrations")]
async fn file_destination_persists_in_both_columns(pool: PgPool) {
    let mut input = new_order("2568", "With file", 0);
    input.destination = Destination::File("/uploads/orders/a.pdf".into());

    let order = OrderRepo::create(&pool, &input).await.unwrap();
    assert_eq!(order.file_path.as_deref(), Some("/uploads/orders/a.pdf"));
    assert_eq!(order.link.as_deref(), Some("/uploads/orders/a.pdf"));
    assert_eq!(order.destination().file_path(), Some("/uploads/orders/a.pdf"));
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_category_is_rejected_by_store(pool: PgPool) {
    let result = sqlx::query("INSERT INTO orders (year, title, category) VALUES ('2568', 'x', 'news')")
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_orders_by_year_then_display_order(pool: PgPool) {
    OrderRepo::create(&pool, &new_order("2567", "old-2", 2)).await.unwrap();
    OrderRepo::create(&pool, &new_order("2568", "new-2", 2)).await.unwrap();
    OrderRepo::create(&pool, &new_order("2568", "new-1", 1)).await.unwrap();
    OrderRepo::create(&pool, &new_order("2567", "old-1", 1)).await.unwrap();

    let all = OrderRepo::list_all(&pool).await.unwrap();
    let titles: Vec<_> = all.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["new-1", "new-2", "old-1", "old-2"]);

    let years = OrderRepo::list_years(&pool).await.unwrap();
    assert_eq!(years, vec!["2568".to_string(), "2567".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn pages_cover_every_filtered_row(pool: PgPool) {
    for i in 0..7 {
        OrderRepo::create(&pool, &new_order("2566", &format!("o{i}"), i)).await.unwrap();
    }
    OrderRepo::create(&pool, &new_order("2565", "other", 0)).await.unwrap();

    let first = PageRequest::new(Some(1), Some(3));
    let (_, total) = OrderRepo::list_page(&pool, Some("2566"), first).await.unwrap();
    assert_eq!(total, 7);

    let pagination = Pagination::new(first, total);
    assert_eq!(pagination.total_pages, 3);

    let mut seen = 0;
    for page in 1..=pagination.total_pages {
        let req = PageRequest::new(Some(page), Some(3));
        let (rows, _) = OrderRepo::list_page(&pool, Some("2566"), req).await.unwrap();
        assert!(rows.iter().all(|o| o.year == "2566"));
        seen += rows.len() as i64;
    }
    assert_eq!(seen, total);

    let (_, unfiltered) = OrderRepo::list_page(&pool, None, first).await.unwrap();
    assert_eq!(unfiltered, 8);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_leaves_other_fields(pool: PgPool) {
    let mut input = new_order("2568", "Original", 3);
    input.date = Some("15 มกราคม 2568".into());
    let order = OrderRepo::create(&pool, &input).await.unwrap();

    let update = UpdateOrder {
        title: Some("Renamed".into()),
        category: Some(OrderCategory::Announcement),
        ..Default::default()
    };
    let updated = OrderRepo::update(&pool, order.id, &update)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.category, "ประกาศ");
    assert_eq!(updated.year, "2568");
    assert_eq!(updated.display_order, 3);
    assert_eq!(updated.date.as_deref(), Some("15 มกราคม 2568"));
    assert!(updated.updated_at >= order.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn link_update_clears_file_path(pool: PgPool) {
    let mut input = new_order("2568", "Doc", 0);
    input.destination = Destination::File("/uploads/orders/a.pdf".into());
    let order = OrderRepo::create(&pool, &input).await.unwrap();

    let update = UpdateOrder {
        destination: Some(Destination::ExternalLink("https://example.com/b.pdf".into())),
        ..Default::default()
    };
    let updated = OrderRepo::update(&pool, order.id, &update).await.unwrap().unwrap();

    assert_eq!(updated.file_path, None);
    assert_eq!(updated.link.as_deref(), Some("https://example.com/b.pdf"));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_row_returns_none(pool: PgPool) {
    let update = UpdateOrder {
        title: Some("x".into()),
        ..Default::default()
    };
    assert!(OrderRepo::update(&pool, 9999, &update).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_returns_removed_row(pool: PgPool) {
    let order = OrderRepo::create(&pool, &new_order("2568", "Gone", 0)).await.unwrap();

    let deleted = OrderRepo::delete(&pool, order.id).await.unwrap();
    assert_eq!(deleted.map(|o| o.id), Some(order.id));
    assert!(OrderRepo::find_by_id(&pool, order.id).await.unwrap().is_none());
    assert!(OrderRepo::delete(&pool, order.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn legacy_seed_is_idempotent(pool: PgPool) {
    let years = seed::legacy_orders().unwrap();
    let expected: usize = years.iter().map(|y| y.orders.len()).sum();

    let first = seed::seed_orders(&pool, &years).await.unwrap();
    assert_eq!(first.inserted, expected);
    assert_eq!(first.skipped, 0);

    let second = seed::seed_orders(&pool, &years).await.unwrap();
    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, expected);

    let counts = seed::count_by_year(&pool).await.unwrap();
    let total: i64 = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(total as usize, expected);

    let first_2561 = OrderRepo::list_page(&pool, Some("2561"), PageRequest::new(Some(1), Some(1)))
        .await
        .unwrap()
        .0;
    assert_eq!(first_2561[0].display_order, 1);
}
