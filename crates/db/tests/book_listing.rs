//! Integration tests for filtered, paginated book listing.
//!
//! Author and category filters match the joined author/category names,
//! not the foreign key columns.

use std::collections::HashSet;

use catalog_db::models::author::CreateAuthor;
use catalog_db::models::book::{BookDetail, BookListParams, CreateBook};
use catalog_db::models::category::CreateCategory;
use catalog_db::repositories::{AuthorRepo, BookRepo, CategoryRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

/// Seed two authors, two categories and five books:
///
/// | title                | author       | category     | available |
/// |----------------------|--------------|--------------|-----------|
/// | Python Basics        | Jane Doe     | Fiction      | true      |
/// | Advanced Python      | Jane Doe     | Programming  | false     |
/// | Rust in Action       | John Smith   | Programming  | true      |
/// | The Python Chronicle | John Smith   | Fiction      | true      |
/// | Gardening 100%       | Jane Doe     | Fiction      | false     |
async fn seed(pool: &PgPool) {
    let jane = AuthorRepo::create(
        pool,
        &CreateAuthor {
            name: "Jane Doe".to_string(),
            biography: None,
        },
    )
    .await
    .unwrap();
    let john = AuthorRepo::create(
        pool,
        &CreateAuthor {
            name: "John Smith".to_string(),
            biography: None,
        },
    )
    .await
    .unwrap();
    let fiction = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Fiction".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let programming = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Programming".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let books = [
        ("Python Basics", jane.id, fiction.id, true),
        ("Advanced Python", jane.id, programming.id, false),
        ("Rust in Action", john.id, programming.id, true),
        ("The Python Chronicle", john.id, fiction.id, true),
        ("Gardening 100%", jane.id, fiction.id, false),
    ];
    for (title, author_id, category_id, available) in books {
        BookRepo::create(
            pool,
            &CreateBook {
                title: title.to_string(),
                author_id,
                category_id,
                available,
            },
        )
        .await
        .unwrap();
    }
}

fn titles(books: &[BookDetail]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

fn params() -> BookListParams {
    BookListParams::default()
}

// ---------------------------------------------------------------------------
// Test: Defaults and ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_without_filters_returns_all_in_id_order(pool: PgPool) {
    seed(&pool).await;

    let books = BookRepo::list(&pool, &params()).await.unwrap();
    assert_eq!(books.len(), 5);
    assert!(books.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_default_limit_is_ten(pool: PgPool) {
    seed(&pool).await;
    seed_extra(&pool, 8).await;

    let books = BookRepo::list(&pool, &params()).await.unwrap();
    assert_eq!(books.len(), 10);
}

async fn seed_extra(pool: &PgPool, n: usize) {
    let existing = BookRepo::list(pool, &params()).await.unwrap();
    let template = &existing[0];
    for i in 0..n {
        BookRepo::create(
            pool,
            &CreateBook {
                title: format!("Filler {i}"),
                author_id: template.author_id,
                category_id: template.category_id,
                available: true,
            },
        )
        .await
        .unwrap();
    }
}

// ---------------------------------------------------------------------------
// Test: Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_limit_caps_result_size(pool: PgPool) {
    seed(&pool).await;

    for limit in 0..=6 {
        let books = BookRepo::list(
            &pool,
            &BookListParams {
                limit: Some(limit),
                ..params()
            },
        )
        .await
        .unwrap();
        assert!(books.len() as i64 <= limit, "limit {limit} returned {}", books.len());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_consecutive_pages_are_disjoint(pool: PgPool) {
    seed(&pool).await;

    let page = |skip| BookListParams {
        skip: Some(skip),
        limit: Some(2),
        ..params()
    };

    let mut seen = HashSet::new();
    let mut total = 0;
    for skip in [0, 2, 4] {
        let books = BookRepo::list(&pool, &page(skip)).await.unwrap();
        total += books.len();
        for book in books {
            assert!(seen.insert(book.id), "book {} returned twice", book.id);
        }
    }
    assert_eq!(total, 5);

    let beyond = BookRepo::list(&pool, &page(6)).await.unwrap();
    assert!(beyond.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_filter_is_case_insensitive_substring(pool: PgPool) {
    seed(&pool).await;

    let books = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some("pYtHoN".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        titles(&books),
        vec!["Python Basics", "Advanced Python", "The Python Chronicle"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_author_filter_matches_author_name(pool: PgPool) {
    seed(&pool).await;

    let books = BookRepo::list(
        &pool,
        &BookListParams {
            author: Some("jane".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        titles(&books),
        vec!["Python Basics", "Advanced Python", "Gardening 100%"]
    );
    assert!(books.iter().all(|b| b.author.name.contains("Jane")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_author_filter_does_not_match_foreign_key_digits(pool: PgPool) {
    seed(&pool).await;

    // Author ids are 1 and 2; a numeric filter must not match them.
    let books = BookRepo::list(
        &pool,
        &BookListParams {
            author: Some("1".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert!(books.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_filter_matches_category_name(pool: PgPool) {
    seed(&pool).await;

    let books = BookRepo::list(
        &pool,
        &BookListParams {
            category: Some("GRAM".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(titles(&books), vec!["Advanced Python", "Rust in Action"]);
    assert!(books.iter().all(|b| b.category.name == "Programming"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_filter_is_exact(pool: PgPool) {
    seed(&pool).await;

    let available = BookRepo::list(
        &pool,
        &BookListParams {
            available: Some(true),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(available.len(), 3);
    assert!(available.iter().all(|b| b.available));

    let unavailable = BookRepo::list(
        &pool,
        &BookListParams {
            available: Some(false),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(titles(&unavailable), vec!["Advanced Python", "Gardening 100%"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_are_conjunctive(pool: PgPool) {
    seed(&pool).await;

    let books = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some("python".to_string()),
            available: Some(true),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(titles(&books), vec!["Python Basics", "The Python Chronicle"]);
    assert!(books
        .iter()
        .all(|b| b.available && b.title.to_lowercase().contains("python")));

    let narrower = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some("python".to_string()),
            author: Some("smith".to_string()),
            category: Some("fiction".to_string()),
            available: Some(true),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(titles(&narrower), vec!["The Python Chronicle"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wildcards_in_filters_match_literally(pool: PgPool) {
    seed(&pool).await;

    let percent = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some("100%".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(titles(&percent), vec!["Gardening 100%"]);

    let underscore = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some("_".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert!(underscore.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_text_filter_imposes_no_constraint(pool: PgPool) {
    seed(&pool).await;

    let books = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some(String::new()),
            author: Some(String::new()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(books.len(), 5);
}

// ---------------------------------------------------------------------------
// Test: End-to-end scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_title_returns_nested_author_and_category(pool: PgPool) {
    let jane = AuthorRepo::create(
        &pool,
        &CreateAuthor {
            name: "Jane Doe".to_string(),
            biography: None,
        },
    )
    .await
    .unwrap();
    let fiction = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Fiction".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let created = BookRepo::create(
        &pool,
        &CreateBook {
            title: "Python Basics".to_string(),
            author_id: jane.id,
            category_id: fiction.id,
            available: true,
        },
    )
    .await
    .unwrap();

    let books = BookRepo::list(
        &pool,
        &BookListParams {
            title: Some("Python".to_string()),
            ..params()
        },
    )
    .await
    .unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, created.id);
    assert_eq!(books[0].author.name, "Jane Doe");
    assert_eq!(books[0].category.name, "Fiction");
}
