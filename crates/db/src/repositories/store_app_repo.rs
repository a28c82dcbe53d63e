//! Repository for the `store_apps` table.

use bap_core::filter::StoreAppFilter;
use bap_core::types::DbId;
use sqlx::PgPool;

use crate::models::store_app::StoreApp;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rating, people, category, date, price";

/// Provides read-only queries over store apps.
///
/// Text searches lowercase both the column and the raw needle with `LOWER`;
/// `strpos` keeps `%` and `_` in the needle literal.
pub struct StoreAppRepo;

impl StoreAppRepo {
    /// List every store app, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_apps ORDER BY id ASC");
        sqlx::query_as::<_, StoreApp>(&query).fetch_all(pool).await
    }

    /// Find a store app by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StoreApp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_apps WHERE id = $1");
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Store apps whose name contains `search`, ignoring case.
    pub async fn search_by_name(pool: &PgPool, search: &str) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM store_apps
             WHERE strpos(LOWER(name), LOWER($1)) > 0
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Store apps whose category contains `category`, ignoring case.
    pub async fn search_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM store_apps
             WHERE strpos(LOWER(category), LOWER($1)) > 0
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Store apps rated at or above `rating`.
    pub async fn list_min_rating(pool: &PgPool, rating: f64) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM store_apps
             WHERE rating >= $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(rating)
            .fetch_all(pool)
            .await
    }

    /// Store apps with at least `people` ratings.
    pub async fn list_min_people(pool: &PgPool, people: i32) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM store_apps
             WHERE people >= $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(people)
            .fetch_all(pool)
            .await
    }

    /// The first `limit` store apps by id ascending.
    pub async fn list_first(pool: &PgPool, limit: i64) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_apps ORDER BY id ASC LIMIT $1");
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Dispatch a [`StoreAppFilter`] to the matching query.
    pub async fn find(pool: &PgPool, filter: &StoreAppFilter) -> Result<Vec<StoreApp>, sqlx::Error> {
        match filter {
            StoreAppFilter::NameContains(needle) => Self::search_by_name(pool, needle).await,
            StoreAppFilter::CategoryContains(needle) => {
                Self::search_by_category(pool, needle).await
            }
            StoreAppFilter::MinRating(rating) => Self::list_min_rating(pool, *rating).await,
            StoreAppFilter::MinPeople(people) => Self::list_min_people(pool, *people).await,
        }
    }
}
