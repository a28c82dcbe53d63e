//! Store app entity model and DTOs.

use bap_core::filter::FilterTarget;
use bap_core::types::{DbId, ReleaseDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `store_apps` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StoreApp {
    pub id: DbId,
    pub name: String,
    /// Expected range 0.0 to 5.0.
    pub rating: f64,
    pub people: i32,
    pub category: String,
    pub date: ReleaseDate,
    pub price: f64,
}

/// Public shape of a store app returned by every read endpoint.
///
/// Mirrors [`StoreApp`] field for field today. Handlers always go through
/// this type so trimming a field here narrows every response at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreAppDto {
    pub id: DbId,
    pub name: String,
    pub rating: f64,
    pub people: i32,
    pub category: String,
    pub date: ReleaseDate,
    pub price: f64,
}

impl From<StoreApp> for StoreAppDto {
    fn from(app: StoreApp) -> Self {
        Self {
            id: app.id,
            name: app.name,
            rating: app.rating,
            people: app.people,
            category: app.category,
            date: app.date,
            price: app.price,
        }
    }
}

/// Field set for seeding a store. The HTTP API exposes no write path.
#[derive(Debug, Clone)]
pub struct NewStoreApp {
    pub name: String,
    pub rating: f64,
    pub people: i32,
    pub category: String,
    pub date: ReleaseDate,
    pub price: f64,
}

impl NewStoreApp {
    pub(crate) fn with_id(self, id: DbId) -> StoreApp {
        StoreApp {
            id,
            name: self.name,
            rating: self.rating,
            people: self.people,
            category: self.category,
            date: self.date,
            price: self.price,
        }
    }
}

impl FilterTarget for StoreApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn people(&self) -> i32 {
        self.people
    }
}
