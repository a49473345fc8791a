//! Cafe Repository

use async_trait::async_trait;
use shared::models::{Cafe, CafeCreate, Seats};
use sqlx::SqlitePool;

use super::{CafeStore, RepoError, RepoResult};

/// Row as stored; `seats` is kept as its label
#[derive(Debug, sqlx::FromRow)]
struct CafeRow {
    id: i64,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl TryFrom<CafeRow> for Cafe {
    type Error = RepoError;

    fn try_from(row: CafeRow) -> Result<Self, Self::Error> {
        let seats: Seats = row
            .seats
            .parse()
            .map_err(|e| RepoError::Database(format!("cafe {}: {e}", row.id)))?;
        Ok(Cafe {
            id: row.id,
            name: row.name,
            map_url: row.map_url,
            img_url: row.img_url,
            location: row.location,
            seats,
            has_toilet: row.has_toilet,
            has_wifi: row.has_wifi,
            has_sockets: row.has_sockets,
            can_take_calls: row.can_take_calls,
            coffee_price: row.coffee_price,
        })
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let rows = sqlx::query_as::<_, CafeRow>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(Cafe::try_from).collect()
}

pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    let row = sqlx::query_as::<_, CafeRow>(
        r#"
        INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
        "#,
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(data.seats.as_str())
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Cafe '{}' already exists", data.name))
        }
        other => other,
    })?;
    Cafe::try_from(row)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    Ok(())
}

/// [`CafeStore`] backed by a SQLite pool
#[derive(Clone)]
pub struct SqliteCafeStore {
    pool: SqlitePool,
}

impl SqliteCafeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeStore for SqliteCafeStore {
    async fn create(&self, data: CafeCreate) -> RepoResult<Cafe> {
        create(&self.pool, data).await
    }

    async fn list_all(&self) -> RepoResult<Vec<Cafe>> {
        find_all(&self.pool).await
    }

    async fn delete_by_id(&self, id: i64) -> RepoResult<()> {
        delete(&self.pool, id).await
    }
}
