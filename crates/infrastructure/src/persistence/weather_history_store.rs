//! SQLite weather history store
//!
//! Append-only log of successful lookups.

use std::sync::Arc;

use application::{error::ApplicationError, ports::WeatherHistoryStore};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use domain::{entities::WeatherRecord, value_objects::PlaceQuery};
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based weather history store
#[derive(Debug, Clone)]
pub struct SqliteWeatherHistoryStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteWeatherHistoryStore {
    /// Create a new SQLite weather history store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: &Row<'_>) -> Result<WeatherRecord, rusqlite::Error> {
    let city: String = row.get(0)?;
    let temperature: String = row.get(1)?;
    let condition: String = row.get(2)?;
    let recorded_at_str: String = row.get(3)?;

    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at_str)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(WeatherRecord::restore(
        city,
        temperature,
        condition,
        recorded_at,
    ))
}

#[async_trait]
impl WeatherHistoryStore for SqliteWeatherHistoryStore {
    #[instrument(skip(self, record), fields(city = %record.city()))]
    async fn record(&self, record: &WeatherRecord) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let record = record.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.execute(
                "INSERT INTO weather_records (city, temperature, condition, recorded_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.city(),
                    record.temperature(),
                    record.condition(),
                    record
                        .recorded_at()
                        .to_rfc3339_opts(SecondsFormat::Micros, true),
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Recorded weather lookup");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn latest_for_city(
        &self,
        city: &PlaceQuery,
    ) -> Result<Option<WeatherRecord>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let city = city.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            // `city` is declared COLLATE NOCASE, so this match ignores case.
            conn.query_row(
                "SELECT city, temperature, condition, recorded_at
                 FROM weather_records
                 WHERE city = ?1
                 ORDER BY recorded_at DESC, id DESC
                 LIMIT 1",
                [&city],
                row_to_record,
            )
            .optional()
            .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::config::DatabaseConfig;
    use crate::persistence::create_pool;

    fn setup_store() -> SqliteWeatherHistoryStore {
        let config = DatabaseConfig::in_memory();
        SqliteWeatherHistoryStore::new(Arc::new(create_pool(&config).unwrap()))
    }

    fn record(city: &str, temperature: &str, at: DateTime<Utc>) -> WeatherRecord {
        WeatherRecord::restore(
            city.to_string(),
            temperature.to_string(),
            "clear sky".to_string(),
            at,
        )
    }

    #[tokio::test]
    async fn empty_history_returns_none() {
        let store = setup_store();
        let city = PlaceQuery::new("London").unwrap();
        assert!(store.latest_for_city(&city).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn returns_most_recent_record() {
        let store = setup_store();
        let now = Utc::now();
        store
            .record(&record("London", "12°C", now - Duration::hours(2)))
            .await
            .unwrap();
        store.record(&record("London", "15°C", now)).await.unwrap();
        store
            .record(&record("Paris", "20°C", now + Duration::hours(1)))
            .await
            .unwrap();

        let latest = store
            .latest_for_city(&PlaceQuery::new("London").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.city(), "London");
        assert_eq!(latest.temperature(), "15°C");
        assert_eq!(latest.condition(), "clear sky");
    }

    #[tokio::test]
    async fn city_match_ignores_case() {
        let store = setup_store();
        store
            .record(&record("London", "15°C", Utc::now()))
            .await
            .unwrap();

        let latest = store
            .latest_for_city(&PlaceQuery::new("LONDON").unwrap())
            .await
            .unwrap();
        assert!(latest.is_some());
    }

    #[tokio::test]
    async fn recorded_at_round_trips_to_the_microsecond() {
        let store = setup_store();
        let at = Utc::now();
        store.record(&record("Oslo", "-3°C", at)).await.unwrap();

        let latest = store
            .latest_for_city(&PlaceQuery::new("Oslo").unwrap())
            .await
            .unwrap()
            .unwrap();
        let drift = (latest.recorded_at() - at).num_microseconds().unwrap().abs();
        assert!(drift <= 1);
    }
}
