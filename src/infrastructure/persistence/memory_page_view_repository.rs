//! Process-local page-view store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{
    NewPageView, RestaurantIdentity, RestaurantPageViews, WeekYear, WeeklyCount,
};
use crate::domain::repositories::{PageViewRepository, StoreError};

/// In-memory [`PageViewRepository`].
///
/// Buckets are kept in a `BTreeMap` ordered by (year, week), so listing
/// yields ascending series without sorting. Restaurants are listed in the
/// order they were first recorded.
#[derive(Default)]
pub struct InMemoryPageViewRepository {
    inner: RwLock<Restaurants>,
}

#[derive(Default)]
struct Restaurants {
    order: Vec<StoreKey>,
    by_key: HashMap<StoreKey, RestaurantEntry>,
}

/// Recorded views and id-carrying imports are keyed by id; imports without
/// an id by name. The two never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StoreKey {
    Id(String),
    Name(String),
}

impl From<RestaurantIdentity<'_>> for StoreKey {
    fn from(identity: RestaurantIdentity<'_>) -> Self {
        match identity {
            RestaurantIdentity::Id(id) => Self::Id(id.to_string()),
            RestaurantIdentity::Name(name) => Self::Name(name.to_string()),
        }
    }
}

struct RestaurantEntry {
    name: String,
    weeks: BTreeMap<WeekYear, u64>,
}

impl Restaurants {
    fn entry(&mut self, key: StoreKey, name: &str) -> &mut RestaurantEntry {
        if !self.by_key.contains_key(&key) {
            self.order.push(key.clone());
        }

        let entry = self
            .by_key
            .entry(key)
            .or_insert_with(|| RestaurantEntry {
                name: name.to_string(),
                weeks: BTreeMap::new(),
            });
        entry.name = name.to_string();
        entry
    }
}

impl InMemoryPageViewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageViewRepository for InMemoryPageViewRepository {
    async fn record_view(&self, view: NewPageView) -> Result<WeeklyCount, StoreError> {
        if view.restaurant_key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if !view.week_year.is_valid() {
            return Err(StoreError::InvalidWeek(view.week_year));
        }

        let mut restaurants = self.inner.write().await;
        let entry = restaurants.entry(StoreKey::Id(view.restaurant_key), &view.name);
        let count = entry.weeks.entry(view.week_year).or_insert(0);
        *count = count.saturating_add(1);

        Ok(WeeklyCount::new(
            view.week_year.week,
            view.week_year.year,
            *count,
        ))
    }

    async fn list_page_views(&self) -> Result<Vec<RestaurantPageViews>, StoreError> {
        let restaurants = self.inner.read().await;

        Ok(restaurants
            .order
            .iter()
            .filter_map(|key| {
                let entry = restaurants.by_key.get(key)?;
                let page_views = entry
                    .weeks
                    .iter()
                    .map(|(week_year, count)| {
                        WeeklyCount::new(week_year.week, week_year.year, *count)
                    })
                    .collect();
                let restaurant = RestaurantPageViews::new(entry.name.clone(), page_views);
                Some(match key {
                    StoreKey::Id(id) => restaurant.with_id(id.clone()),
                    StoreKey::Name(_) => restaurant,
                })
            })
            .collect())
    }

    async fn count_restaurants(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().await.order.len())
    }

    async fn import(&self, series: Vec<RestaurantPageViews>) -> Result<usize, StoreError> {
        let mut restaurants = self.inner.write().await;
        let mut written = 0;

        for restaurant in &series {
            let key = StoreKey::from(restaurant.identity());
            for record in &restaurant.page_views {
                let week_year = record.week_year();
                if !week_year.is_valid() {
                    tracing::warn!(
                        restaurant = %restaurant.name,
                        week = record.week,
                        year = record.year,
                        "Skipping page view bucket without a calendar date"
                    );
                    continue;
                }
                restaurants
                    .entry(key.clone(), &restaurant.name)
                    .weeks
                    .insert(week_year, record.count);
                written += 1;
            }
        }

        Ok(written)
    }
}
