//! Listing Store
//! 車両リスティングの CRUD・検索・フィルタリング

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::info;

use super::fresh_id;
use crate::models::{Car, CarFilters, CarStatus, NewCar, SortKey, UpdateCarRequest};
use crate::seed;

/// 車両リスティングの正本コレクションを持つストア
///
/// 変更操作はコレクションを新しい `Vec` に組み直して `Arc` ごと差し替える。
/// `all()` などが返すスナップショットはその後の変更で書き換わらない。
#[derive(Debug)]
pub struct ListingStore {
    cars: RwLock<Arc<Vec<Car>>>,
}

impl ListingStore {
    /// モックデータ入りで構築
    pub fn new() -> Self {
        Self::with_cars(seed::mock_cars())
    }

    /// 任意の初期データで構築
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars: RwLock::new(Arc::new(cars)),
        }
    }

    /// 空で構築（テスト用）
    pub fn empty() -> Self {
        Self::with_cars(Vec::new())
    }

    /// 全件スナップショット（挿入順 = 新着順）
    pub fn all(&self) -> Arc<Vec<Car>> {
        Arc::clone(&self.cars.read().unwrap())
    }

    /// id で 1 件取得
    pub fn get_by_id(&self, id: i64) -> Option<Car> {
        self.cars.read().unwrap().iter().find(|c| c.id == id).cloned()
    }

    /// 新規作成。id と両タイムスタンプはストアが採番し、先頭に挿入する
    pub fn create(&self, input: NewCar) -> Car {
        let mut guard = self.cars.write().unwrap();
        let now = Utc::now();
        let id = fresh_id(guard.iter().map(|c| c.id).max());
        let car = Car {
            id,
            title: input.title,
            brand: input.brand,
            model: input.model,
            year: input.year,
            price: input.price,
            mileage: input.mileage,
            fuel_type: input.fuel_type,
            transmission: input.transmission,
            body_type: input.body_type,
            color: input.color,
            description: input.description,
            images: input.images,
            location: input.location,
            seller_id: input.seller_id,
            seller_name: input.seller_name,
            seller_phone: input.seller_phone,
            status: input.status,
            featured: input.featured,
            created_at: now,
            updated_at: now,
        };

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(car.clone());
        next.extend(guard.iter().cloned());
        *guard = Arc::new(next);

        info!("Car created: id={}, title={}", car.id, car.title);
        car
    }

    /// 部分更新。updatedAt を現在時刻にする。id が無ければ何もしない（None）
    pub fn update(&self, id: i64, updates: UpdateCarRequest) -> Option<Car> {
        let mut guard = self.cars.write().unwrap();
        guard.iter().position(|c| c.id == id)?;

        let mut next: Vec<Car> = guard.iter().cloned().collect();
        let mut updated = None;
        for car in next.iter_mut() {
            if car.id != id {
                continue;
            }
            if let Some(v) = updates.title.clone() {
                car.title = v;
            }
            if let Some(v) = updates.brand.clone() {
                car.brand = v;
            }
            if let Some(v) = updates.model.clone() {
                car.model = v;
            }
            if let Some(v) = updates.year {
                car.year = v;
            }
            if let Some(v) = updates.price {
                car.price = v;
            }
            if let Some(v) = updates.mileage {
                car.mileage = v;
            }
            if let Some(v) = updates.fuel_type {
                car.fuel_type = v;
            }
            if let Some(v) = updates.transmission {
                car.transmission = v;
            }
            if let Some(v) = updates.body_type {
                car.body_type = v;
            }
            if let Some(v) = updates.color.clone() {
                car.color = v;
            }
            if let Some(v) = updates.description.clone() {
                car.description = v;
            }
            if let Some(v) = updates.images.clone() {
                car.images = v;
            }
            if let Some(v) = updates.location.clone() {
                car.location = v;
            }
            if let Some(v) = updates.status {
                car.status = v;
            }
            if let Some(v) = updates.featured {
                car.featured = v;
            }
            car.updated_at = Utc::now();
            updated = Some(car.clone());
        }
        *guard = Arc::new(next);

        info!("Car updated: id={}", id);
        updated
    }

    /// 削除。id が無ければ何もしない（false）。二重削除もエラーにならない
    pub fn delete(&self, id: i64) -> bool {
        let mut guard = self.cars.write().unwrap();
        if !guard.iter().any(|c| c.id == id) {
            return false;
        }
        let next: Vec<Car> = guard.iter().filter(|c| c.id != id).cloned().collect();
        *guard = Arc::new(next);
        info!("Car deleted: id={}", id);
        true
    }

    /// フリーテキスト検索
    ///
    /// trim した上で title / brand / model / description の部分一致
    /// （大文字小文字を区別しない）。空白のみのクエリは全件を返す。
    pub fn search(&self, query: &str) -> Vec<Car> {
        let guard = self.cars.read().unwrap();
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return guard.iter().cloned().collect();
        }
        guard
            .iter()
            .filter(|car| {
                car.title.to_lowercase().contains(&q)
                    || car.brand.to_lowercase().contains(&q)
                    || car.model.to_lowercase().contains(&q)
                    || car.description.to_lowercase().contains(&q)
            })
            .cloned()
            .collect()
    }

    /// フィルタリング。存在する条件すべてを満たすものだけ通す（AND）
    pub fn filter(&self, filters: &CarFilters) -> Vec<Car> {
        let guard = self.cars.read().unwrap();
        guard
            .iter()
            .filter(|car| {
                if let Some(brand) = &filters.brand {
                    if &car.brand != brand {
                        return false;
                    }
                }
                if let Some(min) = filters.min_price {
                    if car.price < min {
                        return false;
                    }
                }
                if let Some(max) = filters.max_price {
                    if car.price > max {
                        return false;
                    }
                }
                if let Some(min) = filters.min_year {
                    if car.year < min {
                        return false;
                    }
                }
                if let Some(max) = filters.max_year {
                    if car.year > max {
                        return false;
                    }
                }
                if let Some(fuel) = filters.fuel_type {
                    if car.fuel_type != fuel {
                        return false;
                    }
                }
                if let Some(tm) = filters.transmission {
                    if car.transmission != tm {
                        return false;
                    }
                }
                if let Some(body) = filters.body_type {
                    if car.body_type != body {
                        return false;
                    }
                }
                if let Some(loc) = &filters.location {
                    if !car.location.to_lowercase().contains(&loc.to_lowercase()) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// おすすめ表示用ビュー（featured かつ active）。読むたびに再計算する
    pub fn featured(&self) -> Vec<Car> {
        self.cars
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.featured && c.status == CarStatus::Active)
            .cloned()
            .collect()
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 結果セットのソート（純粋関数、ストア状態には触れない）
pub fn sort_cars(mut cars: Vec<Car>, key: SortKey) -> Vec<Car> {
    match key {
        SortKey::PriceLow => cars.sort_by_key(|c| c.price),
        SortKey::PriceHigh => cars.sort_by_key(|c| std::cmp::Reverse(c.price)),
        SortKey::YearNew => cars.sort_by_key(|c| std::cmp::Reverse(c.year)),
        SortKey::YearOld => cars.sort_by_key(|c| c.year),
        SortKey::MileageLow => cars.sort_by_key(|c| c.mileage),
        SortKey::MileageHigh => cars.sort_by_key(|c| std::cmp::Reverse(c.mileage)),
        SortKey::Newest => cars.sort_by_key(|c| std::cmp::Reverse(c.created_at)),
    }
    cars
}
