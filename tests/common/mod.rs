//! Shared test helpers: an in-memory repository that can be told to fail, and request helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use product_api::{app, AppError, AppState, PaginationDefaults, Product, ProductInput, ProductRepository};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i32>,
    pub fail_count: AtomicBool,
    pub fail_page: AtomicBool,
    pub fail_writes: AtomicBool,
    /// (limit, offset) of every page query.
    pub page_calls: Mutex<Vec<(i64, i64)>>,
}

impl MemoryRepository {
    pub fn with_products(n: usize) -> Self {
        let repo = MemoryRepository::default();
        for i in 1..=n {
            repo.push(ProductInput {
                name: format!("Product {}", i),
                description: format!("Description {}", i),
                price: 50.0 * i as f64,
                stock: i as i32,
            });
        }
        repo
    }

    fn push(&self, input: ProductInput) {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        self.rows.lock().unwrap().push(input.into_product(*next));
    }

    pub fn rows(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }

    fn storage_error() -> AppError {
        AppError::Db(sqlx::Error::PoolClosed)
    }

    fn check(flag: &AtomicBool) -> Result<(), AppError> {
        if flag.load(Ordering::SeqCst) {
            return Err(Self::storage_error());
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryRepository {
    async fn insert(&self, input: &ProductInput) -> Result<(), AppError> {
        Self::check(&self.fail_writes)?;
        self.push(input.clone());
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        Self::check(&self.fail_page)?;
        Ok(self.rows.lock().unwrap().iter().find(|p| i64::from(p.id) == id).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Self::check(&self.fail_count)?;
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<Product>, AppError> {
        self.page_calls.lock().unwrap().push((limit, offset));
        Self::check(&self.fail_page)?;
        let mut rows = self.rows();
        rows.sort_by_key(|p| p.id);
        Ok(rows.into_iter().skip(offset as usize).take(limit as usize).collect())
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), AppError> {
        Self::check(&self.fail_writes)?;
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|p| i64::from(p.id) == id) {
            *row = input.clone().into_product(row.id);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        Self::check(&self.fail_writes)?;
        self.rows.lock().unwrap().retain(|p| i64::from(p.id) != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Self::check(&self.fail_count)
    }
}

pub fn test_app(repo: Arc<MemoryRepository>) -> Router {
    test_app_with(repo, PaginationDefaults::default())
}

pub fn test_app_with(repo: Arc<MemoryRepository>, pagination: PaginationDefaults) -> Router {
    app(AppState::new(repo, pagination), 1024 * 1024)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let req = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
