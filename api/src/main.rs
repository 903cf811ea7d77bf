//! Storefront API Server
//!
//! CRUD REST API for customers, vendors and categories.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod dto;
mod entity;
mod error;
mod extract;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_tables, PostgresCategoryRepository, PostgresCustomerRepository,
    PostgresVendorRepository,
};
use app::{seed_data, CategoryService, CustomerService, VendorService};
use config::Config;
use domain::ports::{CategoryRepository, CustomerRepository, VendorRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<dyn CustomerRepository>>,
    pub vendor_service: Arc<VendorService<dyn VendorRepository>>,
    pub category_service: Arc<CategoryService<dyn CategoryRepository>>,
}

impl AppState {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        vendors: Arc<dyn VendorRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(customers)),
            vendor_service: Arc::new(VendorService::new(vendors)),
            category_service: Arc::new(CategoryService::new(categories)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let customers = dto::customer::BASE_URL;
    let vendors = dto::vendor::BASE_URL;
    let categories = dto::category::BASE_URL;

    Router::new()
        // Health check
        .route("/health", get(health))
        // Customers
        .route(
            customers,
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            &format!("{}/:id", customers),
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .patch(handlers::patch_customer)
                .delete(handlers::delete_customer),
        )
        // Vendors
        .route(
            vendors,
            get(handlers::list_vendors).post(handlers::create_vendor),
        )
        .route(
            &format!("{}/:id", vendors),
            get(handlers::get_vendor)
                .put(handlers::update_vendor)
                .patch(handlers::patch_vendor)
                .delete(handlers::delete_vendor),
        )
        // Categories
        .route(
            categories,
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            &format!("{}/:id", categories),
            get(handlers::get_category)
                .put(handlers::update_category)
                .patch(handlers::patch_category)
                .delete(handlers::delete_category),
        )
        .route(
            &format!("{}/name/:name", categories),
            get(handlers::get_category_by_name),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storefront API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    ensure_tables(&db)
        .await
        .context("Failed to create tables")?;

    // Create adapters
    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(PostgresCustomerRepository::new(db.clone()));
    let vendor_repo: Arc<dyn VendorRepository> =
        Arc::new(PostgresVendorRepository::new(db.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(db.clone()));

    if config.seed_data {
        seed_data(&*customer_repo, &*vendor_repo, &*category_repo)
            .await
            .context("Failed to load bootstrap data")?;
    }

    let app = router(AppState::new(customer_repo, vendor_repo, category_repo));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
