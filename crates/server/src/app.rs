//! # Application Router
//!
//! Shared handler state and the route table.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use storefront_core::auth::CredentialAcceptor;
use storefront_core::catalog::CatalogSource;
use storefront_core::state::Store;
use tower_http::trace::TraceLayer;

use crate::{api, assets, pages};

/// Handler state; cheap to clone
///
/// There is one store per process: every client sees the same cart,
/// filters and notices. This is a single-user server and must not be
/// exposed as a shared multi-tenant shop.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub catalog: Arc<dyn CatalogSource>,
    pub acceptor: Arc<dyn CredentialAcceptor>,
}

impl AppState {
    pub fn new(
        store: Arc<Store>,
        catalog: Arc<dyn CatalogSource>,
        acceptor: Arc<dyn CredentialAcceptor>,
    ) -> Self {
        Self {
            store,
            catalog,
            acceptor,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::shop::index))
        .route("/product/:id", get(pages::product::detail))
        .route("/filters", post(pages::shop::update_filters))
        .route("/filters/clear", post(pages::shop::clear_filters))
        .route("/reload", post(pages::shop::reload))
        .route(
            "/login",
            get(pages::auth::login_page).post(pages::auth::login),
        )
        .route(
            "/signup",
            get(pages::auth::signup_page).post(pages::auth::signup),
        )
        .route("/cart", get(pages::cart::drawer))
        .route("/cart/add/:id", post(pages::cart::add))
        .route("/cart/:id/increment", post(pages::cart::increment))
        .route("/cart/:id/decrement", post(pages::cart::decrement))
        .route("/cart/:id/remove", post(pages::cart::remove))
        .nest("/api/v1", api::routes())
        .route("/assets/*path", get(assets::serve_asset))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::{redirect::Policy, StatusCode};
    use rust_decimal::Decimal;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use storefront_core::auth::MockAcceptor;
    use storefront_core::catalog::CatalogError;
    use storefront_core::models::{Product, Rating};
    use tokio::net::TcpListener;

    struct FixedCatalog {
        products: Vec<Product>,
        fail: AtomicBool,
        loads: AtomicUsize,
    }

    impl FixedCatalog {
        fn new() -> Self {
            let product = |id: u64, title: &str, category: &str, cents: i64| Product {
                id,
                title: title.to_string(),
                price: Decimal::new(cents, 2),
                description: format!("About {}", title),
                category: category.to_string(),
                image: format!("https://img.example/{}.png", id),
                rating: Rating {
                    rate: 4.1,
                    count: 50,
                },
            };
            Self {
                products: vec![
                    product(1, "Fjallraven Backpack", "men's clothing", 10995),
                    product(2, "Slim Fit T-Shirt", "men's clothing", 2230),
                    product(3, "Gold Bracelet", "jewelery", 69500),
                    product(4, "Cotton Jacket", "men's clothing", 5599),
                ],
                fail: AtomicBool::new(false),
                loads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(CatalogError::Status {
                    endpoint: "/products".to_string(),
                    status: 503,
                });
            }
            Ok(self.products.clone())
        }

        async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
            Ok(vec!["jewelery".to_string(), "men's clothing".to_string()])
        }
    }

    struct TestServer {
        base: String,
        client: reqwest::Client,
        store: Arc<Store>,
        catalog: Arc<FixedCatalog>,
    }

    impl TestServer {
        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base, path)
        }

        async fn get(&self, path: &str) -> reqwest::Response {
            self.client.get(self.url(path)).send().await.unwrap()
        }

        async fn post(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
            self.client
                .post(self.url(path))
                .form(form)
                .send()
                .await
                .unwrap()
        }
    }

    fn location(response: &reqwest::Response) -> &str {
        response
            .headers()
            .get(reqwest::header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    async fn start(loaded: bool) -> TestServer {
        let store = Arc::new(Store::new());
        let catalog = Arc::new(FixedCatalog::new());
        if loaded {
            store.load(catalog.as_ref()).await.unwrap();
        }
        let state = AppState::new(store.clone(), catalog.clone(), Arc::new(MockAcceptor));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });

        TestServer {
            base: format!("http://{}", addr),
            client: reqwest::Client::builder()
                .redirect(Policy::none())
                .build()
                .unwrap(),
            store,
            catalog,
        }
    }

    #[tokio::test]
    async fn test_shop_shows_loading_before_catalog_arrives() {
        let server = start(false).await;
        let body = server.get("/").await.text().await.unwrap();
        assert!(body.contains(r#"aria-busy="true""#));
        assert!(!body.contains("Slim Fit T-Shirt"));
    }

    #[tokio::test]
    async fn test_filters_narrow_the_grid() {
        let server = start(true).await;

        let response = server
            .post(
                "/filters",
                &[("search", "SHIRT"), ("category", "men's clothing"), ("max_price", "100")],
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let body = server.get("/").await.text().await.unwrap();
        assert!(body.contains("Slim Fit T-Shirt"));
        assert!(!body.contains("Fjallraven Backpack"));
        assert!(!body.contains("Gold Bracelet"));

        server.post("/filters/clear", &[]).await;
        let state = server.store.snapshot().await;
        assert!(state.filters.search.is_empty());
        assert_eq!(state.filters.max_price, Decimal::from(695));
    }

    #[tokio::test]
    async fn test_invalid_max_price_is_ignored() {
        let server = start(true).await;
        server.post("/filters", &[("max_price", "lots")]).await;
        let state = server.store.snapshot().await;
        assert_eq!(state.filters.max_price, Decimal::from(695));
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let server = start(true).await;

        let response = server
            .client
            .post(server.url("/cart/add/2"))
            .header(reqwest::header::REFERER, server.url("/product/2"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/product/2");

        server.post("/cart/add/2", &[]).await;
        server.post("/cart/add/4", &[]).await;
        let body = server.get("/").await.text().await.unwrap();
        assert!(body.contains(r#"id="cart-count">3<"#));

        let response = server.post("/cart/2/decrement", &[]).await;
        assert_eq!(location(&response), "/cart");
        server.post("/cart/2/decrement", &[]).await;
        assert_eq!(server.store.read(|s| s.cart.quantity(2)).await, 1);

        server.post("/cart/4/increment", &[]).await;
        server.post("/cart/2/remove", &[]).await;

        let body = server.get("/cart").await.text().await.unwrap();
        assert!(!body.contains("Slim Fit T-Shirt"));
        assert!(body.contains("Cotton Jacket"));
        assert!(body.contains("<strong>$111.98</strong>"));

        let cart: serde_json::Value = server.get("/api/v1/cart").await.json().await.unwrap();
        assert_eq!(cart["item_count"], 2);
        assert_eq!(cart["total"], "111.98");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let server = start(true).await;
        let response = server.get("/product/999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.text().await.unwrap().contains("Product not found"));

        let response = server.get("/product/abc").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_detail_lists_related() {
        let server = start(true).await;
        let response = server.get("/product/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.text().await.unwrap();
        assert!(body.contains("<h1>Fjallraven Backpack</h1>"));
        assert!(body.contains("Similar <span>Products</span>"));
        assert!(body.contains("Slim Fit T-Shirt"));
        assert!(!body.contains("Gold Bracelet"));
    }

    #[tokio::test]
    async fn test_login_validation_and_redirect() {
        let server = start(true).await;

        let response = server
            .post("/login", &[("email", "ada@example.com"), ("password", "")])
            .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.text().await.unwrap();
        assert!(body.contains("Password is required"));
        assert!(body.contains(r#"value="ada@example.com""#));

        let response = server
            .post("/login", &[("email", "ada@example.com"), ("password", "secret")])
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let body = server.get("/").await.text().await.unwrap();
        assert!(body.contains("Signed in successfully!"));
        let body = server.get("/").await.text().await.unwrap();
        assert!(!body.contains("Signed in successfully!"));
    }

    #[tokio::test]
    async fn test_signup_requires_terms() {
        let server = start(true).await;
        let fields = [
            ("full_name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("password", "secret"),
        ];

        let response = server.post("/signup", &fields).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response
            .text()
            .await
            .unwrap()
            .contains("You must accept the terms"));

        let mut accepted = fields.to_vec();
        accepted.push(("accept_terms", "on"));
        let response = server.post("/signup", &accepted).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");

        let body = server.get("/login").await.text().await.unwrap();
        assert!(body.contains("Account created successfully!"));
    }

    #[tokio::test]
    async fn test_reload_recovers_from_failure() {
        let server = start(false).await;
        server.catalog.fail.store(true, Ordering::SeqCst);
        let _ = server.store.load(server.catalog.as_ref()).await;

        let body = server.get("/").await.text().await.unwrap();
        assert!(body.contains("Try Again"));

        server.catalog.fail.store(false, Ordering::SeqCst);
        let response = server.post("/reload", &[]).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(server.catalog.loads.load(Ordering::SeqCst), 2);

        let catalog: serde_json::Value = server.get("/api/v1/catalog").await.json().await.unwrap();
        assert_eq!(catalog["status"], "loaded");
        assert_eq!(catalog["total"], 4);
    }

    #[tokio::test]
    async fn test_event_stream_delivers_store_events() {
        let server = start(true).await;
        let mut response = server.get("/api/v1/events").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/event-stream"));

        server.post("/cart/add/2", &[]).await;

        let mut body = String::new();
        let read = async {
            while !body.contains("\n\n") {
                let chunk = response.chunk().await.unwrap().unwrap();
                body.push_str(&String::from_utf8_lossy(&chunk));
            }
        };
        tokio::time::timeout(std::time::Duration::from_secs(5), read)
            .await
            .unwrap();

        assert!(body.contains("event: store"));
        assert!(body.contains(r#""kind":"cart_changed""#));
        assert!(body.contains(r#""quantity":1"#));
    }

    #[tokio::test]
    async fn test_openapi_and_assets() {
        let server = start(false).await;

        let doc: serde_json::Value = server
            .get("/api/v1/openapi.json")
            .await
            .json()
            .await
            .unwrap();
        assert!(doc["paths"]["/api/v1/catalog"].is_object());

        let response = server.get("/assets/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/css"));

        assert_eq!(
            server.get("/assets/missing.js").await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(server.get("/nowhere").await.status(), StatusCode::NOT_FOUND);
    }
}
