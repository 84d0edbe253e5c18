//! REST client for the Shopify Admin API.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use shopify_admin_mcp_core::{CustomerId, OrderId, ProductId, SearchQuery};
use tracing::instrument;
use url::Url;

use crate::config::ShopifyConfig;

use super::{
    ShopifyError,
    types::{
        CollectionListParams, CollectionsResponse, CountResponse, CustomerBody,
        CustomerListParams, CustomerResponse, CustomersResponse, InventoryLevelParams,
        InventoryLevelsResponse, NewCustomer, NewProduct, OrderListParams, OrderResponse,
        OrdersResponse, ProductBody, ProductCountParams, ProductListParams, ProductResponse,
        ProductUpdate, ProductsResponse, ShopResponse, Verbatim,
    },
};

const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shopify Admin REST API client.
///
/// One method per supported endpoint. Each call performs exactly one HTTP
/// request; there is no retry, caching or pagination traversal.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    /// `{store_url}/admin/api/{api_version}`
    base_url: String,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// The access token and JSON content headers are attached to every
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::InvalidToken`] if the token contains characters
    /// not allowed in a header, or [`ShopifyError::Http`] if the HTTP client
    /// cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        let mut token = HeaderValue::from_str(config.access_token())?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                base_url: config.api_base_url(),
            }),
        })
    }

    /// Base URL of the versioned REST API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List one page of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Shopify rejects it.
    #[instrument(skip(self), fields(limit = %params.limit))]
    pub async fn list_products(
        &self,
        params: &ProductListParams,
    ) -> Result<Verbatim<ProductsResponse>, ShopifyError> {
        self.get("/products.json", &params.query()).await
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(
        &self,
        id: ProductId,
    ) -> Result<Verbatim<ProductResponse>, ShopifyError> {
        self.get(&format!("/products/{id}.json"), &[]).await
    }

    /// Create a product, optionally with variants and images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Shopify rejects the product.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn create_product(
        &self,
        product: &NewProduct,
    ) -> Result<Verbatim<ProductResponse>, ShopifyError> {
        let body = ProductBody { product };
        self.send_json(reqwest::Method::POST, "/products.json", &body)
            .await
    }

    /// Update the provided fields of a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product does not exist.
    #[instrument(skip(self, update), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Verbatim<ProductResponse>, ShopifyError> {
        let body = ProductBody { product: update };
        self.send_json(reqwest::Method::PUT, &format!("/products/{id}.json"), &body)
            .await
    }

    /// Count products, optionally filtered by vendor or type.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn count_products(
        &self,
        params: &ProductCountParams,
    ) -> Result<Verbatim<CountResponse>, ShopifyError> {
        self.get("/products/count.json", &params.query()).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List one page of orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(limit = %params.limit))]
    pub async fn list_orders(
        &self,
        params: &OrderListParams,
    ) -> Result<Verbatim<OrdersResponse>, ShopifyError> {
        self.get("/orders.json", &params.query()).await
    }

    /// Get a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order does not exist.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(
        &self,
        id: OrderId,
    ) -> Result<Verbatim<OrderResponse>, ShopifyError> {
        self.get(&format!("/orders/{id}.json"), &[]).await
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// List one page of customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(limit = %params.limit))]
    pub async fn list_customers(
        &self,
        params: &CustomerListParams,
    ) -> Result<Verbatim<CustomersResponse>, ShopifyError> {
        self.get("/customers.json", &params.query()).await
    }

    /// Get a single customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer does not exist.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(
        &self,
        id: CustomerId,
    ) -> Result<Verbatim<CustomerResponse>, ShopifyError> {
        self.get(&format!("/customers/{id}.json"), &[]).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Shopify rejects the customer
    /// (for example, a duplicate email).
    #[instrument(skip(self, customer))]
    pub async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<Verbatim<CustomerResponse>, ShopifyError> {
        let body = CustomerBody { customer };
        self.send_json(reqwest::Method::POST, "/customers.json", &body)
            .await
    }

    /// Search customers with Shopify's query syntax (e.g., `email:bob@example.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, query))]
    pub async fn search_customers(
        &self,
        query: &SearchQuery,
    ) -> Result<Verbatim<CustomersResponse>, ShopifyError> {
        self.get(
            "/customers/search.json",
            &[("query", query.as_str().to_string())],
        )
        .await
    }

    // =========================================================================
    // Collections, inventory, shop
    // =========================================================================

    /// List one page of custom collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(limit = %params.limit))]
    pub async fn list_collections(
        &self,
        params: &CollectionListParams,
    ) -> Result<Verbatim<CollectionsResponse>, ShopifyError> {
        self.get("/custom_collections.json", &params.query()).await
    }

    /// Get inventory levels for the given items and/or locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. Shopify answers 422 when neither
    /// ID list is given.
    #[instrument(skip(self), fields(limit = %params.limit))]
    pub async fn get_inventory_levels(
        &self,
        params: &InventoryLevelParams,
    ) -> Result<Verbatim<InventoryLevelsResponse>, ShopifyError> {
        self.get("/inventory_levels.json", &params.query()).await
    }

    /// Get the shop's settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_shop(&self) -> Result<Verbatim<ShopResponse>, ShopifyError> {
        self.get("/shop.json", &[]).await
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn endpoint(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url, ShopifyError> {
        let mut url = Url::parse(&format!("{}{path}", self.inner.base_url))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Verbatim<T>, ShopifyError> {
        let url = self.endpoint(path, query)?;
        self.execute(self.inner.client.get(url)).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<Verbatim<T>, ShopifyError> {
        let url = self.endpoint(path, &[])?;
        let body = serde_json::to_vec(body)?;
        self.execute(self.inner.client.request(method, url).body(body))
            .await
    }

    /// Send a request and decode a 2xx JSON body, keeping the document.
    ///
    /// Non-2xx responses become [`ShopifyError::Api`] with the body verbatim.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Verbatim<T>, ShopifyError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Shopify API returned an error");
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Shopify API response");
        Ok(Verbatim::from_json(&body)?)
    }
}
