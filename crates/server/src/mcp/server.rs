//! MCP server handler exposing one tool per Shopify operation.

use std::future::Future;

use rmcp::ErrorData as McpError;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::{tool, tool_handler, tool_router};
use serde::Serialize;

use crate::config::ShopifyConfig;
use crate::shopify::{AdminClient, ShopifyError};

use super::envelope;
use super::error::ToolError;
use super::tools::{
    CountProductsInput, CreateCustomerInput, CreateProductInput, GetCustomerInput,
    GetInventoryLevelsInput, GetOrderInput, GetProductInput, ListCollectionsInput,
    ListCustomersInput, ListOrdersInput, ListProductsInput, SearchCustomersInput,
    UpdateProductInput,
};

const INSTRUCTIONS: &str = "Shopify Admin API tools for one store.\n\n\
    Resources: products (list, get, create, update, count), orders (list, get), \
    customers (list, get, create, search), custom collections (list), \
    inventory levels (by item or location IDs) and shop settings.\n\n\
    Every tool returns the Shopify JSON response as text. Failures are returned \
    as `Error: <message>` and include the HTTP status and body from Shopify.";

/// The Shopify MCP server handler.
///
/// Holds the Admin API client, or the reason it could not be built. Tools are
/// listed either way; without a client every call returns a failure envelope.
#[derive(Clone)]
pub struct ShopifyToolServer {
    client: Result<AdminClient, String>,
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for ShopifyToolServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyToolServer")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl ShopifyToolServer {
    /// Create a handler backed by a configured client.
    #[must_use]
    pub fn new(client: AdminClient) -> Self {
        Self {
            client: Ok(client),
            tool_router: Self::tool_router(),
        }
    }

    /// Create a handler whose tools all fail with `reason`.
    #[must_use]
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            client: Err(reason.into()),
            tool_router: Self::tool_router(),
        }
    }

    /// Build the client from `SHOPIFY_*` environment variables.
    ///
    /// Configuration problems do not prevent startup; they are reported by
    /// each tool call instead.
    #[must_use]
    pub fn from_env() -> Self {
        let client = ShopifyConfig::from_env()
            .map_err(|e| e.to_string())
            .and_then(|config| {
                tracing::info!(
                    store = %config.store_url,
                    api_version = %config.api_version,
                    "Shopify client configured"
                );
                AdminClient::new(&config).map_err(|e| e.to_string())
            });

        match client {
            Ok(client) => Self::new(client),
            Err(reason) => {
                tracing::warn!(%reason, "Shopify credentials unavailable, tool calls will fail");
                Self::unconfigured(reason)
            }
        }
    }

    /// Every tool with its name, description and input schema.
    #[must_use]
    pub fn tool_catalogue() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    /// Run one client operation and wrap its outcome in the envelope.
    async fn call<T, F, Fut>(&self, tool: &'static str, op: F) -> CallToolResult
    where
        T: Serialize,
        F: FnOnce(AdminClient) -> Fut + Send,
        Fut: Future<Output = Result<T, ShopifyError>> + Send,
    {
        tracing::info!(tool, "Tool call");
        let result = match &self.client {
            Ok(client) => op(client.clone()).await.map_err(ToolError::from),
            Err(reason) => Err(ToolError::Unavailable(reason.clone())),
        };
        envelope::respond(result)
    }
}

#[tool_router]
impl ShopifyToolServer {
    // =========================================================================
    // Products
    // =========================================================================

    #[tool(
        name = "shopify_list_products",
        description = "List products with pagination and filtering options."
    )]
    async fn list_products(
        &self,
        Parameters(input): Parameters<ListProductsInput>,
    ) -> Result<CallToolResult, McpError> {
        let params = input.validate()?;
        Ok(self
            .call("shopify_list_products", move |client| async move {
                client.list_products(&params).await
            })
            .await)
    }

    #[tool(name = "shopify_get_product", description = "Get a product by ID.")]
    async fn get_product(
        &self,
        Parameters(input): Parameters<GetProductInput>,
    ) -> Result<CallToolResult, McpError> {
        let id = input.validate()?;
        Ok(self
            .call("shopify_get_product", move |client| async move {
                client.get_product(id).await
            })
            .await)
    }

    #[tool(
        name = "shopify_create_product",
        description = "Create a new product, optionally with variants and images."
    )]
    async fn create_product(
        &self,
        Parameters(input): Parameters<CreateProductInput>,
    ) -> Result<CallToolResult, McpError> {
        let product = input.validate()?;
        Ok(self
            .call("shopify_create_product", move |client| async move {
                client.create_product(&product).await
            })
            .await)
    }

    #[tool(
        name = "shopify_update_product",
        description = "Update an existing product. Only the provided fields change."
    )]
    async fn update_product(
        &self,
        Parameters(input): Parameters<UpdateProductInput>,
    ) -> Result<CallToolResult, McpError> {
        let (id, update) = input.validate()?;
        Ok(self
            .call("shopify_update_product", move |client| async move {
                client.update_product(id, &update).await
            })
            .await)
    }

    #[tool(
        name = "shopify_count_products",
        description = "Count products with optional vendor and product type filters."
    )]
    async fn count_products(
        &self,
        Parameters(input): Parameters<CountProductsInput>,
    ) -> Result<CallToolResult, McpError> {
        let params = input.into_params();
        Ok(self
            .call("shopify_count_products", move |client| async move {
                client.count_products(&params).await
            })
            .await)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    #[tool(
        name = "shopify_list_orders",
        description = "List orders with status, payment and fulfillment filters."
    )]
    async fn list_orders(
        &self,
        Parameters(input): Parameters<ListOrdersInput>,
    ) -> Result<CallToolResult, McpError> {
        let params = input.validate()?;
        Ok(self
            .call("shopify_list_orders", move |client| async move {
                client.list_orders(&params).await
            })
            .await)
    }

    #[tool(name = "shopify_get_order", description = "Get an order by ID.")]
    async fn get_order(
        &self,
        Parameters(input): Parameters<GetOrderInput>,
    ) -> Result<CallToolResult, McpError> {
        let id = input.validate()?;
        Ok(self
            .call("shopify_get_order", move |client| async move {
                client.get_order(id).await
            })
            .await)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    #[tool(
        name = "shopify_list_customers",
        description = "List customers with pagination."
    )]
    async fn list_customers(
        &self,
        Parameters(input): Parameters<ListCustomersInput>,
    ) -> Result<CallToolResult, McpError> {
        let params = input.validate()?;
        Ok(self
            .call("shopify_list_customers", move |client| async move {
                client.list_customers(&params).await
            })
            .await)
    }

    #[tool(name = "shopify_get_customer", description = "Get a customer by ID.")]
    async fn get_customer(
        &self,
        Parameters(input): Parameters<GetCustomerInput>,
    ) -> Result<CallToolResult, McpError> {
        let id = input.validate()?;
        Ok(self
            .call("shopify_get_customer", move |client| async move {
                client.get_customer(id).await
            })
            .await)
    }

    #[tool(name = "shopify_create_customer", description = "Create a new customer.")]
    async fn create_customer(
        &self,
        Parameters(input): Parameters<CreateCustomerInput>,
    ) -> Result<CallToolResult, McpError> {
        let customer = input.validate()?;
        Ok(self
            .call("shopify_create_customer", move |client| async move {
                client.create_customer(&customer).await
            })
            .await)
    }

    #[tool(
        name = "shopify_search_customers",
        description = "Search customers with Shopify query syntax (e.g., email:bob@example.com)."
    )]
    async fn search_customers(
        &self,
        Parameters(input): Parameters<SearchCustomersInput>,
    ) -> Result<CallToolResult, McpError> {
        let query = input.validate()?;
        Ok(self
            .call("shopify_search_customers", move |client| async move {
                client.search_customers(&query).await
            })
            .await)
    }

    // =========================================================================
    // Collections, inventory, shop
    // =========================================================================

    #[tool(
        name = "shopify_list_collections",
        description = "List custom collections with pagination."
    )]
    async fn list_collections(
        &self,
        Parameters(input): Parameters<ListCollectionsInput>,
    ) -> Result<CallToolResult, McpError> {
        let params = input.validate()?;
        Ok(self
            .call("shopify_list_collections", move |client| async move {
                client.list_collections(&params).await
            })
            .await)
    }

    #[tool(
        name = "shopify_get_inventory_levels",
        description = "Get inventory levels by comma-separated inventory item or location IDs."
    )]
    async fn get_inventory_levels(
        &self,
        Parameters(input): Parameters<GetInventoryLevelsInput>,
    ) -> Result<CallToolResult, McpError> {
        let params = input.validate()?;
        Ok(self
            .call("shopify_get_inventory_levels", move |client| async move {
                client.get_inventory_levels(&params).await
            })
            .await)
    }

    #[tool(name = "shopify_get_shop", description = "Get shop information.")]
    async fn get_shop(&self) -> Result<CallToolResult, McpError> {
        Ok(self
            .call("shopify_get_shop", |client| async move {
                client.get_shop().await
            })
            .await)
    }
}

#[tool_handler]
impl rmcp::ServerHandler for ShopifyToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}
