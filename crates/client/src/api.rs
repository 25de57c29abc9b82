//! HTTP binding for the inventory server's product endpoints.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use url::Url;

use smart_inventory_products::{
    AddProductResponse, CategorySummary, DeleteResponse, ListResponse, NewProduct, Product,
    ProductId, ReportResponse,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Category value the server treats as "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// Characters escaped in a category filter.
///
/// The server reads the raw query and only decodes `%XX`, so a space must go
/// out as `%20`, never the form-encoded `+`.
const CATEGORY_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn category_query(category: &str) -> String {
    format!("category={}", utf8_percent_encode(category, CATEGORY_ESCAPES))
}

/// The server calls the client depends on.
///
/// Futures are `?Send`: the view runs on a single cooperative thread (the
/// browser event loop, or a current-thread runtime in the CLI).
#[async_trait(?Send)]
pub trait ProductApi {
    /// `GET /viewProducts`, rows in server order.
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// `POST /deleteProduct?id={id}`.
    async fn delete_product(&self, id: ProductId) -> ClientResult<DeleteResponse>;

    /// `POST /addProduct` with a JSON body.
    async fn add_product(&self, product: &NewProduct) -> ClientResult<AddProductResponse>;

    /// `GET /expiryAlerts`: products expiring within the server's window.
    ///
    /// `None` and `"All"` both mean every category.
    async fn expiry_alerts(&self, category: Option<&str>) -> ClientResult<Vec<Product>>;

    /// `GET /dashboardData`.
    async fn dashboard(&self) -> ClientResult<Vec<CategorySummary>>;

    /// `GET /generateReport`.
    async fn generate_report(&self) -> ClientResult<ReportResponse>;
}

/// [`ProductApi`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(request: reqwest::RequestBuilder) -> ClientResult<Vec<u8>> {
        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api(status.as_u16(), body));
        }

        Ok(resp.bytes().await?.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> ClientResult<T> {
        let bytes = Self::send(request).await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, url: Url) -> ClientResult<Vec<T>> {
        let bytes = Self::send(self.client.get(url)).await?;
        ListResponse::<T>::from_slice(&bytes)
            .map_err(|e| ClientError::Parse(e.to_string()))?
            .into_result()
            .map_err(ClientError::Server)
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    #[tracing::instrument(skip(self))]
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let url = self.endpoint("viewProducts")?;
        self.fetch_rows(url).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> ClientResult<DeleteResponse> {
        let mut url = self.endpoint("deleteProduct")?;
        url.query_pairs_mut().append_pair("id", &id.to_string());
        Self::send_json(self.client.post(url)).await
    }

    #[tracing::instrument(skip(self, product), fields(name = %product.product_name))]
    async fn add_product(&self, product: &NewProduct) -> ClientResult<AddProductResponse> {
        let url = self.endpoint("addProduct")?;
        Self::send_json(self.client.post(url).json(product)).await
    }

    #[tracing::instrument(skip(self))]
    async fn expiry_alerts(&self, category: Option<&str>) -> ClientResult<Vec<Product>> {
        let mut url = self.endpoint("expiryAlerts")?;
        if let Some(category) = category.filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES)) {
            url.set_query(Some(&category_query(category)));
        }
        self.fetch_rows(url).await
    }

    #[tracing::instrument(skip(self))]
    async fn dashboard(&self) -> ClientResult<Vec<CategorySummary>> {
        let url = self.endpoint("dashboardData")?;
        self.fetch_rows(url).await
    }

    #[tracing::instrument(skip(self))]
    async fn generate_report(&self) -> ClientResult<ReportResponse> {
        let url = self.endpoint("generateReport")?;
        Self::send_json(self.client.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_base_path() {
        let config = ClientConfig::new("http://inventory.local/app").unwrap();
        let api = HttpProductApi::new(&config).unwrap();

        assert_eq!(
            api.endpoint("viewProducts").unwrap().as_str(),
            "http://inventory.local/app/viewProducts"
        );
    }

    #[test]
    fn category_filter_escapes_spaces_as_percent_20() {
        assert_eq!(category_query("Personal Care"), "category=Personal%20Care");
        assert_eq!(category_query("Dairy"), "category=Dairy");
        assert_eq!(category_query("Bakery & Co"), "category=Bakery%20%26%20Co");
    }

    #[test]
    fn endpoints_join_under_root() {
        let config = ClientConfig::new("http://localhost:8080").unwrap();
        let api = HttpProductApi::new(&config).unwrap();

        assert_eq!(
            api.endpoint("deleteProduct").unwrap().as_str(),
            "http://localhost:8080/deleteProduct"
        );
    }
}
