//! The product list view: list loader and delete handler.
//!
//! The view owns no product state. Every load replaces the container with the
//! server's current collection, and every successful delete triggers a full
//! reload rather than removing the row locally.

use smart_inventory_products::{DeleteOutcome, ProductId};

use crate::api::ProductApi;
use crate::error::{ClientError, ClientResult};
use crate::prompt::UserPrompt;
use crate::render::{self, TableContainer};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";
pub const DELETE_SUCCEEDED: &str = "Product deleted successfully!";

/// How a delete request ended, when it did not fail at the transport level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStatus {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The server deleted the product and the table was reloaded.
    Deleted,
    /// The server refused; carries the message shown to the user.
    Rejected(String),
}

pub struct ProductListView<A, C, P> {
    api: A,
    container: C,
    prompt: P,
}

impl<A, C, P> ProductListView<A, C, P>
where
    A: ProductApi,
    C: TableContainer,
    P: UserPrompt,
{
    pub fn new(api: A, container: C, prompt: P) -> Self {
        Self {
            api,
            container,
            prompt,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Fetch the collection and replace the table with one row per product.
    ///
    /// On failure the table is replaced with an error row and the error is
    /// returned. Returns the number of rows rendered.
    pub async fn load_products(&mut self) -> ClientResult<usize> {
        let products = match self.api.list_products().await {
            Ok(products) => products,
            Err(err) => {
                tracing::error!("failed to load products: {err}");
                self.show_error(&err);
                return Err(err);
            }
        };

        let html = render::render_rows(&products)?;
        self.container.replace_contents(html);

        tracing::info!(rows = products.len(), "product table rendered");
        Ok(products.len())
    }

    /// Confirm, request deletion of `id`, and reload the table on success.
    ///
    /// Transport failures are alerted and returned as errors. A failed reload
    /// after a successful delete is left visible in the table and does not
    /// change the returned status.
    pub async fn delete_product(&mut self, id: ProductId) -> ClientResult<DeleteStatus> {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            tracing::debug!(%id, "delete cancelled by user");
            return Ok(DeleteStatus::Cancelled);
        }

        let response = match self.api.delete_product(id).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%id, "delete request failed: {err}");
                self.prompt.alert(&format!("Failed to delete product: {err}"));
                return Err(err);
            }
        };

        match response.outcome() {
            DeleteOutcome::Deleted => {
                tracing::info!(%id, "product deleted");
                self.prompt.alert(DELETE_SUCCEEDED);
                if let Err(err) = self.load_products().await {
                    tracing::warn!(%id, "reload after delete failed: {err}");
                }
                Ok(DeleteStatus::Deleted)
            }
            DeleteOutcome::Rejected(message) => {
                tracing::warn!(%id, "delete rejected: {message}");
                self.prompt.alert(&message);
                Ok(DeleteStatus::Rejected(message))
            }
        }
    }

    fn show_error(&mut self, err: &ClientError) {
        let message = format!("Failed to load products: {err}");
        let html = render::render_error(&message).unwrap_or_default();
        self.container.replace_contents(html);
    }
}
