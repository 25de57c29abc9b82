//! `smart-inventory-client`
//!
//! **Responsibility:** Thin client for the Smart Inventory server.
//!
//! This crate provides:
//! - An HTTP binding for the server's product endpoints
//! - HTML rendering of the product table into an explicit container handle
//! - The product list view: a list loader and a confirm-then-delete handler
//! - Browser bindings (wasm32) and the `inventory-cli` terminal front end
//!
//! The server stays the authority: nothing is cached between loads, and every
//! successful delete is followed by a full reload.

pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use api::{HttpProductApi, ProductApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use prompt::UserPrompt;
#[cfg(not(target_arch = "wasm32"))]
pub use prompt::TerminalPrompt;
pub use render::{HtmlBuffer, TableContainer};
pub use view::{DeleteStatus, ProductListView};
