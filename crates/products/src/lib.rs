//! Product wire model for the Smart Inventory API.
//!
//! This crate contains the records exchanged with the inventory server,
//! implemented purely as data and decoding rules (no IO, no HTTP, no rendering).

pub mod product;
pub mod responses;

pub use product::{CategorySummary, NewProduct, Product, ProductId};
pub use responses::{
    AddProductResponse, DEFAULT_DELETE_FAILURE, DeleteOutcome, DeleteResponse, ListResponse,
    ReportResponse,
};
