//! Product table rendering.
//!
//! The table is addressed through an explicit [`TableContainer`] handle
//! instead of a global element lookup, so rendering can be checked without a
//! browser.

use askama::Template;

use smart_inventory_products::Product;

use crate::error::ClientResult;

/// Where the loader writes the table body.
///
/// Each call replaces everything previously written; nothing is diffed.
pub trait TableContainer {
    fn replace_contents(&mut self, html: String);
}

/// In-memory container used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlBuffer {
    html: String,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Number of `<tr` rows currently held.
    pub fn row_count(&self) -> usize {
        self.html.matches("<tr").count()
    }
}

impl TableContainer for HtmlBuffer {
    fn replace_contents(&mut self, html: String) {
        self.html = html;
    }
}

#[derive(Template)]
#[template(path = "product_rows.html")]
struct ProductRows<'a> {
    products: &'a [Product],
}

#[derive(Template)]
#[template(path = "error_row.html")]
struct ErrorRow<'a> {
    message: &'a str,
}

/// One `<tr>` per product, in the given order, ending with a delete button
/// carrying the product id in `data-product-id`.
pub fn render_rows(products: &[Product]) -> ClientResult<String> {
    Ok(ProductRows { products }.render()?)
}

/// A single full-width row carrying `message`.
pub fn render_error(message: &str) -> ClientResult<String> {
    Ok(ErrorRow { message }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smart_inventory_products::ProductId;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity: 12,
            price: 2.5,
            expiry_date: "2026-11-01".to_string(),
            supplier: "Farm Co".to_string(),
        }
    }

    #[test]
    fn renders_every_field_and_delete_control() {
        let html = render_rows(&[product(7, "Milk")]).unwrap();

        for cell in ["7", "Milk", "Dairy", "12", "2.5", "2026-11-01", "Farm Co"] {
            assert!(html.contains(&format!("<td>{cell}</td>")), "missing cell {cell}: {html}");
        }
        assert!(html.contains(r#"class="delete-btn" data-product-id="7""#));
    }

    #[test]
    fn whole_prices_drop_the_fraction() {
        let mut p = product(1, "Bread");
        p.price = 3.0;
        let html = render_rows(&[p]).unwrap();
        assert!(html.contains("<td>3</td>"));
    }

    #[test]
    fn markup_in_fields_is_escaped() {
        let html = render_rows(&[product(1, "<b>Salt & Co</b>")]).unwrap();
        assert!(html.contains("&lt;b&gt;Salt &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let html = render_rows(&[]).unwrap();
        assert!(!html.contains("<tr"));
    }

    #[test]
    fn error_row_spans_the_table() {
        let html = render_error("network error: refused").unwrap();
        assert!(html.contains(r#"<tr class="error-row"><td colspan="8">network error: refused</td></tr>"#));
    }

    #[test]
    fn buffer_replaces_contents_wholesale() {
        let mut buffer = HtmlBuffer::new();
        buffer.replace_contents(render_rows(&[product(1, "A"), product(2, "B")]).unwrap());
        assert_eq!(buffer.row_count(), 2);

        buffer.replace_contents(render_rows(&[product(3, "C")]).unwrap());
        assert_eq!(buffer.row_count(), 1);
        assert!(!buffer.as_str().contains("<td>A</td>"));
    }

    proptest! {
        #[test]
        fn one_row_per_product_in_server_order(names in proptest::collection::vec("[a-zA-Z0-9 ]{1,16}", 0..20)) {
            let products: Vec<Product> = names
                .iter()
                .enumerate()
                .map(|(i, name)| product(i as i64, name))
                .collect();

            let html = render_rows(&products).unwrap();
            prop_assert_eq!(html.matches("<tr>").count(), products.len());

            let mut cursor = 0;
            for p in &products {
                let needle = format!("<td>{}</td>\n    <td>{}</td>", p.id, p.name);
                let found = html[cursor..].find(&needle);
                prop_assert!(found.is_some(), "row {} out of order", p.id);
                cursor += found.unwrap_or_default() + needle.len();
            }
        }
    }
}
