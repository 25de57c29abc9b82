//! Browser bindings (wasm32 only).
//!
//! `start` resolves the table element once and passes it to the view as an
//! explicit handle; row delete buttons are served by a single delegated click
//! listener on that element.

use smart_inventory_products::ProductId;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, Window};

use crate::api::HttpProductApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::prompt::UserPrompt;
use crate::render::TableContainer;
use crate::view::ProductListView;

/// Table body element the loader writes into.
#[derive(Clone)]
pub struct ElementContainer {
    element: Element,
}

impl ElementContainer {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl TableContainer for ElementContainer {
    fn replace_contents(&mut self, html: String) {
        self.element.set_inner_html(&html);
    }
}

/// `window.confirm` / `window.alert`.
#[derive(Clone)]
pub struct BrowserPrompt {
    window: Window,
}

impl BrowserPrompt {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

type BrowserView = ProductListView<HttpProductApi, ElementContainer, BrowserPrompt>;

fn to_js(err: ClientError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Load the table into `#{container_id}` and wire its delete buttons.
///
/// The API is addressed relative to the page's origin.
#[wasm_bindgen]
pub async fn start(container_id: String) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    let origin = window.location().origin()?;
    let element = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?
        .get_element_by_id(&container_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {container_id}")))?;

    let config = ClientConfig::new(&origin).map_err(to_js)?;
    let api = HttpProductApi::new(&config).map_err(to_js)?;

    let make_view = {
        let element = element.clone();
        move || -> BrowserView {
            ProductListView::new(
                api.clone(),
                ElementContainer::new(element.clone()),
                BrowserPrompt::new(window.clone()),
            )
        }
    };

    // A failed first load is already shown in the table.
    let _ = make_view().load_products().await;

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(id) = delete_target(&event) else {
            return;
        };
        let mut view = make_view();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = view.delete_product(id).await;
        });
    });
    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_click.forget();

    Ok(())
}

/// Product id of the delete button the click landed on, if any.
fn delete_target(event: &Event) -> Option<ProductId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(".delete-btn").ok()??;
    button.get_attribute("data-product-id")?.parse().ok()
}
