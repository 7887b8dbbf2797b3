mod app;
mod execution;
mod loader;
mod resources;
mod roster;
mod search;
mod war;

use app::App;
use clandash_shared::DashboardConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        web_sys::console::warn_1(&"clandash: no #app mount element".into());
        return;
    };

    let query = window.location().search().unwrap_or_default();
    let config = DashboardConfig::resolve(
        &query,
        target.get_attribute("data-view").as_deref(),
        target.get_attribute("data-snapshot-base").as_deref(),
    );
    web_sys::console::info_1(
        &format!(
            "clandash: view={} snapshot={}",
            config.view.slug(),
            config.snapshot_url()
        )
        .into(),
    );

    APP_MOUNT_HANDLE.with(move |slot| {
        // Drop any previous mount so a re-entered main() can't leave stale effects running.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, move || view! { <App config=config /> });
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}
