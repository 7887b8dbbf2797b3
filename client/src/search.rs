use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Free-text filter box. Every keystroke updates `query`; listeners re-render.
#[component]
pub fn SearchInput(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        query.set(input.value());
    };

    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            aria-label=placeholder
            prop:value=move || query.get()
            on:input=on_input
        />
    }
}
