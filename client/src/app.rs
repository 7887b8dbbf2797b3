use leptos::prelude::*;

use clandash_shared::notes::LOADING_NOTE;
use clandash_shared::{DashboardConfig, View};

use crate::execution::WarExecutionView;
use crate::resources::ResourcesView;
use crate::roster::RosterView;
use crate::war::WarView;

/// Text of the status line under the page header. Views replace it once their
/// snapshot loads or fails.
#[derive(Clone, Copy)]
pub(crate) struct StatusNote(pub RwSignal<String>);

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let status: RwSignal<String> = RwSignal::new(LOADING_NOTE.to_string());
    provide_context(StatusNote(status));
    provide_context(config.clone());

    let current = config.view;
    let links = View::ALL
        .into_iter()
        .map(|view| {
            let class = if view == current { "nav-link active" } else { "nav-link" };
            view! { <a class=class href=config.href_for(view)>{view.title()}</a> }
        })
        .collect_view();

    let body = match current {
        View::Clan => view! { <RosterView /> }.into_any(),
        View::Resources => view! { <ResourcesView /> }.into_any(),
        View::War => view! { <WarView /> }.into_any(),
        View::WarExecution => view! { <WarExecutionView /> }.into_any(),
    };

    view! {
        <header class="page-header">
            <h1>{current.title()}</h1>
            <nav class="view-nav">{links}</nav>
            <p class="data-note" role="status">{move || status.get()}</p>
        </header>
        <main class="page-body">{body}</main>
    }
}

/// Panel with a heading and a container whose markup comes from a renderer.
#[component]
pub(crate) fn Panel(
    title: &'static str,
    #[prop(into)] html: Signal<String>,
    #[prop(default = "panel-body")] class: &'static str,
) -> impl IntoView {
    view! {
        <section class="panel">
            <h2>{title}</h2>
            <div class=class inner_html=move || html.get() />
        </section>
    }
}
