use chrono::Local;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use clandash_shared::notes::resources_note;
use clandash_shared::render::resources::{
    render_coverage, render_donor_rows, render_recommendations,
};
use clandash_shared::resources::{
    DonorRow, coverage_sections, donor_rows, recommendation_cards,
};
use clandash_shared::{ClanSnapshot, DashboardConfig, filter_by_query};

use crate::app::{Panel, StatusNote};
use crate::loader::{fetch_snapshot, log_outcome};
use crate::search::SearchInput;

#[component]
pub fn ResourcesView() -> impl IntoView {
    let config: DashboardConfig = expect_context();
    let StatusNote(status) = expect_context();
    let snapshot: RwSignal<Option<ClanSnapshot>> = RwSignal::new(None);
    let query: RwSignal<String> = RwSignal::new(String::new());

    spawn_local(async move {
        let result =
            fetch_snapshot::<ClanSnapshot>(&config.snapshot_url(), config.snapshot_file()).await;
        log_outcome(&result, |data| {
            let resources = &data.aggregates.resources;
            format!(
                "resources loaded: categories={} recommendations={}",
                resources.top_donors.len(),
                resources.recommendations.len()
            )
        });
        match result {
            Ok(data) => {
                status.set(resources_note(&data, &Local));
                snapshot.set(Some(data));
            }
            Err(e) => status.set(e.to_string()),
        }
    });

    // Flattened and sorted once per load; the filter only narrows it.
    let rows = Memo::new(move |_| {
        snapshot.with(|data| {
            data.as_ref()
                .map(|s| donor_rows(&s.aggregates.resources))
                .unwrap_or_default()
        })
    });

    let donors_html = move || {
        if snapshot.with(Option::is_none) {
            return String::new();
        }
        let needle = query.get();
        rows.with(|rows| {
            let kept: Vec<DonorRow> = filter_by_query(rows, &needle).into_iter().cloned().collect();
            render_donor_rows(&kept)
        })
    };
    let coverage_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|s| render_coverage(&coverage_sections(&s.aggregates.resources)))
                .unwrap_or_default()
        })
    };
    let recommendations_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|s| render_recommendations(&recommendation_cards(&s.aggregates.resources)))
                .unwrap_or_default()
        })
    };

    view! {
        <section class="panel">
            <div class="panel-heading">
                <h2>"Donadores por unidad"</h2>
                <SearchInput query=query placeholder="Buscar unidad o categoría" />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Unidad"</th>
                        <th>"Categoría"</th>
                        <th>"Donadores"</th>
                    </tr>
                </thead>
                <tbody inner_html=donors_html />
            </table>
        </section>
        <Panel title="Brechas de cobertura" html=Signal::derive(coverage_html) class="coverage-grid" />
        <Panel
            title="Recomendaciones"
            html=Signal::derive(recommendations_html)
            class="recommendation-grid"
        />
    }
}
