use chrono::Local;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use clandash_shared::histogram::build_th_histogram;
use clandash_shared::notes::roster_note;
use clandash_shared::render::roster::{render_kpis, render_player_rows, render_th_chart};
use clandash_shared::roster::{build_kpis, player_rows};
use clandash_shared::{ClanSnapshot, DashboardConfig, filter_by_query};

use crate::app::{Panel, StatusNote};
use crate::loader::{fetch_snapshot, log_outcome};
use crate::search::SearchInput;

#[component]
pub fn RosterView() -> impl IntoView {
    let config: DashboardConfig = expect_context();
    let StatusNote(status) = expect_context();
    let snapshot: RwSignal<Option<ClanSnapshot>> = RwSignal::new(None);
    let query: RwSignal<String> = RwSignal::new(String::new());

    spawn_local(async move {
        let result =
            fetch_snapshot::<ClanSnapshot>(&config.snapshot_url(), config.snapshot_file()).await;
        log_outcome(&result, |data| {
            format!("clan snapshot loaded: members={}", data.members.len())
        });
        match result {
            Ok(data) => {
                status.set(roster_note(&data, &Local));
                snapshot.set(Some(data));
            }
            Err(e) => status.set(e.to_string()),
        }
    });

    let kpis_html = move || {
        snapshot.with(|data| data.as_ref().map(|s| render_kpis(&build_kpis(s))).unwrap_or_default())
    };
    let chart_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|s| render_th_chart(&build_th_histogram(&s.aggregates.th_distribution)))
                .unwrap_or_default()
        })
    };
    let players_html = move || {
        let needle = query.get();
        snapshot.with(|data| {
            data.as_ref()
                .map(|s| render_player_rows(&player_rows(filter_by_query(&s.members, &needle))))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="kpi-grid" inner_html=kpis_html />
        <Panel title="Distribución de TH" html=Signal::derive(chart_html) class="histogram" />
        <section class="panel">
            <div class="panel-heading">
                <h2>"Jugadores"</h2>
                <SearchInput query=query placeholder="Buscar por nombre o tag" />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Jugador"</th>
                        <th>"TH"</th>
                        <th>"Poder promedio"</th>
                        <th>"Top investigaciones"</th>
                        <th>"Super activos"</th>
                    </tr>
                </thead>
                <tbody inner_html=players_html />
            </table>
        </section>
    }
}
