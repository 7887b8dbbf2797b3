use chrono::Local;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use clandash_shared::execution::{
    attack_rows, discipline_rows, leaderboard_cards, scatter_points,
};
use clandash_shared::notes::execution_note;
use clandash_shared::render::execution::{
    render_attack_rows, render_discipline_rows, render_leaderboards, render_scatter,
};
use clandash_shared::{DashboardConfig, WarExecution, filter_by_query};

use crate::app::{Panel, StatusNote};
use crate::loader::{fetch_snapshot, log_outcome};
use crate::search::SearchInput;

#[component]
pub fn WarExecutionView() -> impl IntoView {
    let config: DashboardConfig = expect_context();
    let StatusNote(status) = expect_context();
    let snapshot: RwSignal<Option<WarExecution>> = RwSignal::new(None);
    let query: RwSignal<String> = RwSignal::new(String::new());

    spawn_local(async move {
        let result =
            fetch_snapshot::<WarExecution>(&config.snapshot_url(), config.snapshot_file()).await;
        log_outcome(&result, |data| {
            format!(
                "war execution loaded: players={} attacks={}",
                data.players.len(),
                data.attacks.len()
            )
        });
        match result {
            Ok(data) => {
                status.set(execution_note(&data, &Local));
                snapshot.set(Some(data));
            }
            Err(e) => status.set(e.to_string()),
        }
    });

    let leaderboards_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|x| render_leaderboards(&leaderboard_cards(&x.leaderboards)))
                .unwrap_or_default()
        })
    };
    let scatter_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|x| render_scatter(&scatter_points(&x.scatter)))
                .unwrap_or_default()
        })
    };
    let discipline_html = move || {
        let needle = query.get();
        snapshot.with(|data| {
            data.as_ref()
                .map(|x| render_discipline_rows(&discipline_rows(filter_by_query(&x.players, &needle))))
                .unwrap_or_default()
        })
    };
    let attacks_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|x| render_attack_rows(&attack_rows(&x.attacks)))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="leaderboards" inner_html=leaderboards_html />
        <Panel title="Delta vs estrellas" html=Signal::derive(scatter_html) class="scatter-plot" />
        <section class="panel">
            <div class="panel-heading">
                <h2>"Disciplina de ataques"</h2>
                <SearchInput query=query placeholder="Buscar jugador o tag" />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Jugador"</th>
                        <th>"Ataques"</th>
                        <th>"Estrellas"</th>
                        <th>"Destrucción prom."</th>
                        <th>"Delta prom."</th>
                    </tr>
                </thead>
                <tbody inner_html=discipline_html />
            </table>
        </section>
        <section class="panel">
            <h2>"Ataques"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Atacante"</th>
                        <th>"Defensor"</th>
                        <th>"Estrellas"</th>
                        <th>"Destrucción"</th>
                        <th>"Delta"</th>
                        <th>"MVP"</th>
                    </tr>
                </thead>
                <tbody inner_html=attacks_html />
            </table>
        </section>
    }
}
