use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use clandash_shared::render::war::{
    render_comparison, render_gaps, render_matchup_rows, render_threats,
};
use clandash_shared::war::{
    WarState, build_compare, gap_sections, matchup_rows, threat_sections,
};
use clandash_shared::{DashboardConfig, WarActive};

use crate::app::{Panel, StatusNote};
use crate::loader::{fetch_snapshot, log_outcome};

#[component]
pub fn WarView() -> impl IntoView {
    let config: DashboardConfig = expect_context();
    let StatusNote(status) = expect_context();
    let snapshot: RwSignal<Option<WarActive>> = RwSignal::new(None);
    let comparison_html: RwSignal<String> = RwSignal::new(String::new());
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    spawn_local(async move {
        let result =
            fetch_snapshot::<WarActive>(&config.snapshot_url(), config.snapshot_file()).await;
        log_outcome(&result, |data| {
            format!(
                "war snapshot loaded: state={} teams={}",
                data.meta.state.as_deref().unwrap_or("-"),
                data.teams.len()
            )
        });
        match result {
            Ok(data) => {
                let state = WarState::from_meta(data.meta.state.as_deref());
                status.set(state.message().to_string());
                snapshot.set(Some(data));
            }
            Err(e) => status.set(e.to_string()),
        }
    });

    let clan_threats_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|w| render_threats(&threat_sections(&w.derived.top_threats.clan)))
                .unwrap_or_default()
        })
    };
    let opponent_threats_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|w| render_threats(&threat_sections(&w.derived.top_threats.opponent)))
                .unwrap_or_default()
        })
    };
    let gaps_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|w| render_gaps(&gap_sections(&w.derived.gaps)))
                .unwrap_or_default()
        })
    };
    let matchups_html = move || {
        snapshot.with(|data| {
            data.as_ref()
                .map(|w| render_matchup_rows(&matchup_rows(w)))
                .unwrap_or_default()
        })
    };

    // Rows are plain markup, so compare buttons are handled by delegation.
    let on_matchup_click = move |e: leptos::ev::MouseEvent| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let Ok(Some(button)) = element.closest("button[data-clan]") else {
            return;
        };
        let clan_tag = button.get_attribute("data-clan").unwrap_or_default();
        let opponent_tag = button.get_attribute("data-opponent").unwrap_or_default();
        let Some(html) = snapshot.with_untracked(|data| {
            data.as_ref()
                .map(|w| render_comparison(&build_compare(w, &clan_tag, &opponent_tag)))
        }) else {
            return;
        };
        comparison_html.set(html);
        if let Some(dialog) = dialog_ref.get()
            && let Err(err) = dialog.show_modal()
        {
            web_sys::console::warn_1(&format!("compare dialog failed to open: {err:?}").into());
        }
    };

    let on_close = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <div class="grid-two">
            <Panel title="Amenazas del clan" html=Signal::derive(clan_threats_html) class="threats" />
            <Panel
                title="Amenazas del rival"
                html=Signal::derive(opponent_threats_html)
                class="threats"
            />
        </div>
        <Panel title="Brechas clan vs rival" html=Signal::derive(gaps_html) class="gap-list" />
        <section class="panel">
            <h2>"Enfrentamientos"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Posición"</th>
                        <th>"Clan"</th>
                        <th>"Rival"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody inner_html=matchups_html on:click=on_matchup_click />
            </table>
        </section>
        <dialog class="compare-dialog" node_ref=dialog_ref>
            <div class="compare-grid" inner_html=move || comparison_html.get() />
            <button class="button" type="button" on:click=on_close>
                "Cerrar"
            </button>
        </dialog>
    }
}
