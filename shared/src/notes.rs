//! Status-line text shown above each view.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::lenient::is_truthy;
use crate::snapshot::{ClanSnapshot, SnapshotMeta, WarExecution};

pub const LOADING_NOTE: &str = "Cargando datos…";
pub const LOADED_NOTE: &str = "Datos cargados.";
pub const NOT_IN_WAR_NOTE: &str = "El clan no está en guerra activa actualmente.";

/// Render an RFC 3339 timestamp in `tz`; unparseable input is returned verbatim.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(stamp) => stamp
            .with_timezone(tz)
            .format("%d/%m/%Y, %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Roster status: timestamp plus whether the war log was exported.
pub fn roster_note<Tz>(snapshot: &ClanSnapshot, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let warlog = if is_truthy(&snapshot.clan.warlog) {
        "Warlog incluido."
    } else {
        "Warlog no disponible."
    };
    match generated_at(&snapshot.meta) {
        Some(raw) => format!("Última actualización: {}. {warlog}", format_timestamp(raw, tz)),
        None => LOADED_NOTE.to_string(),
    }
}

/// Resources status: timestamp plus the exporter's note.
pub fn resources_note<Tz>(snapshot: &ClanSnapshot, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let note = snapshot
        .aggregates
        .resources
        .note
        .as_deref()
        .unwrap_or_default();
    match generated_at(&snapshot.meta) {
        Some(raw) => format!("Última actualización: {}. {note}", format_timestamp(raw, tz)),
        None if !note.is_empty() => note.to_string(),
        None => LOADED_NOTE.to_string(),
    }
}

/// War-execution status; a clan outside war gets a fixed message.
pub fn execution_note<Tz>(snapshot: &WarExecution, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if snapshot.meta.state.as_deref() == Some("notInWar") {
        return NOT_IN_WAR_NOTE.to_string();
    }
    let timing = snapshot.meta.note.as_deref().unwrap_or_default();
    match generated_at(&snapshot.meta) {
        Some(raw) => format!("Última actualización: {}. {timing}", format_timestamp(raw, tz)),
        None => LOADED_NOTE.to_string(),
    }
}

fn generated_at(meta: &SnapshotMeta) -> Option<&str> {
    meta.generated_at.as_deref().filter(|raw| !raw.is_empty())
}
