//! Which view a page shows and where its snapshot lives.
//!
//! Resolution order for each setting: page URL query (`?view=`, `?data=`),
//! then the mount element's `data-view` / `data-snapshot-base` attributes,
//! then the defaults below.

pub const DEFAULT_SNAPSHOT_BASE: &str = "/backend/outputs";

pub const CLAN_SNAPSHOT_FILE: &str = "clan_snapshot.json";
pub const WAR_ACTIVE_FILE: &str = "war_active.json";
pub const WAR_EXECUTION_FILE: &str = "war_execution.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Clan,
    Resources,
    War,
    WarExecution,
}

impl View {
    pub const ALL: [View; 4] = [View::Clan, View::Resources, View::War, View::WarExecution];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Clan => "clan",
            Self::Resources => "resources",
            Self::War => "war",
            Self::WarExecution => "war-execution",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.slug().eq_ignore_ascii_case(slug))
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Clan => "Resumen del clan",
            Self::Resources => "Recursos y donaciones",
            Self::War => "Guerra activa",
            Self::WarExecution => "Ejecución de guerra",
        }
    }

    pub fn snapshot_file(self) -> &'static str {
        match self {
            Self::Clan | Self::Resources => CLAN_SNAPSHOT_FILE,
            Self::War => WAR_ACTIVE_FILE,
            Self::WarExecution => WAR_EXECUTION_FILE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub view: View,
    pub snapshot_base: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            snapshot_base: DEFAULT_SNAPSHOT_BASE.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Resolve from a URL query string (with or without the leading `?`) and mount attributes.
    pub fn resolve(query: &str, mount_view: Option<&str>, mount_base: Option<&str>) -> Self {
        let query_view = query_param(query, "view");
        let query_base = query_param(query, "data");

        let view = query_view
            .as_deref()
            .and_then(View::from_slug)
            .or_else(|| mount_view.and_then(View::from_slug))
            .unwrap_or_default();

        let snapshot_base = query_base
            .filter(|base| !base.trim().is_empty())
            .or_else(|| {
                mount_base
                    .filter(|base| !base.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_BASE.to_string());

        Self {
            view,
            snapshot_base: snapshot_base.trim().to_string(),
        }
    }

    pub fn snapshot_file(&self) -> &'static str {
        self.view.snapshot_file()
    }

    pub fn snapshot_url(&self) -> String {
        format!(
            "{}/{}",
            self.snapshot_base.trim_end_matches('/'),
            self.snapshot_file()
        )
    }

    /// Link to another view that keeps a non-default snapshot base.
    pub fn href_for(&self, view: View) -> String {
        let mut href = format!("?view={}", view.slug());
        if self.snapshot_base != DEFAULT_SNAPSHOT_BASE {
            href.push_str("&data=");
            href.push_str(&percent_encode(&self.snapshot_base));
        }
        href
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| percent_decode(v))
}

fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                (Some(high), Some(low)) => {
                    out.push(high << 4 | low);
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' | b':' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
