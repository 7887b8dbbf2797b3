use clandash_shared::LoadError;
use serde::de::DeserializeOwned;

/// GET one snapshot document. `file` names the document in error messages.
pub async fn fetch_snapshot<T: DeserializeOwned>(
    url: &str,
    file: &'static str,
) -> Result<T, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Request {
            file,
            detail: e.to_string(),
        })?;

    if !resp.ok() {
        return Err(LoadError::Status {
            file,
            status: resp.status(),
        });
    }

    let body = resp.text().await.map_err(|e| LoadError::Request {
        file,
        detail: e.to_string(),
    })?;
    serde_json::from_str::<T>(&body).map_err(|e| LoadError::Parse {
        file,
        detail: e.to_string(),
    })
}

/// Console line for a finished load.
pub fn log_outcome<T>(result: &Result<T, LoadError>, summary: impl FnOnce(&T) -> String) {
    match result {
        Ok(data) => web_sys::console::info_1(&summary(data).into()),
        Err(e) => web_sys::console::warn_1(&format!("snapshot load failed: {e:?}").into()),
    }
}
