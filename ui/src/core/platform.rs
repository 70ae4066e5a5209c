//! Platform glue: where the backend lives and how bytes reach the user's disk.

use api::{ApiConfig, ClientError};

/// Backend location for this platform.
///
/// The web build is served by the backend itself, so it talks to the page
/// origin. Native builds read `OCEV_API_URL`.
pub fn api_config() -> Result<ApiConfig, ClientError> {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .ok_or_else(|| ClientError::InvalidUrl("window unavailable".into()))?
            .location()
            .origin()
            .map_err(|_| ClientError::InvalidUrl("page origin unavailable".into()))?;
        ApiConfig::new(&origin)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ApiConfig::from_env()
    }
}

/// Hand `bytes` to the user as `filename`.
///
/// Web: synthesized anchor click on an object URL (returns `None`).
/// Desktop: written under the data directory (returns the saved path).
pub fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();
        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        let path = export_path(&dir, filename)?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

/// `dir/filename`, refusing anything but a plain file name so a report can
/// never be written outside `dir`.
#[cfg(not(target_arch = "wasm32"))]
fn export_path(dir: &std::path::Path, filename: &str) -> Result<std::path::PathBuf, String> {
    use std::path::{Component, Path};

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == filename => Ok(dir.join(name)),
        _ => Err(format!("Refusing to save report as {filename:?}")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "OCEV", "OCEV Dashboard")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
