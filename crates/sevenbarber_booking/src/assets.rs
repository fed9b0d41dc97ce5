// --- File: crates/sevenbarber_booking/src/assets.rs ---
//! Static files the pages depend on.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sevenbarber_common::{asset_error, SevenBarberError};
use sevenbarber_config::ShopConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// URL prefix the assets directory is served under.
pub const ASSETS_ROUTE: &str = "/assets";

/// Files every page needs: stylesheet, banner and payment QR.
pub fn required_assets(shop: &ShopConfig) -> Vec<PathBuf> {
    let dir = Path::new(&shop.assets_dir);
    vec![
        dir.join(&shop.stylesheet),
        dir.join(&shop.banner_image),
        dir.join(&shop.qr_image),
    ]
}

/// Fails with the list of missing files if any required asset is absent.
pub fn verify_required_assets(shop: &ShopConfig) -> Result<(), SevenBarberError> {
    let missing: Vec<String> = required_assets(shop)
        .into_iter()
        .filter(|path| !path.is_file())
        .map(|path| path.display().to_string())
        .collect();

    if missing.is_empty() {
        debug!("All required assets present in {}", shop.assets_dir);
        Ok(())
    } else {
        Err(asset_error(format!(
            "missing static assets: {}",
            missing.join(", ")
        )))
    }
}

/// Public URL of a file inside the assets directory.
pub fn asset_url(file: &str) -> String {
    format!("{}/{}", ASSETS_ROUTE, file.trim_start_matches('/'))
}

fn mime_type(file: &str) -> &'static str {
    match Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encodes bytes as a `data:` URI.
pub fn data_uri(file: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type(file), STANDARD.encode(bytes))
}

/// Reads an image from the assets directory and inlines it as a `data:` URI.
pub async fn inline_image(assets_dir: &str, file: &str) -> Result<String, SevenBarberError> {
    let path = Path::new(assets_dir).join(file);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| asset_error(format!("cannot read {}: {}", path.display(), e)))?;
    Ok(data_uri(file, &bytes))
}
