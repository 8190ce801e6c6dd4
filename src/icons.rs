/// Icon loading for the picker window
use anyhow::{anyhow, Result};
use iced::widget::image::Handle;
use iced::window::Icon;
use std::path::Path;

/// Edge length of the window icon handed to the OS
pub const WINDOW_ICON_SIZE: u32 = 128;

/// Load the window/taskbar icon, scaled to `WINDOW_ICON_SIZE`
pub fn load_window_icon(path: &Path) -> Result<Icon> {
    let img = image::open(path)
        .map_err(|e| anyhow!("Failed to decode icon {}: {}", path.display(), e))?;

    let img = img.resize_exact(
        WINDOW_ICON_SIZE,
        WINDOW_ICON_SIZE,
        image::imageops::FilterType::Lanczos3,
    );
    let rgba = img.to_rgba8();

    iced::window::icon::from_rgba(rgba.into_raw(), WINDOW_ICON_SIZE, WINDOW_ICON_SIZE)
        .map_err(|e| anyhow!("Failed to create icon from image: {:?}", e))
}

/// Image handle for a client's icon, if the file is there
pub fn client_icon(path: &Path) -> Option<Handle> {
    if path.is_file() {
        Some(Handle::from_path(path))
    } else {
        tracing::warn!("Client icon not found: {}", path.display());
        None
    }
}
