/// Shell wiring constants: DOM ids and canvas sizing.
///
/// The skeleton in `index.html` provides every element listed here; the app
/// fills in content and attaches behaviour.
// Background
pub const CANVAS_ID: &str = "bg-canvas";
pub const CURSOR_ID: &str = "cursor";
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Chrome
pub const NAV_ID: &str = "site-nav";
pub const FOOTER_ID: &str = "site-footer";

// Slide panel
pub const TITLE_ID: &str = "slide-title";
pub const SUBTITLE_ID: &str = "slide-subtitle";
pub const DETAIL_SCROLL_ID: &str = "detail-scroll";
pub const DETAIL_PANEL_ID: &str = "detail-panel";
pub const IMAGE_ID: &str = "slide-image";
pub const DESCRIPTION_ID: &str = "slide-description";
pub const PREV_ID: &str = "prev-slide";
pub const NEXT_ID: &str = "next-slide";
pub const DOTS_ID: &str = "slide-dots";
