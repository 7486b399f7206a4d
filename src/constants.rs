/// DOM ids, class names and engine event names shared by the web frontend.
///
/// The host page provides the elements and styles the classes; keeping the
/// names here lets host-side tests check them without a browser.
// Elements that must exist before `speedyMap` is called
pub const LEGEND_ID: &str = "legend";
pub const MENU_ID: &str = "menu";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const INACTIVE_CLASS: &str = "";
pub const SUBLEGEND_CLASS: &str = "sublegend";
pub const LEGEND_KEY_CLASS: &str = "legend-key";
pub const PROJECTION_TOGGLE_CLASS: &str = "projection-toggle";

// Anchors are click targets only
pub const CONTROL_HREF: &str = "#";

// Engine lifecycle events
pub const LOAD_EVENT: &str = "load"; // once, style and sources ready
pub const IDLE_EVENT: &str = "idle"; // after every settled render
