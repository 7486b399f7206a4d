// Shared map defaults and palette used by the web frontend.

// View
pub const DEFAULT_CONTAINER: &str = "map";
pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/mapbox/light-v11";
pub const DEFAULT_CENTER: [f64; 2] = [10.0, 40.0]; // lon, lat
pub const DEFAULT_ZOOM: f64 = 2.0;

// Layout property flipped by the layer menu
pub const VISIBILITY_PROPERTY: &str = "visibility";

// Every fill layer is drawn half transparent
pub const FILL_OPACITY: f64 = 0.5;

// Envelope
pub const ENVELOPE_COLOR: &str = "rgb(85, 135, 173)";

// Density ramp, keyed by the `density` feature property
pub const DENSITY_FIELD: &str = "density";
pub const DENSITY_RAMP: [(f64, &str); 7] = [
    (0.0, "#008080"), // teal
    (0.000025, "#70a494"),
    (0.00005, "#b4c8a8"),
    (0.0001, "#f6edbd"),
    (0.0002, "#edbb8a"),
    (0.0004, "#de8a5a"),
    (0.0008, "#ca562c"), // orange
];

// Summary (WoRMS establishment means)
pub const ESTABLISHMENT_MEANS_FIELD: &str = "establishmentMeans";
pub const INVASIVENESS_FIELD: &str = "invasiveness";
pub const SUMMARY_NATIVE_COLOR: &str = "rgb(171, 196, 147)";
pub const SUMMARY_INTRODUCED_COLOR: &str = "rgb(237, 167, 69)";
pub const SUMMARY_INVASIVE_COLOR: &str = "rgb(245, 66, 93)";
pub const SUMMARY_UNCERTAIN_COLOR: &str = "rgb(202, 117, 255)";

// Distribution points: hollow circles
pub const DISTRIBUTION_RADIUS: f64 = 2.0;
pub const DISTRIBUTION_STROKE_WIDTH: f64 = 1.2;
pub const DISTRIBUTION_STROKE_COLOR: &str = "#000";
