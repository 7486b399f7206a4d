pub mod config;
pub mod configurator;
pub mod constants;
pub mod error;
pub mod kind;
pub mod legend;
pub mod projection;
pub mod style;
pub mod toggle;

pub use config::*;
pub use configurator::*;
pub use constants::*;
pub use error::*;
pub use kind::*;
pub use legend::*;
pub use projection::*;
pub use style::*;
pub use toggle::*;
