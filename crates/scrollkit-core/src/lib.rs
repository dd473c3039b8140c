pub mod config;
pub mod driver;
pub mod easing;
pub mod error;
pub mod surface;
pub mod timing;

pub use config::{AppConfig, GeneralConfig, ScrollConfig, UiConfig};
pub use driver::{scroll_to, ScrollAnimation, ScrollOptions};
pub use easing::{Easing, EasingCurve, EasingFn};
pub use error::{Error, Result};
pub use surface::{ElementGeometry, FrameScheduler, ScrollSurface};
