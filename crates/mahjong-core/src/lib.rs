#![deny(warnings)]
pub mod catalog;
pub mod eval;
pub mod model;
pub mod rules;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "mjadvisor"
    }

    pub const fn codename() -> &'static str {
        "Tile Advisor"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
