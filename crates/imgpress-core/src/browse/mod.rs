mod controller;
mod driver;
mod state;

pub use controller::BrowsingController;
pub use driver::{Browser, Settled};
pub use state::{BrowsingState, Phase, RequestToken, Resolution};
