pub mod api;
pub mod model;
pub mod panels;

pub mod prelude {
    pub use crate::api::client::{ClientOptions, PanelAppClient};
    pub use crate::model::query::PanelQuery;
}
