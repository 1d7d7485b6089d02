pub mod data;
pub mod snapshot;
pub mod state;

pub use data::WizardData;
pub use snapshot::{DraftKey, DraftSnapshot};
pub use state::WizardState;
