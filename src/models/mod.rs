pub mod element;
pub mod feedback;
pub mod loaders;

pub use element::{Category, Element};
pub use feedback::{Feedback, Severity};
pub use loaders::load_periodic_table;
