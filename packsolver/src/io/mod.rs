mod export;
mod import;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

#[doc(inline)]
pub use export::{export_instance, export_rejection, export_solution};

#[doc(inline)]
pub use import::import_catalog;
