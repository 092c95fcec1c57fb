use crate::entities::Catalog;
use crate::error::CatalogError;
use crate::io::ext_repr::ExtInstance;

/// Imports the catalog of an instance into the library.
/// Zero or repeated pack sizes are refused.
pub fn import_catalog(ext_instance: &ExtInstance) -> Result<Catalog, CatalogError> {
    Catalog::new(ext_instance.pack_sizes.iter().copied())
}
