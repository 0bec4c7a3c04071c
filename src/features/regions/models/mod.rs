mod catalog;
mod district;
mod province;
mod regency;

pub use catalog::{CatalogState, RegionCatalog};
pub use district::District;
pub use province::Province;
pub use regency::Regency;
