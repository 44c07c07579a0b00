pub mod loader;
pub mod logging;

pub use loader::{TariffLoader, TariffLoaderError, TariffRecord};
