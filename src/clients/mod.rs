pub mod catalog_client;
pub mod transport;
pub mod upload_client;

pub use catalog_client::CatalogClient;
pub use transport::{HttpResponse, Transport};
pub use upload_client::{UploadClient, UploadOutcome};
