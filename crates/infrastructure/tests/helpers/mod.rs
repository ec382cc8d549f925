pub mod builders;
pub mod mock_client;

pub use builders::*;
pub use mock_client::MockZoneRecordsClient;
