// Tue Aug 25 2026 - Alex

pub mod address;
pub mod error;
pub mod maps;
pub mod process;
pub mod protection;
pub mod reader;
pub mod region;
pub mod traits;

pub use address::Address;
pub use error::MemoryError;
pub use process::ProcessHandle;
pub use protection::Protection;
pub use reader::RegionReader;
pub use region::{RegionDescriptor, RegionKind, RegionState};
pub use traits::ProcessSource;
