pub mod package;
pub mod snapshot;

pub use package::PackageRecord;
pub use snapshot::LockfileSnapshot;
