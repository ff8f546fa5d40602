//! Command implementations.

pub mod discover;
pub mod fetch;
pub mod reexport;

pub use self::discover::execute_discover;
pub use self::fetch::execute_fetch;
pub use self::reexport::execute_reexport;
