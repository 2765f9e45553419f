//! Page-level flows and their shared logic. Routes import these modules to keep
//! view code focused on wiring while validation, reply classification and error
//! routing stay host-testable.

pub mod challenge;
pub mod shortener;
