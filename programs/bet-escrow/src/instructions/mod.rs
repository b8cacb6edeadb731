pub mod initialize;
pub mod start;
pub mod enter;
pub mod end;
pub mod claim;

pub use initialize::*;
pub use start::*;
pub use enter::*;
pub use end::*;
pub use claim::*;
