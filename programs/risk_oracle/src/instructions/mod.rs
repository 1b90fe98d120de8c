pub mod commit_assessment;
pub mod get_latest;
pub mod initialize;
pub mod query_assessment;
pub mod register_assessor;
pub mod reveal_assessment;
pub mod set_assessor_status;

pub use commit_assessment::*;
pub use get_latest::*;
pub use initialize::*;
pub use query_assessment::*;
pub use register_assessor::*;
pub use reveal_assessment::*;
pub use set_assessor_status::*;
