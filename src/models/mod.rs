pub mod call;
pub mod filter;
pub mod dashboard;
pub mod metrics;
pub mod agent;
pub mod settings;

pub use call::*;
pub use filter::*;
pub use dashboard::*;
pub use metrics::*;
pub use agent::*;
pub use settings::*;
