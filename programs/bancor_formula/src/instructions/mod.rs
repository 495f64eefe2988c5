pub mod quote;
pub mod conversion;
pub mod liquidity;
pub mod power;
pub mod weights;

pub use quote::*;
pub use conversion::*;
pub use liquidity::*;
pub use power::*;
pub use weights::*;
