pub mod math;
pub mod logexpmath;
pub mod lambert;
pub mod tables;
#[cfg(any(test, feature = "table-gen"))]
pub mod generator;

pub use lambert::LambertMath;
pub use logexpmath::{LogExpMath, FIXED_1, FIXED_2, MAX_NUM, MAX_PRECISION, MIN_PRECISION};
pub use math::Math;
