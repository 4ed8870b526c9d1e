mod num;
pub use num::*;

pub mod ops;
pub use ops::Op;

mod string;
pub use string::*;
