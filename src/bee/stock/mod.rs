mod call;
mod echo;

pub use call::{Caller, StateCaller};
pub use echo::Echo;
