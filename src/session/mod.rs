mod actions;
mod reducer;
mod store;

pub use self::{actions::*, reducer::*, store::*};
