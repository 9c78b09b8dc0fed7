mod help;
mod home;
mod login;
mod not_found;
mod profile;
mod signup;
mod trainer;

pub use self::{help::*, home::*, login::*, not_found::*, profile::*, signup::*, trainer::*};
