mod auth;
mod client;
mod error;
mod models;

pub use self::{auth::*, client::*, error::*, models::*};
