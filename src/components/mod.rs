mod layout;
mod spinner;
mod toast;

pub use self::{layout::*, spinner::*, toast::*};
