mod toast;

pub use toast::*;
