mod badge_trigger;
mod clear_scope;
mod notification_draft;
mod notification_filter;
mod sender;

pub use badge_trigger::*;
pub use clear_scope::*;
pub use notification_draft::*;
pub use notification_filter::*;
pub use sender::*;
