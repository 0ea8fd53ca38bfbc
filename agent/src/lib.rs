pub mod models;
pub mod reply;

pub use models::*;
pub use reply::{demo_reply, respond, DEMO_INTENT, REPLY_PREFIX};
