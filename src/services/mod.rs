//! Long-lived services shared by the event handler: the chat-platform seam,
//! the display synchronizer, the audit log and the serialized mutation path.

pub mod audit;
pub mod display;
pub mod inventory;
pub mod platform;
