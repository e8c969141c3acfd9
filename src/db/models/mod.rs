pub mod session;

pub use session::{Session, SessionListItem, SessionStatus};
