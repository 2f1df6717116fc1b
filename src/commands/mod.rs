pub mod auth;
pub mod logs;
pub mod ls;
pub mod set;
pub mod sync;
