//! Page components, one per entry in the route table.

pub mod home;
pub mod login;
pub mod new_post;
pub mod sign_up;
