pub mod home;
pub mod stack;
