pub mod calendar;
pub mod map;
pub mod sidebar;
