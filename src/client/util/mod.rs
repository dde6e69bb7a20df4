pub mod card_gesture;
pub mod file;
pub mod map;
pub mod time;
