pub mod map;
pub mod view;
