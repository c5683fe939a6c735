pub mod color;
pub mod orbit_item;
pub mod presets;
pub mod star;
