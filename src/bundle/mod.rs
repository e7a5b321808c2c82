//! Steps applied to an exported Godot web build.

pub mod compress;
pub mod js_patch;
pub mod loader;
pub mod site;
