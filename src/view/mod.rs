pub mod bag_editor;
pub mod format;
pub mod index;
pub mod results;
