pub mod age;
pub mod container_commands;
pub mod containers;
pub mod explorer;
pub mod fallback;
pub mod grouping;
pub mod image_commands;
pub mod image_label;
pub mod images;
pub mod refresh;
pub mod sorting;
pub mod tagging;
pub mod terminal_commands;
pub mod tree_items;
