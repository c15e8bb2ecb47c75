pub mod command;
pub mod container_client;
pub mod grouping;
pub mod platform;
pub mod response;
pub mod settings;
pub mod tree;
