pub mod viewport_mapping;
