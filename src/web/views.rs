pub mod index;
pub mod predict;
pub mod r#static;
