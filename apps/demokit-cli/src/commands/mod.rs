pub mod encode;
pub mod path;
pub mod tree;
