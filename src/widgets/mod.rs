pub mod reflection_box;

pub use reflection_box::ReflectionBox;
