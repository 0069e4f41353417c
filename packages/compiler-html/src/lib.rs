mod gallery;

pub use gallery::{compile_gallery, CompileError, GalleryOptions};

#[cfg(test)]
mod tests;
