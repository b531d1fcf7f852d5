pub mod fallback;
pub mod image_delete;
pub mod image_upload;
pub mod translate;
