//! Server-rendered pages.

pub mod gallery;

pub use gallery::{data_uri, render_gallery, UPLOAD_FIELD};
