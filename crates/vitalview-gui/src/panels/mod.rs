pub mod helpers;
pub mod landing;
pub mod nav_bar;
pub mod report;
pub mod status;
pub mod upload;
pub mod viewer;
