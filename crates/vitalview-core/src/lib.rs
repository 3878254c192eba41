pub mod asset;
pub mod camera;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod render;
pub mod report;
pub mod scene;
pub mod tumor;
pub mod upload;
