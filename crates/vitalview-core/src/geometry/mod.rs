pub mod bounds;
pub mod buffer;
pub mod mesh;

pub use bounds::Aabb;
pub use buffer::{BufferAttribute, BufferGeometryDesc, GeometryData, GeometryMetadata, IndexBuffer};
pub use mesh::Mesh;
