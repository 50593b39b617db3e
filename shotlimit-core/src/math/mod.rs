pub mod vector3;
pub mod zone_box;
