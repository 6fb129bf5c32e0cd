pub mod water_material;
