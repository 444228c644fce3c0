pub mod administrations;
pub mod health;
pub mod scales;
