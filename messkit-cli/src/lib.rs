pub mod house;
pub mod reads;
