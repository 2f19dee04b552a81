//! Storefront data models

mod equipment;
mod package;

pub use equipment::{Category, EquipmentItem, Review, UnknownCategory};
pub use package::{Package, Testimonial};
