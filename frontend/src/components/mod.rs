// Reusable components live here.

pub mod contributors;
pub mod features;
pub mod icons;
pub mod navbar;
