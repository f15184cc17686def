pub mod lookup;
pub mod validate;
