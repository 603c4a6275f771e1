//! Business logic services
//!
//! Services encapsulate boundary validation and ownership checks, and
//! coordinate between repositories.

pub mod product;
pub mod update;
pub mod user;

pub use product::ProductService;
pub use update::UpdateService;
pub use user::UserService;
