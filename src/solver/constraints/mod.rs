//! Builders for the constraint shapes that come up in nearly every problem.

pub mod all_different;
pub mod fixed;
pub mod not_equal;

pub use all_different::all_different;
pub use fixed::fixed;
pub use not_equal::not_equal;
