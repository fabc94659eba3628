//! Design tokens
//!
//! Tokens are the named values a theme extension contributes:
//! - Colors (single literals or 50..950 shade scales)
//! - Font stacks
//! - Animation shorthands and the keyframes they play
//! - Free-form scales (blur radii, animation delays)

mod animation;
mod color;
mod keyframes;
mod scale;
mod typography;

pub use animation::*;
pub use color::*;
pub use keyframes::*;
pub use scale::*;
pub use typography::*;
