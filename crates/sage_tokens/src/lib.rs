//! Sage Design Tokens
//!
//! A design-token registry that extends a base theme with a custom palette,
//! font stacks, and named animations, and records which source files a
//! utility-class generator should scan.
//!
//! # Overview
//!
//! The crate provides:
//! - **Tokens**: Colors and shade scales, font stacks, animation shorthands,
//!   keyframes, free-form scales (blur radii, animation delays)
//! - **Registry**: The extension layer loaded from `tokens.toml`
//! - **Base presets**: Default themes the registry is merged onto
//! - **Resolver**: Additive deep merge plus non-fatal validation
//!
//! # Quick Start
//!
//! ```rust
//! use sage_tokens::{BasePreset, TokenRegistry};
//!
//! let registry = TokenRegistry::sage();
//! let resolved = registry.resolve(BasePreset::Tailwind);
//!
//! assert_eq!(resolved.theme().color("sage-500"), Some("#7fa86d"));
//! assert_eq!(resolved.theme().color("gray-500"), Some("#6b7280"));
//! ```
//!
//! # Merge Rules
//!
//! Extensions never replace a category. For every key path:
//!
//! - present in base and extension: the extension value wins
//! - present only in base: kept untouched
//! - present only in extension: added
//!
//! Color scales merge shade by shade and keyframes step by step. Font
//! stacks are sequences and are replaced as a whole.
//!
//! # Failure Model
//!
//! Loading fails only on structural problems ([`ConfigError`]). Literal
//! values are opaque. Everything found after loading, such as an animation
//! whose keyframes are missing, is a [`Diagnostic`], logged and returned,
//! never raised.

pub mod content;
pub mod error;
pub mod merge;
pub mod presets;
pub mod registry;
pub mod resolve;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod validate;

// Re-export commonly used types
pub use error::ConfigError;
pub use merge::{merged, DeepMerge};
pub use presets::{base_section, BasePreset};
pub use registry::{RegistryBuilder, TokenRegistry, CONFIG_FILE_NAME};
pub use resolve::{resolve, ResolvedTheme};
pub use theme::{ThemeMode, ThemeSection};
pub use themes::sage_registry;
pub use tokens::*;
pub use validate::{validate, Diagnostic, Severity};
