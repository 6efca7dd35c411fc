//! # landing
//!
//! Builder for the workshop landing page: the compiled-in copy, an editor
//! controller for changing it, and a refinement client that asks Gemini to
//! rewrite one section at a time.
//!
//! Rendering lives in [`page_leptos`]; this crate owns everything that
//! changes the content.
//!
//! ## Usage
//!
//! ```rust
//! use landing::defaults::default_landing_page;
//! use landing::editor::Editor;
//! use page_leptos::types::ContentField;
//!
//! let mut editor = Editor::new(default_landing_page());
//! editor.toggle_section("above_the_fold");
//! editor.set_field("above_the_fold", ContentField::Headline, "Nuevo titular");
//!
//! let html = editor.render(2025);
//! assert!(html.contains("Nuevo titular"));
//! ```
//!
//! ## Modules
//!
//! - [`defaults`] - The compiled-in dataset
//! - [`config`] - `landing.toml` and environment overrides
//! - [`editor`] - Editor state machine (open panel, feedback, in-flight refinement)
//! - [`refine`] - Refinement collaborator trait and the Gemini client
//! - [`export`] - Markdown outline of the copy
//!
//! Created by Pablo y German (c)2025

pub mod config;
pub mod defaults;
pub mod editor;
pub mod export;
pub mod refine;

pub use config::{ConfigError, LandingConfig};
pub use editor::{Editor, EditorError, EditorPhase};
pub use refine::{RefineError, RefineRequest, Refiner};
