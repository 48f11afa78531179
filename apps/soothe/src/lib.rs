#![allow(non_snake_case)]
//! Welcome, login and home screens for Soothe, built as a view tree.
//!
//! `render` turns the current screen into a `View`; `AppHost` keeps that tree
//! in step with a `NavController`.

pub mod app;
pub mod catalog;
pub mod components;
pub mod resources;
pub mod screens;

pub use app::{AppConfig, AppHost, render};
pub use catalog::{Catalog, CatalogError, CollectionId, ContentItem};
pub use resources::{BundledResources, ImageKey, ResourceError, ResourceProvider, StringKey};
