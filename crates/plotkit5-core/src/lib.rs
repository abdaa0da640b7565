//! # PlotKit5 Core
//!
//! Core geometry types and the path model for PlotKit5: turning abstract
//! 2D shape descriptions into pen strokes for a plotting device.
//!
//! ## Core Components
//!
//! - **Vec2 / Transform**: 2D points and anchor-relative affine transforms
//! - **Polyline**: ordered point sequences with derived arc-length,
//!   normal, and tangent caches, parallel offsetting, and resampling
//! - **Arc**: SVG endpoint-to-center elliptical arc solving and sampling
//! - **PathSet**: ordered stroke collections with travel metrics
//! - **Shapes**: line/circle/rectangle/polygon/arc primitives resolving
//!   into stroke paths under an explicit [`StrokeStyle`]
//!
//! ## Architecture
//!
//! ```text
//! Shapes (line, circle, rect, polygon, arc)
//!   └── Polyline / Arc (outline geometry, stroke synthesis)
//!         └── PathSet (drawing order, pen-up/pen-down metrics)
//! ```
//!
//! Everything here is synchronous and CPU-bound; a `PathSet` owns its
//! strokes and independent sets can be processed in parallel by the caller.

pub mod arc;
pub mod error;
pub mod geometry;
pub mod path;
pub mod polyline;
pub mod shapes;
pub mod units;

pub use arc::{Arc, CenterArc};
pub use error::{GeometryError, Result};
pub use geometry::{remap, Transform, Vec2};
pub use path::PathSet;
pub use polyline::Polyline;
pub use shapes::{
    build_scene, ArcShape, CircleShape, LineShape, RectShape, RegularPolygon, Shape, StrokeStyle,
};
pub use units::Units;
