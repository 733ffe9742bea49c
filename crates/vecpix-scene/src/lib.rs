//! Shape tree, transforms and the SVG scene builder for **vecpix**.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`shapes`] | `Shape` enum, `Element` trait, one type per drawable tag |
//! | [`transform`] | `TransformList` parsing and application |
//! | [`builder`] | `SceneBuilder`: document tree → shapes |
//! | [`scene`] | `Scene`: canvas size + shapes, rendering |
//! | [`convert`] | file-to-file SVG → PNG pipeline |
//! | [`error`] | `SceneError` |
//!
//! # Quick start
//!
//! ```rust
//! use vecpix_scene::prelude::*;
//!
//! let scene = Scene::parse(r#"
//!     <svg width="20" height="20">
//!         <g transform="translate(5,5)">
//!             <rect x="0" y="0" width="4" height="4" fill="red"/>
//!         </g>
//!     </svg>
//! "#).unwrap();
//!
//! let canvas = scene.render(Color::WHITE);
//! assert_eq!(canvas.pixel(6, 6), Some(Color::rgb(255, 0, 0)));
//! assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
//! ```

pub mod builder;
pub mod convert;
pub mod error;
mod number;
pub mod scene;
pub mod shapes;
pub mod transform;

#[cfg(test)]
mod testing;

pub use builder::SceneBuilder;
pub use convert::{convert, convert_with, ConvertConfig};
pub use error::{Result, SceneError};
pub use scene::Scene;
pub use shapes::{Element, Shape};
pub use transform::{TransformList, TransformOp};

/// Convenience imports for building and rendering scenes.
pub mod prelude {
    pub use crate::convert::{convert, convert_with, ConvertConfig};
    pub use crate::scene::Scene;
    pub use crate::shapes::{Circle, Element, Ellipse, Group, Line, Polygon, Polyline, Rect, Shape};
    pub use crate::SceneError;
    pub use vecpix_engine::coords::{Point, Size};
    pub use vecpix_engine::paint::Color;
}
