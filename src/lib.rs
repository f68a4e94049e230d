//! Crop-box geometry and drag-resize state machine for interactive image croppers.
//!
//! Pure geometry: no rendering, no DOM, no allocations in the core, `no_std`
//! compatible. A host feeds pointer samples and the image's natural size; the
//! crate keeps the container, canvas and crop box consistent and reports
//! every change through a [`CropListener`].
//!
//! # Modules
//!
//! - [`rect`]: rectangle value type and its clamping/scaling operations
//! - [`layout`]: container, canvas and crop-box placement policies
//! - [`resize`]: corner-drag resizing with anchor tracking and direction flips
//! - [`cropper`]: the interaction controller and drag sessions
//! - [`event`]: notifications and listeners
//! - [`options`]: configuration builder and validation
//! - `query` (feature `query`): `key=value` configuration strings
//!
//! # Example
//!
//! ```
//! use zencrop::{Cropper, CropperOptions, Direction, Extent, Point, Rect};
//!
//! let options = CropperOptions::new()
//!     .size(Extent::Fixed(800.0), Extent::Fixed(400.0))
//!     .crop_box_ratio(1.0);
//! let mut cropper = Cropper::new(options)?;
//! cropper.set_image(1600.0, 800.0)?;
//!
//! // Pull the bottom-right handle up and left by 100 display units.
//! cropper.begin_resize(Direction::SouthEast, Point::new(600.0, 400.0));
//! cropper.pointer_move(Point::new(500.0, 300.0));
//! cropper.end();
//!
//! assert_eq!(cropper.crop_box_data(), Rect::new(200.0, 0.0, 300.0, 300.0));
//! assert_eq!(cropper.data(), Some(Rect::new(400.0, 0.0, 600.0, 600.0)));
//! # Ok::<(), zencrop::CropError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cropper;
pub mod error;
pub mod event;
pub mod layout;
pub mod options;
#[cfg(feature = "query")]
pub mod query;
pub mod rect;
pub mod resize;

pub use cropper::{Cropper, DragSession, ImageRequest, Operation};
pub use error::CropError;
pub use event::{CropListener, Event, Snapshot};
pub use layout::{
    CanvasPosition, CropBoxOptions, CropBoxPosition, Extent, ImageSize, Placement,
    compute_canvas, compute_container, compute_crop_box, lock_ratio,
};
pub use options::CropperOptions;
pub use rect::{Point, Rect, RectPatch};
pub use resize::{Direction, Resize, resize_crop_box};
