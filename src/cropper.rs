//! The interactive controller.
//!
//! [`Cropper`] owns the widget's geometry and turns host input (pointer
//! samples, image sizes, imperative moves) into layout updates and
//! [`Event`]s. Pointer handling is a two-state machine:
//!
//! ```text
//!             begin_move / begin_resize
//!     Idle ───────────────────────────────▶ Busy(DragSession)
//!      ▲                                        │ pointer_move (repeat)
//!      └──────────────── end ◀──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use zencrop::{Cropper, CropperOptions, Event, Extent, Point, Rect};
//!
//! let options = CropperOptions::new()
//!     .size(Extent::Fixed(800.0), Extent::Fixed(400.0))
//!     .crop_box_ratio(1.0);
//!
//! let mut changes = 0;
//! let mut cropper = Cropper::with_listener(options, |e: &Event<'_>| {
//!     if let Event::Change { .. } = e {
//!         changes += 1;
//!     }
//! })?;
//! cropper.set_image(1600.0, 800.0)?;
//! assert_eq!(cropper.crop_box_data(), Rect::new(200.0, 0.0, 400.0, 400.0));
//!
//! assert!(cropper.begin_move(Point::new(300.0, 200.0)));
//! assert!(cropper.pointer_move(Point::new(250.0, 200.0)));
//! assert!(cropper.end());
//!
//! // Crop in natural image pixels.
//! assert_eq!(cropper.data(), Some(Rect::new(300.0, 0.0, 800.0, 800.0)));
//! drop(cropper);
//! assert_eq!(changes, 2);
//! # Ok::<(), zencrop::CropError>(())
//! ```

use crate::error::CropError;
use crate::event::{CropListener, Event, Snapshot};
use crate::layout::{
    CanvasPosition, CropBoxPosition, ImageSize, Placement, compute_canvas, compute_container,
    compute_crop_box,
};
use crate::options::CropperOptions;
use crate::rect::{Point, Rect, RectPatch};
use crate::resize::{Direction, resize_crop_box};

/// What an active drag is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Translating the crop box.
    Move,
    /// Resizing from the given (currently active) corner.
    Resize(Direction),
}

/// State of one pointer drag, from press to release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    operation: Operation,
    origin: Point,
    last_point: Point,
    /// Set while a sample is being applied. `&mut self` already rules out
    /// re-entry through a listener, so this is a defensive guard only.
    processing: bool,
}

impl DragSession {
    fn new(operation: Operation, origin: Point) -> Self {
        Self {
            operation,
            origin,
            last_point: origin,
            processing: false,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Pointer position when the drag began.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Most recently applied pointer position.
    pub fn last_point(&self) -> Point {
        self.last_point
    }
}

/// Single-shot ticket for an asynchronous image-size lookup.
///
/// Only the most recently issued ticket is honored, and only once.
#[derive(Debug, PartialEq, Eq)]
pub struct ImageRequest {
    generation: u64,
}

impl ImageRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Which operation-specific event a commit reports.
#[derive(Copy, Clone)]
enum Commit {
    CropMove,
    CropScale(Direction),
    MoveCanvas,
    MoveCropBox,
    ImageLoaded,
    Options,
}

/// Crop widget controller.
///
/// Geometry getters return display coordinates; [`data`](Self::data) maps
/// the crop box back to natural image pixels.
pub struct Cropper<L: CropListener = ()> {
    options: CropperOptions,
    image: Option<ImageSize>,
    container: Rect,
    canvas: Rect,
    crop_box: Rect,
    /// Apply the configured crop-box position on the next layout instead of
    /// keeping the current box.
    reposition: bool,
    session: Option<DragSession>,
    generation: u64,
    pending: Option<u64>,
    listener: L,
}

impl Cropper {
    /// Controller without a listener.
    pub fn new(options: CropperOptions) -> Result<Self, CropError> {
        Self::with_listener(options, ())
    }
}

impl<L: CropListener> Cropper<L> {
    pub fn with_listener(options: CropperOptions, listener: L) -> Result<Self, CropError> {
        options.validate()?;
        let mut cropper = Self {
            options,
            image: None,
            container: Rect::default(),
            canvas: Rect::default(),
            crop_box: Rect::default(),
            reposition: true,
            session: None,
            generation: 0,
            pending: None,
            listener,
        };
        cropper.layout();
        Ok(cropper)
    }

    // ---- image loading ----

    /// Start an image-size lookup. Supersedes any outstanding request.
    pub fn request_image(&mut self) -> ImageRequest {
        self.generation += 1;
        self.pending = Some(self.generation);
        ImageRequest {
            generation: self.generation,
        }
    }

    /// Deliver the natural size for `request`.
    ///
    /// Returns `Ok(false)` for a superseded ticket. A valid ticket is consumed
    /// even when the size is rejected.
    pub fn image_loaded(
        &mut self,
        request: ImageRequest,
        width: f64,
        height: f64,
    ) -> Result<bool, CropError> {
        if self.pending != Some(request.generation) {
            return Ok(false);
        }
        self.pending = None;
        let image = ImageSize::new(width, height);
        if !image.is_valid() {
            return Err(CropError::InvalidImageSize);
        }
        self.end();
        self.image = Some(image);
        self.layout();
        self.commit(Commit::ImageLoaded);
        Ok(true)
    }

    /// Load an image whose size is already known.
    pub fn set_image(&mut self, width: f64, height: f64) -> Result<(), CropError> {
        let request = self.request_image();
        self.image_loaded(request, width, height).map(drop)
    }

    // ---- configuration ----

    /// Replace the options and recompute layout.
    ///
    /// The current crop box survives unless the crop-box position changed.
    /// Emits [`Event::Change`] when any rect moved.
    pub fn set_options(&mut self, options: CropperOptions) -> Result<(), CropError> {
        options.validate()?;
        if options.crop_box_position != self.options.crop_box_position {
            self.reposition = true;
        }
        self.options = options;
        if self.options.disabled {
            self.end();
        }
        let before = (self.container, self.canvas, self.crop_box);
        self.layout();
        if before != (self.container, self.canvas, self.crop_box) {
            self.commit(Commit::Options);
        }
        Ok(())
    }

    /// Enable or disable pointer interaction. Disabling ends any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
        if disabled {
            self.end();
        }
    }

    // ---- pointer sessions ----

    /// Press on the crop box body.
    ///
    /// Refused while busy, disabled, or before an image is laid out.
    pub fn begin_move(&mut self, point: Point) -> bool {
        self.begin(Operation::Move, point)
    }

    /// Press on the `direction` corner handle.
    pub fn begin_resize(&mut self, direction: Direction, point: Point) -> bool {
        self.begin(Operation::Resize(direction), point)
    }

    fn begin(&mut self, operation: Operation, point: Point) -> bool {
        if self.session.is_some() || self.options.disabled || self.image.is_none() {
            return false;
        }
        self.session = Some(DragSession::new(operation, point));
        self.listener.notify(&match operation {
            Operation::Move => Event::CropMoveStart,
            Operation::Resize(d) => Event::CropScaleStart(d),
        });
        true
    }

    /// Apply a pointer sample to the active drag.
    ///
    /// Returns whether the crop box changed. A sample that leaves the
    /// geometry untouched (a box pinned against its bounds, say) emits no
    /// events. Idle controllers ignore the sample; a disabled one ends its
    /// drag.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if self.options.disabled {
            self.end();
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.processing {
            return false;
        }
        session.processing = true;
        let delta = point.delta_from(session.last_point);
        session.last_point = point;
        let operation = session.operation;

        let changed = match operation {
            Operation::Move => self.drag_crop_box(delta),
            Operation::Resize(direction) => self.resize(direction, delta),
        };
        if let Some(session) = self.session.as_mut() {
            session.processing = false;
        }
        changed
    }

    /// Release the pointer. Returns `false` if no drag was active.
    pub fn end(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.listener.notify(&match session.operation {
            Operation::Move => Event::CropMoveEnd,
            Operation::Resize(d) => Event::CropScaleEnd(d),
        });
        true
    }

    fn drag_crop_box(&mut self, delta: Point) -> bool {
        let moved = self.crop_box.translate(delta.x, delta.y);
        let next = self.place_crop_box(moved);
        if next == self.crop_box {
            return false;
        }
        self.crop_box = next;
        self.commit(Commit::CropMove);
        true
    }

    fn resize(&mut self, direction: Direction, delta: Point) -> bool {
        let options = self.options.crop_box_options();
        let bound = options.view(self.container, self.canvas);
        let step = resize_crop_box(direction, delta, self.crop_box, options.ratio, bound);
        if let Some(session) = self.session.as_mut() {
            session.operation = Operation::Resize(step.direction);
        }
        let next = self.place_crop_box(step.rect);
        if next == self.crop_box && step.direction == direction {
            return false;
        }
        self.crop_box = next;
        self.commit(Commit::CropScale(step.direction));
        true
    }

    // ---- host moves ----

    /// Reposition the canvas. The placement becomes the canvas position
    /// option and the crop box is pulled into the new view.
    ///
    /// Returns `false` before an image is laid out.
    pub fn move_canvas(&mut self, placement: Placement) -> bool {
        let Some(image) = self.image else {
            return false;
        };
        self.options.canvas_position = CanvasPosition::Explicit(placement);
        self.canvas = compute_canvas(
            &self.options.canvas_position,
            self.options.canvas_ratio,
            image,
            self.container,
        );
        self.crop_box = self.place_crop_box(self.crop_box);
        self.commit(Commit::MoveCanvas);
        true
    }

    /// Apply a partial update to the crop box, clamped into its view.
    ///
    /// Returns `false` before an image is laid out.
    pub fn move_crop_box(&mut self, patch: RectPatch) -> bool {
        if self.image.is_none() {
            return false;
        }
        self.crop_box = self.place_crop_box(self.crop_box.extend_from(&patch));
        self.commit(Commit::MoveCropBox);
        true
    }

    // ---- getters ----

    /// Crop box in natural image pixels, relative to the image origin.
    pub fn data(&self) -> Option<Rect> {
        self.snapshot().and_then(|s| s.image_crop())
    }

    /// [`data`](Self::data) rounded to whole pixels.
    pub fn data_rounded(&self) -> Option<Rect> {
        self.data().map(Rect::round)
    }

    pub fn image_data(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn container_data(&self) -> Rect {
        self.container
    }

    pub fn canvas_data(&self) -> Rect {
        self.canvas
    }

    /// Crop box in display coordinates.
    pub fn crop_box_data(&self) -> Rect {
        self.crop_box
    }

    /// All four rects at once, once an image is laid out.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.image.map(|image| Snapshot {
            container: self.container,
            canvas: self.canvas,
            crop_box: self.crop_box,
            image,
        })
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_some()
    }

    pub fn options(&self) -> &CropperOptions {
        &self.options
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    // ---- internals ----

    /// Recompute container, canvas and crop box from the options.
    fn layout(&mut self) {
        let o = &self.options;
        self.container = compute_container(self.image, o.width, o.height, o.ratio);
        let Some(image) = self.image else {
            return;
        };
        self.canvas = compute_canvas(&o.canvas_position, o.canvas_ratio, image, self.container);
        self.crop_box = if self.reposition {
            compute_crop_box(
                &o.crop_box_position,
                o.crop_box_options(),
                self.container,
                self.canvas,
            )
        } else {
            self.place_crop_box(self.crop_box)
        };
        self.reposition = false;
    }

    /// Commit `rect` as an explicit crop box against the current view.
    fn place_crop_box(&self, rect: Rect) -> Rect {
        compute_crop_box(
            &CropBoxPosition::Explicit(Placement::from(rect)),
            self.options.crop_box_options(),
            self.container,
            self.canvas,
        )
    }

    /// Report a geometry change: the operation's event, then `Change`.
    fn commit(&mut self, commit: Commit) {
        let Some(snapshot) = self.snapshot() else {
            return;
        };
        let event = match commit {
            Commit::CropMove => Some(Event::CropMoveMove(&snapshot)),
            Commit::CropScale(d) => Some(Event::CropScaleMove(d, &snapshot)),
            Commit::MoveCanvas => Some(Event::MoveCanvas(&snapshot)),
            Commit::MoveCropBox => Some(Event::MoveCropBox(&snapshot)),
            Commit::ImageLoaded => Some(Event::ImageLoaded(&snapshot)),
            Commit::Options => None,
        };
        if let Some(event) = event {
            self.listener.notify(&event);
        }
        self.listener.notify(&Event::Change {
            data: snapshot.image_crop(),
            snapshot: &snapshot,
        });
    }
}
