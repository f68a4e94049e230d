//! Notifications emitted by [`Cropper`](crate::Cropper).
//!
//! Every committed geometry change produces two events: the
//! operation-specific one (`CropMoveMove`, `CropScaleMove`, `MoveCanvas`,
//! `MoveCropBox` or `ImageLoaded`) followed by [`Event::Change`]. Start and
//! end events bracket pointer sessions and carry no geometry.

use crate::layout::ImageSize;
use crate::rect::Rect;
use crate::resize::Direction;

/// Widget geometry at the moment an event fires.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub container: Rect,
    pub canvas: Rect,
    /// Crop box in display coordinates.
    pub crop_box: Rect,
    pub image: ImageSize,
}

impl Snapshot {
    /// Crop box in natural image pixels, relative to the image origin.
    ///
    /// `None` while the canvas has no width.
    pub fn image_crop(&self) -> Option<Rect> {
        (self.canvas.width > 0.0).then(|| {
            self.crop_box
                .relative_to(self.canvas)
                .zoom_to(self.image.width / self.canvas.width)
        })
    }
}

/// Something that happened to the widget.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event<'a> {
    /// Crop-box drag started.
    CropMoveStart,
    /// Crop box moved by a drag sample.
    CropMoveMove(&'a Snapshot),
    /// Crop-box drag ended.
    CropMoveEnd,
    /// Corner resize started on the given handle.
    CropScaleStart(Direction),
    /// Crop box resized by a drag sample. Carries the corner active after the
    /// sample.
    CropScaleMove(Direction, &'a Snapshot),
    /// Corner resize ended; carries the last active corner.
    CropScaleEnd(Direction),
    /// Canvas repositioned by the host.
    MoveCanvas(&'a Snapshot),
    /// Crop box repositioned by the host.
    MoveCropBox(&'a Snapshot),
    /// Image size arrived and layout was recomputed.
    ImageLoaded(&'a Snapshot),
    /// Aggregate notification after any geometry change.
    Change {
        /// Crop box in natural image pixels (see [`Snapshot::image_crop`]).
        data: Option<Rect>,
        snapshot: &'a Snapshot,
    },
}

impl Event<'_> {
    /// Geometry carried by the event, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match *self {
            Event::CropMoveMove(s)
            | Event::CropScaleMove(_, s)
            | Event::MoveCanvas(s)
            | Event::MoveCropBox(s)
            | Event::ImageLoaded(s)
            | Event::Change { snapshot: s, .. } => Some(s),
            Event::CropMoveStart
            | Event::CropMoveEnd
            | Event::CropScaleStart(_)
            | Event::CropScaleEnd(_) => None,
        }
    }

    /// Stable snake_case name, for logs and test assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Event::CropMoveStart => "crop_move_start",
            Event::CropMoveMove(_) => "crop_move_move",
            Event::CropMoveEnd => "crop_move_end",
            Event::CropScaleStart(_) => "crop_scale_start",
            Event::CropScaleMove(..) => "crop_scale_move",
            Event::CropScaleEnd(_) => "crop_scale_end",
            Event::MoveCanvas(_) => "move_canvas",
            Event::MoveCropBox(_) => "move_crop_box",
            Event::ImageLoaded(_) => "image_loaded",
            Event::Change { .. } => "change",
        }
    }
}

/// Receiver for [`Event`]s. Called synchronously, in order.
pub trait CropListener {
    fn notify(&mut self, event: &Event<'_>);
}

impl CropListener for () {
    fn notify(&mut self, _event: &Event<'_>) {}
}

impl<F> CropListener for F
where
    F: FnMut(&Event<'_>),
{
    fn notify(&mut self, event: &Event<'_>) {
        self(event)
    }
}

#[cfg(feature = "alloc")]
impl<L: CropListener> CropListener for alloc::vec::Vec<L> {
    fn notify(&mut self, event: &Event<'_>) {
        for listener in self.iter_mut() {
            listener.notify(event);
        }
    }
}

#[cfg(feature = "alloc")]
impl CropListener for alloc::boxed::Box<dyn CropListener + '_> {
    fn notify(&mut self, event: &Event<'_>) {
        (**self).notify(event)
    }
}
