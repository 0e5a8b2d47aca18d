//! Camera access.
//!
//! A camera hands out an exclusive [`CameraStream`]. [`CameraSession`] owns
//! that stream and guarantees it is stopped exactly once, whether the
//! session ends with a capture or is simply dropped.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{DmvError, DmvResult};

/// A live feed held exclusively by one session.
pub trait CameraStream {
    /// Current frame.
    fn frame(&mut self) -> DmvResult<RgbaImage>;

    /// Release the device.
    fn stop(&mut self);
}

/// Something that can grant access to a camera feed.
pub trait Camera {
    fn acquire(&self) -> DmvResult<Box<dyn CameraStream>>;
}

/// Scoped, exclusive hold on a camera stream.
pub struct CameraSession {
    stream: Option<Box<dyn CameraStream>>,
}

impl CameraSession {
    /// Acquire the camera. Fails when access is denied or absent.
    pub fn open(camera: &dyn Camera) -> DmvResult<Self> {
        let stream = camera.acquire()?;
        debug!("camera stream acquired");
        Ok(Self {
            stream: Some(stream),
        })
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Peek at the feed without ending the session.
    pub fn preview(&mut self) -> DmvResult<RgbaImage> {
        self.stream
            .as_mut()
            .ok_or(DmvError::CameraReleased)?
            .frame()
    }

    /// Grab one frame and release the stream.
    pub fn capture(&mut self) -> DmvResult<RgbaImage> {
        let mut stream = self.stream.take().ok_or(DmvError::CameraReleased)?;
        let frame = stream.frame();
        stream.stop();
        debug!("camera stream released after capture");
        frame
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!("camera stream released on teardown");
        }
    }
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Camera that is never available, for machines without one.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableCamera;

impl Camera for UnavailableCamera {
    fn acquire(&self) -> DmvResult<Box<dyn CameraStream>> {
        Err(DmvError::CameraUnavailable("no camera device".to_string()))
    }
}

/// Generated scanner feed: a lit silhouette on a gradient with a sweeping
/// scan line.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticCamera {
    pub width: u32,
    pub height: u32,
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self {
            width: 320,
            height: 320,
        }
    }
}

impl Camera for SyntheticCamera {
    fn acquire(&self) -> DmvResult<Box<dyn CameraStream>> {
        Ok(Box::new(SyntheticStream {
            width: self.width,
            height: self.height,
            tick: 0,
            stopped: false,
        }))
    }
}

struct SyntheticStream {
    width: u32,
    height: u32,
    tick: u32,
    stopped: bool,
}

impl CameraStream for SyntheticStream {
    fn frame(&mut self) -> DmvResult<RgbaImage> {
        if self.stopped {
            return Err(DmvError::CameraReleased);
        }
        self.tick = self.tick.wrapping_add(1);

        let (w, h) = (self.width, self.height);
        let scan = self.tick.wrapping_mul(7) % h.max(1);
        let (cx, cy) = (w as f64 / 2.0, h as f64 * 0.45);
        let (rx, ry) = (w as f64 * 0.22, h as f64 * 0.3);

        Ok(RgbaImage::from_fn(w, h, |x, y| {
            let dx = (x as f64 - cx) / rx;
            let dy = (y as f64 - cy) / ry;
            let in_face = dx * dx + dy * dy <= 1.0;
            let shade = (y * 120 / h.max(1)) as u8;
            let mut px = if in_face {
                Rgba([210 - shade / 2, 170 - shade / 3, 140, 255])
            } else {
                Rgba([30 + shade, 20, 60 + shade / 2, 255])
            };
            if y.abs_diff(scan) < 2 {
                px = Rgba([120, 255, 200, 255]);
            }
            px
        }))
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how often the stream is stopped.
    struct CountingCamera {
        stops: Rc<Cell<u32>>,
    }

    struct CountingStream {
        stops: Rc<Cell<u32>>,
    }

    impl CameraStream for CountingStream {
        fn frame(&mut self) -> DmvResult<RgbaImage> {
            Ok(RgbaImage::new(4, 4))
        }

        fn stop(&mut self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    impl Camera for CountingCamera {
        fn acquire(&self) -> DmvResult<Box<dyn CameraStream>> {
            Ok(Box::new(CountingStream {
                stops: self.stops.clone(),
            }))
        }
    }

    fn counting() -> (CountingCamera, Rc<Cell<u32>>) {
        let stops = Rc::new(Cell::new(0));
        (CountingCamera { stops: stops.clone() }, stops)
    }

    #[test]
    fn capture_releases_once() {
        let (camera, stops) = counting();
        let mut session = CameraSession::open(&camera).unwrap();
        session.preview().unwrap();
        assert_eq!(stops.get(), 0);

        session.capture().unwrap();
        assert_eq!(stops.get(), 1);
        assert!(!session.is_active());

        drop(session);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn drop_releases_active_stream() {
        let (camera, stops) = counting();
        let session = CameraSession::open(&camera).unwrap();
        drop(session);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn capture_after_release_errors() {
        let (camera, _stops) = counting();
        let mut session = CameraSession::open(&camera).unwrap();
        session.capture().unwrap();
        assert!(matches!(session.capture(), Err(DmvError::CameraReleased)));
        assert!(matches!(session.preview(), Err(DmvError::CameraReleased)));
    }

    #[test]
    fn unavailable_camera_is_denied() {
        assert!(matches!(
            CameraSession::open(&UnavailableCamera),
            Err(DmvError::CameraUnavailable(_))
        ));
    }

    #[test]
    fn synthetic_frames_have_requested_size() {
        let camera = SyntheticCamera { width: 64, height: 48 };
        let mut session = CameraSession::open(&camera).unwrap();
        let frame = session.capture().unwrap();
        assert_eq!(frame.dimensions(), (64, 48));
    }
}
