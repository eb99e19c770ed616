//! Interactive window for the grid viewer.

use image::RgbaImage;

use crate::domain::AppError;
use crate::ports::GridDisplay;

#[cfg(feature = "viewer")]
pub use window::WindowGridDisplay;

#[cfg(feature = "viewer")]
mod window {
    use std::num::NonZeroU32;
    use std::rc::Rc;

    use image::RgbaImage;
    use softbuffer::{Context, Surface};
    use winit::dpi::PhysicalSize;
    use winit::event::{Event, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::window::{Window, WindowBuilder};

    use crate::domain::{AppError, NormalizedCoord};
    use crate::ports::GridDisplay;

    /// Blits the image into a native window and tracks the cursor in the title bar.
    #[derive(Debug, Clone, Default)]
    pub struct WindowGridDisplay;

    impl GridDisplay for WindowGridDisplay {
        fn show(&self, title: &str, image: &RgbaImage) -> Result<(), AppError> {
            let (image_width, image_height) = image.dimensions();
            let pixels: Vec<u32> = image
                .pixels()
                .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
                .collect();

            let event_loop = EventLoop::new().map_err(AppError::viewer_error)?;
            let window = Rc::new(
                WindowBuilder::new()
                    .with_title(title)
                    .with_inner_size(PhysicalSize::new(image_width, image_height))
                    .with_resizable(false)
                    .build(&event_loop)
                    .map_err(AppError::viewer_error)?,
            );
            let context = Context::new(window.clone()).map_err(AppError::viewer_error)?;
            let mut surface =
                Surface::new(&context, window.clone()).map_err(AppError::viewer_error)?;

            let mut failure: Option<AppError> = None;
            event_loop
                .run(|event, elwt| {
                    elwt.set_control_flow(ControlFlow::Wait);
                    let Event::WindowEvent { window_id, event } = event else {
                        return;
                    };
                    if window_id != window.id() {
                        return;
                    }
                    match event {
                        WindowEvent::RedrawRequested => {
                            if let Err(e) =
                                redraw(&mut surface, &window, &pixels, image_width, image_height)
                            {
                                failure = Some(e);
                                elwt.exit();
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            let coord = NormalizedCoord::from_pixel(
                                position.x,
                                position.y,
                                image_width,
                                image_height,
                            );
                            window.set_title(&format!("{title} {coord}"));
                        }
                        WindowEvent::CloseRequested => elwt.exit(),
                        _ => {}
                    }
                })
                .map_err(AppError::viewer_error)?;

            match failure {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    fn redraw(
        surface: &mut Surface<Rc<Window>, Rc<Window>>,
        window: &Window,
        pixels: &[u32],
        image_width: u32,
        image_height: u32,
    ) -> Result<(), AppError> {
        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        surface.resize(width, height).map_err(AppError::viewer_error)?;

        let mut buffer = surface.buffer_mut().map_err(AppError::viewer_error)?;
        for y in 0..size.height {
            for x in 0..size.width {
                let target = (y * size.width + x) as usize;
                buffer[target] = if x < image_width && y < image_height {
                    pixels[(y * image_width + x) as usize]
                } else {
                    0
                };
            }
        }
        buffer.present().map_err(AppError::viewer_error)
    }
}

/// Stand-in used when the crate is built without the `viewer` feature.
#[derive(Debug, Clone, Default)]
pub struct HeadlessGridDisplay;

impl GridDisplay for HeadlessGridDisplay {
    fn show(&self, _title: &str, _image: &RgbaImage) -> Result<(), AppError> {
        Err(AppError::Viewer(
            "assetkit was built without the `viewer` feature; use --save to write the image"
                .to_string(),
        ))
    }
}
