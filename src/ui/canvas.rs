/// Canvas mirror of the viewer frame
///
/// Draws the loaded frame fitted to the widget bounds and a translucent
/// accent rectangle over it whose alpha the viewer state pulses.
use iced::mouse::Cursor;
use iced::widget::canvas::{self, Program};
use iced::widget::image::Handle;
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::theme;
use crate::Message;

pub struct FrameCanvas {
    /// Frame handle and its natural size
    pub frame: Option<(Handle, Size)>,
    pub overlay_alpha: f32,
}

impl Program<Message> for FrameCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if let Some((handle, natural)) = &self.frame {
            let target = fit(*natural, bounds.size());
            frame.draw_image(target, canvas::Image::new(handle.clone()));
            frame.fill_rectangle(target.position(), target.size(), theme::pulse(self.overlay_alpha));
        }

        vec![frame.into_geometry()]
    }
}

/// Largest rectangle with the frame's aspect ratio that fits in `bounds`,
/// centered
fn fit(natural: Size, bounds: Size) -> Rectangle {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    let scale = (bounds.width / natural.width).min(bounds.height / natural.height);
    let size = Size::new(natural.width * scale, natural.height * scale);
    let origin = Point::new(
        (bounds.width - size.width) / 2.0,
        (bounds.height - size.height) / 2.0,
    );

    Rectangle::new(origin, size)
}
