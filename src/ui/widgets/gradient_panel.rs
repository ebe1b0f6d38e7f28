// SPDX-License-Identifier: MPL-2.0
//! Decorative hero panel drawn on a Canvas.
//!
//! A rounded rectangle filled with the brand gradient, tilted a few degrees
//! and covered by a translucent veil. It grows from 80% to full size while
//! fading in.

use crate::ui::design_tokens::radius;
use crate::ui::theming::fade;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Height of the panel.
pub const HEIGHT: f32 = 400.0;

/// Tilt of the panel, in degrees.
const TILT_DEGREES: f32 = 3.0;

/// Smallest scale, at reveal progress `0.0`.
const START_SCALE: f32 = 0.8;

/// Share of the bounds the unrotated rectangle occupies, leaving room for
/// the tilted corners.
const INSET: f32 = 0.9;

pub struct GradientPanel {
    cache: Cache,
    start: Color,
    end: Color,
    veil: Color,
    progress: f32,
}

impl GradientPanel {
    /// Creates a panel with gradient `start` → `end` and a `veil` laid on
    /// top. `progress` is the reveal progress, `0.0` to `1.0`.
    #[must_use]
    pub fn new(start: Color, end: Color, veil: Color, progress: f32) -> Self {
        Self {
            cache: Cache::default(),
            start,
            end,
            veil,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// Scale applied at the current progress.
    #[must_use]
    pub fn scale(&self) -> f32 {
        START_SCALE + (1.0 - START_SCALE) * self.progress
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(HEIGHT))
            .into()
    }
}

impl<Message> canvas::Program<Message> for GradientPanel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let size = Size::new(frame.width() * INSET, frame.height() * INSET);
                let top_left = Point::new(-size.width / 2.0, -size.height / 2.0);
                let alpha = self.progress;

                frame.with_save(|frame| {
                    frame.translate(Vector::new(center.x, center.y));
                    frame.rotate(TILT_DEGREES.to_radians());
                    frame.scale(self.scale());

                    let panel = Path::rounded_rectangle(top_left, size, radius::MD.into());

                    let gradient = canvas::gradient::Linear::new(
                        top_left,
                        Point::new(top_left.x + size.width, top_left.y),
                    )
                    .add_stop(0.0, fade(self.start, alpha))
                    .add_stop(1.0, fade(self.end, alpha));

                    frame.fill(&panel, canvas::Fill::from(canvas::Gradient::Linear(gradient)));
                    frame.fill(&panel, fade(self.veil, alpha));
                });
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn scale_grows_with_progress() {
        let hidden = GradientPanel::new(palette::BLUE_500, palette::PURPLE_500, Color::BLACK, 0.0);
        let shown = GradientPanel::new(palette::BLUE_500, palette::PURPLE_500, Color::BLACK, 1.0);
        assert!((hidden.scale() - START_SCALE).abs() < f32::EPSILON);
        assert!((shown.scale() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_clamped() {
        let panel = GradientPanel::new(palette::BLUE_500, palette::PURPLE_500, Color::BLACK, 4.0);
        assert!((panel.scale() - 1.0).abs() < f32::EPSILON);
    }
}
