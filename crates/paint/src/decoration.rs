use crate::canvas::Canvas;
use crate::font::Font;
use crate::geometry::Rect;
use crate::paint::Paint;

/// Visual styling applied when drawing a run of text: an optional highlight
/// band behind the glyphs, a baseline shift, and underline/strike-through
/// lines.
///
/// Absence of a decoration is expressed as `Option<TextDecoration>` at the
/// call site; see [`equivalent`] for comparisons across absent values.
#[derive(Debug, Clone)]
pub struct TextDecoration {
    pub font: Font,
    pub paint: Paint,
    pub background: Option<Paint>,
    pub baseline_offset: f32,
    pub underline: bool,
    pub strike_through: bool,
}

impl TextDecoration {
    pub fn new(font: Font, paint: Paint) -> Self {
        Self {
            font,
            paint,
            background: None,
            baseline_offset: 0.0,
            underline: false,
            strike_through: false,
        }
    }

    /// Returns true if both decorations would produce identical output.
    ///
    /// Paints compare by value; fonts compare by descriptor, so two handles
    /// to the same face are equivalent no matter how they were obtained.
    pub fn equivalent(&self, other: &TextDecoration) -> bool {
        self.underline == other.underline
            && self.strike_through == other.strike_through
            && self.baseline_offset == other.baseline_offset
            && self.paint == other.paint
            && self.background == other.background
            && self.font.descriptor() == other.font.descriptor()
    }

    /// Draws `text` at `(x, y)` with this decoration, `y` being the text
    /// baseline.
    ///
    /// Layering: the highlight band first (one baseline above `y` through
    /// one line height), then the glyphs shifted by `baseline_offset`, then
    /// the strike-through and underline lines.
    pub fn draw_text(&self, canvas: &mut dyn Canvas, text: &str, x: f32, y: f32, width: f32) {
        if let Some(background) = &self.background {
            canvas.draw_rect(
                Rect::new(x, y - self.font.baseline(), width, self.font.line_height()),
                background,
            );
        }
        let y = y + self.baseline_offset;
        canvas.draw_simple_string(text, x, y, &self.font, &self.paint);
        if self.underline || self.strike_through {
            // The 1px stroke is set on a clone; the caller's paint stays untouched.
            let mut paint = self.paint.clone();
            let y = y + 1.0;
            if self.strike_through {
                let line_y = y + 0.5 - self.font.baseline() / 2.0;
                paint.set_stroke_width(1.0);
                canvas.draw_line(x, line_y, x + width, line_y, &paint);
            }
            if self.underline {
                paint.set_stroke_width(1.0);
                canvas.draw_line(x, y + 1.0, x + width, y + 1.0, &paint);
            }
        }
    }
}

/// Equivalence over possibly-absent decorations: two absent decorations are
/// equivalent, and absent never matches present.
pub fn equivalent(a: Option<&TextDecoration>, b: Option<&TextDecoration>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.equivalent(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayCommand, DisplayList};
    use crate::color::Color;
    use crate::font::{FontDescriptor, FontMetrics};

    fn sample_decoration() -> TextDecoration {
        TextDecoration::new(
            Font::approximate("Inter", 12.0),
            Paint::fill(Color::rgb(20, 20, 20)),
        )
    }

    #[test]
    fn absent_decorations_are_equivalent_to_each_other_only() {
        let decoration = sample_decoration();
        assert!(equivalent(None, None));
        assert!(!equivalent(Some(&decoration), None));
        assert!(!equivalent(None, Some(&decoration)));
        assert!(equivalent(Some(&decoration), Some(&decoration.clone())));
    }

    #[test]
    fn single_field_differences_break_equivalence() {
        let base = sample_decoration();

        let mut other = base.clone();
        other.underline = true;
        assert!(!base.equivalent(&other));

        let mut other = base.clone();
        other.strike_through = true;
        assert!(!base.equivalent(&other));

        let mut other = base.clone();
        other.baseline_offset = 2.0;
        assert!(!base.equivalent(&other));

        let mut other = base.clone();
        other.background = Some(Paint::fill(Color::rgb(250, 250, 0)));
        assert!(!base.equivalent(&other));

        let mut other = base.clone();
        other.paint = Paint::fill(Color::rgb(200, 0, 0));
        assert!(!base.equivalent(&other));

        let mut other = base.clone();
        other.font = Font::approximate("Mono", 12.0);
        assert!(!base.equivalent(&other));
    }

    #[test]
    fn equivalence_uses_font_descriptors_not_metrics() {
        let base = sample_decoration();
        let mut other = base.clone();
        other.font = Font::new(
            FontDescriptor::new("Inter", 12.0),
            FontMetrics {
                ascent: 11.0,
                descent: 3.0,
                leading: 0.0,
            },
        );
        assert!(base.equivalent(&other));
    }

    #[test]
    fn clone_owns_its_paints() {
        let mut base = sample_decoration();
        base.background = Some(Paint::fill(Color::rgb(255, 255, 0)));

        let mut cloned = base.clone();
        assert!(base.equivalent(&cloned));

        cloned.paint.set_stroke_width(3.0);
        assert_eq!(base.paint.stroke_width(), 1.0);
        assert!(!base.equivalent(&cloned));
    }

    #[test]
    fn draw_order_is_background_text_strike_underline() {
        let mut decoration = sample_decoration();
        decoration.background = Some(Paint::fill(Color::rgb(255, 255, 0)));
        decoration.underline = true;
        decoration.strike_through = true;

        let mut list = DisplayList::new();
        decoration.draw_text(&mut list, "Hi", 10.0, 20.0, 30.0);

        let commands = list.commands();
        assert_eq!(commands.len(), 4);

        let baseline = decoration.font.baseline();
        match &commands[0] {
            DisplayCommand::Rect { rect, .. } => {
                assert_eq!(rect.origin.x, 10.0);
                assert_eq!(rect.origin.y, 20.0 - baseline);
                assert_eq!(rect.size.width, 30.0);
                assert_eq!(rect.size.height, decoration.font.line_height());
            }
            other => panic!("expected background rect, got {other:?}"),
        }

        match &commands[1] {
            DisplayCommand::Text { text, position, .. } => {
                assert_eq!(text, "Hi");
                assert_eq!(position.x, 10.0);
                assert_eq!(position.y, 20.0);
            }
            other => panic!("expected glyph run, got {other:?}"),
        }

        let strike_y = match &commands[2] {
            DisplayCommand::Line { from, to, paint } => {
                assert_eq!(from.y, to.y);
                assert_eq!(from.x, 10.0);
                assert_eq!(to.x, 40.0);
                assert_eq!(from.y, 21.0 + 0.5 - baseline / 2.0);
                assert_eq!(paint.stroke_width(), 1.0);
                from.y
            }
            other => panic!("expected strike-through line, got {other:?}"),
        };

        let underline_y = match &commands[3] {
            DisplayCommand::Line { from, to, paint } => {
                assert_eq!(from.y, to.y);
                assert_eq!(from.y, 22.0);
                assert_eq!(paint.stroke_width(), 1.0);
                from.y
            }
            other => panic!("expected underline, got {other:?}"),
        };

        // With any baseline above 2 the strike-through sits above the underline.
        assert!(baseline > 2.0);
        assert!(strike_y < underline_y);
    }

    #[test]
    fn baseline_offset_shifts_glyphs_and_lines_but_not_background() {
        let mut decoration = sample_decoration();
        decoration.background = Some(Paint::fill(Color::rgb(255, 255, 0)));
        decoration.baseline_offset = 4.0;
        decoration.underline = true;

        let mut list = DisplayList::new();
        decoration.draw_text(&mut list, "x", 0.0, 10.0, 6.0);

        match &list.commands()[0] {
            DisplayCommand::Rect { rect, .. } => {
                assert_eq!(rect.origin.y, 10.0 - decoration.font.baseline());
            }
            other => panic!("expected background rect, got {other:?}"),
        }
        match &list.commands()[1] {
            DisplayCommand::Text { position, .. } => assert_eq!(position.y, 14.0),
            other => panic!("expected glyph run, got {other:?}"),
        }
        match &list.commands()[2] {
            DisplayCommand::Line { from, .. } => assert_eq!(from.y, 16.0),
            other => panic!("expected underline, got {other:?}"),
        }
    }

    #[test]
    fn drawing_leaves_the_decoration_paint_unmodified() {
        let mut decoration = sample_decoration();
        decoration.paint.set_stroke_width(5.0);
        decoration.underline = true;
        decoration.strike_through = true;

        let mut list = DisplayList::new();
        decoration.draw_text(&mut list, "x", 0.0, 10.0, 6.0);

        assert_eq!(decoration.paint.stroke_width(), 5.0);
        for command in list.commands() {
            if let DisplayCommand::Line { paint, .. } = command {
                assert_eq!(paint.stroke_width(), 1.0);
            }
        }
    }

    #[test]
    fn plain_decoration_issues_a_single_glyph_run() {
        let decoration = sample_decoration();
        let mut list = DisplayList::new();
        decoration.draw_text(&mut list, "plain", 0.0, 10.0, 30.0);
        assert_eq!(list.len(), 1);
        assert!(matches!(list.commands()[0], DisplayCommand::Text { .. }));
    }
}
