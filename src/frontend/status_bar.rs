//! Status bar panel: bottom bar showing point count and axis domains.

use egui::{RichText, Ui};

use crate::frontend::chart::ChartLayout;

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub point_count: usize,
    pub layout: &'a ChartLayout,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(RichText::new(point_count_text(ctx.point_count)).small());

        ui.separator();

        let (x0, x1) = ctx.layout.x.domain_extent();
        let (y0, y1) = ctx.layout.y.domain_extent();
        ui.label(RichText::new(format!("X: {} – {}", x0, x1)).small());
        ui.label(RichText::new(format!("Y: {} – {}", y0, y1)).small());
    });
}

fn point_count_text(count: usize) -> String {
    match count {
        1 => "1 point".to_string(),
        n => format!("{} points", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_text() {
        assert_eq!(point_count_text(0), "0 points");
        assert_eq!(point_count_text(1), "1 point");
        assert_eq!(point_count_text(20), "20 points");
    }
}
