// src/gui/components/charts.rs
//
// Minimal painter charts: a price-over-time line and horizontal bars.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::model::Observation;

const PAD: f32 = 36.0;

/// Prices over time, in timestamp order. Needs at least one point.
pub fn price_line(ui: &mut egui::Ui, rows: &[Observation], height: f32) {
    if rows.is_empty() {
        ui.label("No data to chart.");
        return;
    }

    let mut pts: Vec<(f64, f64)> = rows
        .iter()
        .map(|o| (o.timestamp.and_utc().timestamp() as f64, o.price.as_f64()))
        .collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (x0, x1) = (pts[0].0, pts[pts.len() - 1].0);
    let (y0, y1) = pts
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));

    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);

    let plot = Rect::from_min_max(rect.min + Vec2::new(PAD, 8.0), rect.max - Vec2::new(8.0, 8.0));
    let map = |x: f64, y: f64| -> Pos2 {
        let fx = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.5 };
        let fy = if y1 > y0 { (y - y0) / (y1 - y0) } else { 0.5 };
        Pos2::new(
            plot.left() + fx as f32 * plot.width(),
            plot.bottom() - fy as f32 * plot.height(),
        )
    };

    let axis = Stroke::new(1.0, visuals.weak_text_color());
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    let font = FontId::proportional(11.0);
    let text_col = visuals.text_color();
    painter.text(plot.left_top(), Align2::RIGHT_TOP, format!("{y1:.2} "), font.clone(), text_col);
    painter.text(plot.left_bottom(), Align2::RIGHT_BOTTOM, format!("{y0:.2} "), font, text_col);

    let line: Vec<Pos2> = pts.iter().map(|&(x, y)| map(x, y)).collect();
    let accent = visuals.selection.stroke.color;
    if line.len() > 1 {
        painter.add(Shape::line(line.clone(), Stroke::new(1.5, accent)));
    }
    for p in line {
        painter.circle_filled(p, 2.5, accent);
    }
}

/// One bar per `(label, value)`, scaled to the largest value.
pub fn bars(ui: &mut egui::Ui, items: &[(String, f64)], value_fmt: fn(f64) -> String) {
    if items.is_empty() {
        ui.label("No data to chart.");
        return;
    }

    let max = items.iter().map(|i| i.1).fold(0.0_f64, f64::max);
    let label_w = 180.0;
    let bar_h = 16.0;
    let gap = 4.0;
    let height = items.len() as f32 * (bar_h + gap);

    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    let font = FontId::proportional(12.0);
    let fill = Color32::from_rgb(70, 130, 180);
    let bar_room = (rect.width() - label_w - 70.0).max(10.0);

    for (i, (label, value)) in items.iter().enumerate() {
        let top = rect.top() + i as f32 * (bar_h + gap);
        let mid = top + bar_h / 2.0;
        painter.text(
            Pos2::new(rect.left() + label_w - 6.0, mid),
            Align2::RIGHT_CENTER,
            truncate(label, 28),
            font.clone(),
            visuals.text_color(),
        );

        let w = if max > 0.0 { (value / max) as f32 * bar_room } else { 0.0 };
        let bar = Rect::from_min_size(Pos2::new(rect.left() + label_w, top), Vec2::new(w, bar_h));
        painter.rect_filled(bar, 2.0, fill);
        painter.text(
            Pos2::new(bar.right() + 6.0, mid),
            Align2::LEFT_CENTER,
            value_fmt(*value),
            font.clone(),
            visuals.text_color(),
        );
    }
}

fn truncate(s: &str, n: usize) -> String {
    if s.chars().count() <= n {
        return s!(s);
    }
    let mut out: String = s.chars().take(n.saturating_sub(1)).collect();
    out.push('…');
    out
}
