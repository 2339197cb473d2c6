// src/gui/components/chart_view.rs
//
// One chart page at a time: grouped bars (rating, count) per title, rating
// scale on the left, count scale on the right, titles rotated under the axis.

use eframe::egui::{self, epaint::TextShape, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::chart::{self, Axes, ChartPage, ChartRenderer, CATEGORY_AXIS, COUNT_SERIES, RATING_SERIES};
use crate::error::RenderError;
use crate::gui::app::App;

const RATING_COLOR: Color32 = Color32::from_rgb(66, 133, 244);
const COUNT_COLOR: Color32 = Color32::from_rgb(245, 166, 35);

// plot margins: left/right hold tick labels, bottom holds rotated titles
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 64.0;
const MARGIN_TOP: f32 = 56.0;
const MARGIN_BOTTOM: f32 = 150.0;
const MIN_PLOT: Vec2 = Vec2::new(120.0, 80.0);
const LABEL_CHARS: usize = 28;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.dataset.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No data yet. Press SCRAPE.");
        });
        return;
    }

    let axes = Axes::for_dataset(&app.dataset);
    let pages = chart::paginate(&app.dataset, app.state.options.chart.page_count);
    let last = pages.len().saturating_sub(1);
    let cur = app.state.gui.chart_page.min(last);

    ui.horizontal(|ui| {
        if ui.add_enabled(cur > 0, egui::Button::new("◀ Prev")).clicked() {
            app.state.gui.chart_page = cur - 1;
        }
        ui.label(format!("Page {} of {}", cur + 1, pages.len()));
        if ui.add_enabled(cur < last, egui::Button::new("Next ▶")).clicked() {
            app.state.gui.chart_page = cur + 1;
        }
    });

    let Some(page) = pages.get(cur) else { return };
    if page.is_empty() {
        ui.label(format!("{}: nothing to show", page.title()));
        return;
    }

    let result = EguiRenderer { ui: &mut *ui }.render(page, &axes);
    if let Err(e) = result {
        logd!("Chart: {e}");
        ui.colored_label(Color32::LIGHT_RED, format!("Chart {e}"));
    }
}

/// Paints one page into the remaining space of a `Ui`.
pub struct EguiRenderer<'u> {
    pub ui: &'u mut egui::Ui,
}

impl ChartRenderer for EguiRenderer<'_> {
    fn render(&mut self, page: &ChartPage<'_>, axes: &Axes) -> Result<(), RenderError> {
        let size = self.ui.available_size();
        let plot_size = size - Vec2::new(MARGIN_LEFT + MARGIN_RIGHT, MARGIN_TOP + MARGIN_BOTTOM);
        if plot_size.x < MIN_PLOT.x || plot_size.y < MIN_PLOT.y {
            return Err(RenderError::TooSmall { page: page.number() });
        }

        let (response, painter) = self.ui.allocate_painter(size, Sense::hover());
        let outer = response.rect;
        let plot = Rect::from_min_size(outer.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP), plot_size);

        let visuals = self.ui.visuals();
        let text_color = visuals.text_color();
        let grid = Stroke::new(0.5, visuals.weak_text_color());
        let axis = Stroke::new(1.0, text_color);
        let small = FontId::proportional(11.0);

        // title + legend
        painter.text(
            Pos2::new(outer.center().x, outer.top() + 4.0),
            Align2::CENTER_TOP,
            page.title(),
            FontId::proportional(16.0),
            text_color,
        );
        let mut legend = Pos2::new(plot.left(), outer.top() + 30.0);
        for (color, name) in [(RATING_COLOR, RATING_SERIES), (COUNT_COLOR, COUNT_SERIES)] {
            painter.rect_filled(Rect::from_min_size(legend, Vec2::splat(10.0)), 0.0, color);
            let r = painter.text(legend + Vec2::new(14.0, -1.0), Align2::LEFT_TOP, name, small.clone(), text_color);
            legend.x = r.right() + 16.0;
        }

        // left scale (rating) with grid
        for t in axes.rating.ticks() {
            let y = plot.bottom() - axes.rating.fraction(t) as f32 * plot.height();
            painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid);
            painter.text(Pos2::new(plot.left() - 6.0, y), Align2::RIGHT_CENTER, format!("{t}"), small.clone(), text_color);
        }
        // right scale (count)
        for t in axes.count.ticks() {
            let y = plot.bottom() - axes.count.fraction(t) as f32 * plot.height();
            painter.line_segment([Pos2::new(plot.right(), y), Pos2::new(plot.right() + 4.0, y)], axis);
            painter.text(Pos2::new(plot.right() + 6.0, y), Align2::LEFT_CENTER, format!("{t}"), small.clone(), COUNT_COLOR);
        }

        painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
        painter.line_segment([plot.left_top(), plot.left_bottom()], axis);
        painter.line_segment([plot.right_top(), plot.right_bottom()], axis);

        // axis names
        painter.add(rotated(&painter, Pos2::new(outer.left() + 2.0, plot.center().y), axes.rating.label, text_color, -90.0));
        painter.add(rotated(&painter, Pos2::new(outer.right() - 14.0, plot.center().y), axes.count.label, COUNT_COLOR, -90.0));
        painter.text(
            Pos2::new(plot.center().x, outer.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            CATEGORY_AXIS,
            small.clone(),
            text_color,
        );

        // bars
        let n = page.len() as f32;
        let group_w = plot.width() / n;
        let bar_w = (group_w * 0.35).max(1.0);

        for (i, rec) in page.records().iter().enumerate() {
            let x0 = plot.left() + i as f32 * group_w + group_w * 0.15;

            let h = axes.rating.fraction(rec.rating()) as f32 * plot.height();
            painter.rect_filled(
                Rect::from_min_max(Pos2::new(x0, plot.bottom() - h), Pos2::new(x0 + bar_w, plot.bottom())),
                0.0,
                RATING_COLOR,
            );

            let h = axes.count.fraction(rec.rating_count_thousands()) as f32 * plot.height();
            painter.rect_filled(
                Rect::from_min_max(Pos2::new(x0 + bar_w, plot.bottom() - h), Pos2::new(x0 + 2.0 * bar_w, plot.bottom())),
                0.0,
                COUNT_COLOR,
            );

            let label = short_label(rec.title());
            let anchor = Pos2::new(x0 + bar_w, plot.bottom() + 6.0);
            painter.add(rotated(&painter, anchor, &label, text_color, 45.0));
        }

        Ok(())
    }
}

fn rotated(painter: &egui::Painter, pos: Pos2, text: &str, color: Color32, degrees: f32) -> TextShape {
    let galley = painter.layout_no_wrap(s!(text), FontId::proportional(11.0), color);
    TextShape::new(pos, galley, color).with_angle(degrees.to_radians())
}

fn short_label(title: &str) -> String {
    if title.chars().count() <= LABEL_CHARS {
        return s!(title);
    }
    let mut cut: String = title.chars().take(LABEL_CHARS - 1).collect();
    cut.push('…');
    cut
}
