use crate::chart::plan::{ChartPlan, DayTimeline};
use crate::errors::AppResult;
use crate::utils::colors::{Rgb, palette};
use crate::utils::formatting::{fmt_compact, fmt_hours};
use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Single-page PDF writer for the week chart (A4 portrait, 7 day panels).
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    small_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal extent of the 0..24 h axis.
struct Axis {
    x0: f32,
    x1: f32,
}

impl Axis {
    fn x(&self, hours: f64) -> f32 {
        let h = hours.clamp(0.0, 24.0) as f32;
        self.x0 + (self.x1 - self.x0) * h / 24.0
    }
}

/// Vertical extent of one day panel.
struct Panel {
    bottom: f32,
    top: f32,
    lane_count: usize,
}

impl Panel {
    const AXIS_BAND: f32 = 12.0;

    fn lane_y(&self, lane_pos: usize) -> f32 {
        let usable = self.top - self.bottom - Self::AXIS_BAND - 8.0;
        let step = usable / self.lane_count.max(1) as f32;
        self.bottom + Self::AXIS_BAND + step * (lane_pos as f32 + 0.5)
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Font globale (WinAnsi, so that German notes print correctly)
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 36.0,

            next_id,
            font_id,

            font_size: 9.0,
            small_font_size: 6.0,
            title_font_size: 11.0,
        }
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Crea una nuova pagina e relativo oggetto di contenuto
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Scrive lo stream della pagina corrente
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_text_centered(&self, content: &mut Content, cx: f32, y: f32, size: f32, text: &str) {
        // Helvetica averages roughly half an em per glyph
        let w = text.chars().count() as f32 * size * 0.5;
        self.draw_text(content, cx - w / 2.0, y, size, text);
    }

    fn draw_line(
        &self,
        content: &mut Content,
        (x1, y1): (f32, f32),
        (x2, y2): (f32, f32),
        width: f32,
        color: Rgb,
        dashed: bool,
    ) {
        content.save_state();
        content.set_line_width(width);
        content.set_line_cap(LineCapStyle::ButtCap);
        content.set_stroke_rgb(color.0, color.1, color.2);
        if dashed {
            content.set_dash_pattern([2.0, 2.0], 0.0);
        }
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
        content.restore_state();
    }

    fn draw_day(
        &self,
        content: &mut Content,
        plan: &ChartPlan,
        day: &DayTimeline,
        axis: &Axis,
        panel: &Panel,
    ) {
        let lane_pos = |lane: usize| {
            plan.lanes
                .iter()
                .position(|l| l.index == lane)
                .unwrap_or(0)
        };
        let grid_bottom = panel.bottom + Panel::AXIS_BAND;
        let grid_top = panel.top - 4.0;

        // hour grid + tick labels
        for h in 0..=24 {
            let x = axis.x(h as f64);
            self.draw_line(
                content,
                (x, grid_bottom),
                (x, grid_top),
                0.3,
                palette::GRID,
                true,
            );
            self.draw_text_centered(
                content,
                x,
                panel.bottom + 3.0,
                self.small_font_size,
                &h.to_string(),
            );
        }

        // start / end of the day
        if let Some((first, last)) = day.bounds {
            for h in [first, last] {
                let x = axis.x(h);
                self.draw_line(
                    content,
                    (x, grid_bottom),
                    (x, grid_top),
                    0.6,
                    palette::GRAY,
                    true,
                );
            }
        }

        // lane labels
        for (pos, lane) in plan.lanes.iter().enumerate() {
            let y = panel.lane_y(pos) - 3.0;
            self.draw_text(content, axis.x0 - 14.0, y, self.font_size, &lane.label);
        }

        // day label
        let mid = (panel.bottom + panel.top) / 2.0;
        self.draw_text(content, self.margin, mid - 3.0, self.font_size, &day.label);

        for seg in &day.segments {
            let y = panel.lane_y(lane_pos(seg.lane));
            self.draw_line(
                content,
                (axis.x(seg.start), y),
                (axis.x(seg.end), y),
                4.0,
                seg.color,
                false,
            );
        }

        for c in &day.connectors {
            let x = axis.x(c.at);
            let y1 = panel.lane_y(lane_pos(c.from_lane));
            let y2 = panel.lane_y(lane_pos(c.to_lane));
            self.draw_line(content, (x, y1), (x, y2), 1.0, palette::BLACK, false);
        }

        for a in &day.annotations {
            let y = panel.lane_y(lane_pos(a.lane)) + 4.0;
            let x = axis.x(a.x);
            self.draw_text_centered(content, x, y, self.small_font_size, &a.text);
        }

        // daily summary
        let sx = axis.x1 + 10.0;
        let s = &day.summary;
        let lines = [
            format!("Std. {}", fmt_compact(s.declared_hours)),
            format!("Arb. {}", fmt_hours(s.working_hours)),
            format!("km {}", fmt_compact(s.km)),
        ];
        for (i, text) in lines.iter().enumerate() {
            let y = mid + 8.0 - 10.0 * i as f32;
            self.draw_text(content, sx, y, self.font_size, text);
        }
    }

    /// Draws the whole week on a single page.
    pub fn write_chart(&mut self, plan: &ChartPlan) {
        let mut content = self.new_page();

        let mut y = self.page_h - self.margin;
        self.draw_text(&mut content, self.margin, y, self.title_font_size, &plan.heading);
        if let Some(hint) = &plan.hint {
            y -= 14.0;
            let size = self.small_font_size + 1.0;
            self.draw_text(&mut content, self.margin, y, size, hint);
        }

        let axis = Axis {
            x0: self.margin + 70.0,
            x1: self.page_w - self.margin - 70.0,
        };

        let top = y - 14.0;
        let bottom = self.margin + 24.0;
        let count = plan.days.len().max(1);
        let panel_h = (top - bottom) / count as f32;

        for (i, day) in plan.days.iter().enumerate() {
            let panel_top = top - panel_h * i as f32;
            let panel = Panel {
                bottom: panel_top - panel_h,
                top: panel_top,
                lane_count: plan.lanes.len(),
            };
            self.draw_day(&mut content, plan, day, &axis, &panel);
        }

        let total = format!(
            "Gesamt-Stunden: {}    Arbeitsstunden: {}    km: {}",
            fmt_compact(plan.week.declared_hours),
            fmt_hours(plan.week.working_hours),
            fmt_compact(plan.week.km)
        );
        let size = self.font_size + 1.0;
        self.draw_text(&mut content, axis.x1 - 220.0, self.margin, size, &total);

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        // Costruisci Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Encodes text for a WinAnsi font; characters outside Latin-1 become '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

pub fn render_pdf(plan: &ChartPlan, path: &Path) -> AppResult<()> {
    let mut pdf = PdfManager::new();
    pdf.write_chart(plan);
    pdf.save(path)?;
    Ok(())
}
