//! Layout geometry for the shareable result card.
//!
//! All coordinates are integer pixels with the origin at the top-left of the
//! canvas. The chart is fitted into the graph area keeping its aspect ratio,
//! and a translucent footer strip carries the parameter summary, an optional
//! logo and a handle line.

/// Output size of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareFormat {
    /// 1080 x 1080.
    #[default]
    Square,
    /// 1200 x 675.
    Landscape,
}

impl ShareFormat {
    pub const ALL: [ShareFormat; 2] = [ShareFormat::Square, ShareFormat::Landscape];

    pub fn label(self) -> &'static str {
        match self {
            ShareFormat::Square => "Square (1080x1080)",
            ShareFormat::Landscape => "Landscape (1200x675)",
        }
    }

    pub fn canvas_size(self) -> (i32, i32) {
        match self {
            ShareFormat::Square => (1080, 1080),
            ShareFormat::Landscape => (1200, 675),
        }
    }

    /// Region reserved for the chart.
    pub fn graph_area(self) -> PixelRect {
        let (w, h) = self.canvas_size();
        match self {
            ShareFormat::Square => PixelRect::new(80, 140, w - 80, h - 260),
            ShareFormat::Landscape => PixelRect::new(80, 120, w - 80, h - 170),
        }
    }

    /// Height of the title band above the graph area.
    pub fn header_height(self) -> i32 {
        match self {
            ShareFormat::Square => 120,
            ShareFormat::Landscape => 100,
        }
    }
}

/// Figure pasted into the graph area of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareChart {
    /// Five-bar force comparison at the operating point.
    #[default]
    Forces,
    /// The two risk heatmaps side by side.
    Heatmaps,
}

impl ShareChart {
    pub const ALL: [ShareChart; 2] = [ShareChart::Forces, ShareChart::Heatmaps];

    pub fn label(self) -> &'static str {
        match self {
            ShareChart::Forces => "Forces",
            ShareChart::Heatmaps => "Risk maps",
        }
    }
}

/// Axis-aligned rectangle, `left`/`top` inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.left + self.width().div_euclid(2),
            self.top + self.height().div_euclid(2),
        )
    }

    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

pub const TITLE: &str = "Flood risk: flotation and sliding";
pub const TEXT_MARGIN: i32 = 90;
pub const FOOTER_LINE_SPACING: i32 = 24;
pub const FOOTER_TEXT_OFFSET: i32 = 12;
pub const HANDLE_BOTTOM_OFFSET: i32 = 28;
pub const LOGO_MAX_SCALE: f64 = 0.35;
pub const DEFAULT_HANDLE: &str = "@your_handle";

pub const GRADIENT_TOP: [u8; 3] = [250, 252, 255];
pub const GRADIENT_BOTTOM: [u8; 3] = [240, 245, 250];
pub const FOOTER_FILL: [u8; 4] = [255, 255, 255, 230];

/// Computed geometry of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareCardLayout {
    pub format: ShareFormat,
    pub canvas: PixelRect,
    /// Full-width band the title is centered in.
    pub title_band: PixelRect,
    pub graph_area: PixelRect,
    /// Where the fitted chart is pasted.
    pub chart: PixelRect,
    /// Footer strip, drawn from `footer.top` to the canvas bottom.
    pub footer: PixelRect,
    /// Nominal footer height used to center the logo. Runs 20 px past the
    /// canvas edge.
    pub footer_height: i32,
    pub footer_text_origin: (i32, i32),
    pub logo: Option<PixelRect>,
    pub handle_origin: (i32, i32),
}

impl ShareCardLayout {
    /// Lay out a card for a chart of `chart_size` pixels and an optional
    /// logo image of `logo_size` pixels.
    pub fn compute(
        format: ShareFormat,
        chart_size: (u32, u32),
        logo_size: Option<(u32, u32)>,
    ) -> Self {
        let (w, h) = format.canvas_size();
        let graph_area = format.graph_area();
        let chart = fit_centered(graph_area, chart_size);

        let footer_height = h - graph_area.bottom + 30;
        let footer_top = graph_area.bottom - 10;
        let footer = PixelRect::new(0, footer_top, w, h);

        let logo = logo_size.and_then(|(lw, lh)| {
            if lw == 0 || lh == 0 {
                return None;
            }
            let max_h = f64::from(footer_height - 24);
            let scale = (max_h / f64::from(lh)).min(LOGO_MAX_SCALE);
            let new_w = (f64::from(lw) * scale) as i32;
            let new_h = (f64::from(lh) * scale) as i32;
            let x = w - new_w - TEXT_MARGIN / 2;
            let y = footer_top + (footer_height - new_h).div_euclid(2);
            Some(PixelRect::from_origin_size(x, y, new_w, new_h))
        });

        Self {
            format,
            canvas: PixelRect::new(0, 0, w, h),
            title_band: PixelRect::new(0, 0, w, format.header_height()),
            graph_area,
            chart,
            footer,
            footer_height,
            footer_text_origin: (TEXT_MARGIN, footer_top + FOOTER_TEXT_OFFSET),
            logo,
            handle_origin: (TEXT_MARGIN, h - HANDLE_BOTTOM_OFFSET),
        }
    }

    /// Baseline origin of each footer line.
    pub fn footer_line_origins(&self, line_count: usize) -> Vec<(i32, i32)> {
        let (x, y) = self.footer_text_origin;
        (0..line_count as i32)
            .map(|i| (x, y + i * FOOTER_LINE_SPACING))
            .collect()
    }

    /// Uniform factor to draw this layout into a preview `max_width` wide.
    pub fn preview_scale(&self, max_width: f32) -> f32 {
        let w = self.canvas.width();
        if w <= 0 {
            return 1.0;
        }
        (max_width / w as f32).min(1.0)
    }
}

/// Scale `size` into `area` keeping its aspect ratio, then center it.
/// Scaled sizes are truncated to whole pixels.
pub fn fit_centered(area: PixelRect, (src_w, src_h): (u32, u32)) -> PixelRect {
    let gw = area.width();
    let gh = area.height();
    if src_w == 0 || src_h == 0 || gw <= 0 || gh <= 0 {
        return PixelRect::new(area.left, area.top, area.left, area.top);
    }
    let scale = (f64::from(gw) / f64::from(src_w)).min(f64::from(gh) / f64::from(src_h));
    let new_w = (f64::from(src_w) * scale) as i32;
    let new_h = (f64::from(src_h) * scale) as i32;
    let x = area.left + (gw - new_w).div_euclid(2);
    let y = area.top + (gh - new_h).div_euclid(2);
    PixelRect::from_origin_size(x, y, new_w, new_h)
}

/// Background color of pixel row `y` on a canvas `height` rows tall.
pub fn background_row_color(y: i32, height: i32) -> [u8; 3] {
    let t = if height > 1 {
        (f64::from(y) / f64::from(height - 1)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut out = [0u8; 3];
    for (i, c) in out.iter_mut().enumerate() {
        let top = f64::from(GRADIENT_TOP[i]);
        let bottom = f64::from(GRADIENT_BOTTOM[i]);
        *c = (top * (1.0 - t) + bottom * t) as u8;
    }
    out
}
