use std::fmt::Write;

use super::{BLUE, GOLD, GRID_GRAY, NAVY, TITLE_FONT_SIZE};

const WIDTH: u32 = 840;
const HEIGHT: u32 = 600;
const MARGIN_LEFT: f64 = 96.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 72.0;
const MARGIN_BOTTOM: f64 = 80.0;

const PLOT_W: f64 = WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_H: f64 = HEIGHT as f64 - MARGIN_TOP - MARGIN_BOTTOM;

const AXIS_FONT_SIZE: u32 = 20;
const TICK_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;

/// Savings progress chart: the linear cumulative-savings projection as a
/// solid line and the constant expense target as a dashed line, one data
/// point per month over `0..=remaining_months`.
pub(crate) fn savings_progress_svg(
    total_expenses: f64,
    current_savings: f64,
    monthly_saving_capacity: f64,
    remaining_months: u32,
) -> String {
    let months = remaining_months.max(1);
    let cumulative: Vec<f64> = (0..=months)
        .map(|i| current_savings + monthly_saving_capacity * f64::from(i))
        .collect();

    // Y domain covers both series, padded so lines don't sit on the frame.
    let mut y_min = total_expenses;
    let mut y_max = total_expenses;
    for v in &cumulative {
        y_min = y_min.min(*v);
        y_max = y_max.max(*v);
    }
    let mut pad = (y_max - y_min) * 0.05;
    if pad <= 0.0 {
        pad = y_max.abs().max(1.0) * 0.05;
    }
    y_min -= pad;
    y_max += pad;

    let x_of = |i: u32| MARGIN_LEFT + f64::from(i) / f64::from(months) * PLOT_W;
    let y_of = |v: f64| MARGIN_TOP + (1.0 - (v - y_min) / (y_max - y_min)) * PLOT_H;

    let mut grid = String::new();
    let mut ticks = String::new();

    // Horizontal gridlines + y tick labels at "nice" value steps.
    let y_step = nice_step((y_max - y_min) / 5.0);
    let mut tick = (y_min / y_step).ceil() * y_step;
    while tick <= y_max {
        let y = y_of(tick);
        let _ = write!(
            grid,
            r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{GRID_GRAY}" stroke-width="0.7" stroke-dasharray="6,4" opacity="0.8"/>"##,
            x1 = MARGIN_LEFT,
            x2 = MARGIN_LEFT + PLOT_W,
        );
        let _ = write!(
            ticks,
            r##"<text x="{x:.1}" y="{ty:.1}" text-anchor="end" font-size="{TICK_FONT_SIZE}" fill="{NAVY}">{label}</text>"##,
            x = MARGIN_LEFT - 10.0,
            ty = y + 5.0,
            label = format_tick(tick, y_step),
        );
        tick += y_step;
    }

    // Vertical gridlines + x tick labels, thinned for long horizons.
    let x_step = (f64::from(months) / 12.0).ceil() as u32;
    let mut i = 0;
    while i <= months {
        let x = x_of(i);
        let _ = write!(
            grid,
            r##"<line x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="{GRID_GRAY}" stroke-width="0.7" stroke-dasharray="6,4" opacity="0.8"/>"##,
            y1 = MARGIN_TOP,
            y2 = MARGIN_TOP + PLOT_H,
        );
        let _ = write!(
            ticks,
            r##"<text x="{x:.1}" y="{ty:.1}" text-anchor="middle" font-size="{TICK_FONT_SIZE}" fill="{NAVY}">{i}</text>"##,
            ty = MARGIN_TOP + PLOT_H + 24.0,
        );
        i += x_step;
    }

    // Cumulative savings polyline.
    let mut points = String::new();
    for (i, v) in cumulative.iter().enumerate() {
        let _ = write!(points, "{:.1},{:.1} ", x_of(i as u32), y_of(*v));
    }
    let points = points.trim_end();

    let target_y = y_of(total_expenses);
    let legend_x = MARGIN_LEFT + 16.0;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" style="background:white">
<text x="{title_x:.1}" y="42" text-anchor="middle" font-size="{TITLE_FONT_SIZE}" font-weight="bold" fill="{NAVY}">Savings Progress</text>
{grid}
<line x1="{ax:.1}" y1="{ay1:.1}" x2="{ax:.1}" y2="{ay2:.1}" stroke="{GRID_GRAY}" stroke-width="1.5"/>
<line x1="{ax:.1}" y1="{ay2:.1}" x2="{ax2:.1}" y2="{ay2:.1}" stroke="{GRID_GRAY}" stroke-width="1.5"/>
<polyline points="{points}" fill="none" stroke="{BLUE}" stroke-width="3"/>
<line x1="{ax:.1}" y1="{target_y:.1}" x2="{ax2:.1}" y2="{target_y:.1}" stroke="{GOLD}" stroke-width="3" stroke-dasharray="10,6"/>
{ticks}
<text x="{title_x:.1}" y="{xlabel_y:.1}" text-anchor="middle" font-size="{AXIS_FONT_SIZE}" fill="{NAVY}">Months</text>
<text x="28" y="{ylabel_y:.1}" text-anchor="middle" font-size="{AXIS_FONT_SIZE}" fill="{NAVY}" transform="rotate(-90, 28, {ylabel_y:.1})">Savings ($)</text>
<line x1="{legend_x:.1}" y1="{l1:.1}" x2="{lx2:.1}" y2="{l1:.1}" stroke="{BLUE}" stroke-width="3"/>
<text x="{lt:.1}" y="{l1t:.1}" font-size="{LEGEND_FONT_SIZE}" fill="{NAVY}">Cumulative Savings</text>
<line x1="{legend_x:.1}" y1="{l2:.1}" x2="{lx2:.1}" y2="{l2:.1}" stroke="{GOLD}" stroke-width="3" stroke-dasharray="10,6"/>
<text x="{lt:.1}" y="{l2t:.1}" font-size="{LEGEND_FONT_SIZE}" fill="{NAVY}">Target Savings</text>
</svg>"##,
        title_x = MARGIN_LEFT + PLOT_W / 2.0,
        ax = MARGIN_LEFT,
        ax2 = MARGIN_LEFT + PLOT_W,
        ay1 = MARGIN_TOP,
        ay2 = MARGIN_TOP + PLOT_H,
        xlabel_y = HEIGHT as f64 - 22.0,
        ylabel_y = MARGIN_TOP + PLOT_H / 2.0,
        l1 = MARGIN_TOP + 22.0,
        l1t = MARGIN_TOP + 27.0,
        l2 = MARGIN_TOP + 48.0,
        l2t = MARGIN_TOP + 53.0,
        lx2 = legend_x + 34.0,
        lt = legend_x + 44.0,
    )
}

/// Round a raw step up to the nearest 1/2/5 × 10^k value.
fn nice_step(raw: f64) -> f64 {
    let raw = raw.max(f64::MIN_POSITIVE);
    let magnitude = 10f64.powf(raw.log10().floor());
    for mult in [1.0, 2.0, 5.0, 10.0] {
        if magnitude * mult >= raw {
            return magnitude * mult;
        }
    }
    magnitude * 10.0
}

/// Whole numbers for coarse steps, two decimals for sub-unit steps.
fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
