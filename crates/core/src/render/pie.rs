use std::fmt::Write;

use super::{polar, BLUE, GOLD, LABEL_FONT_SIZE, NAVY, TITLE_FONT_SIZE};

const WIDTH: u32 = 720;
const HEIGHT: u32 = 720;
const CENTER_X: f64 = 360.0;
const CENTER_Y: f64 = 390.0;
const RADIUS: f64 = 240.0;

/// Slices start here and proceed counterclockwise.
const START_ANGLE_DEG: f64 = 140.0;

/// Offset pulling the down-payment slice out of the pie.
const EXPLODE_OFFSET: f64 = 24.0;

/// A slice fraction at or above this renders as a full disc; an arc whose
/// endpoints coincide would collapse to nothing.
const FULL_CIRCLE_FRACTION: f64 = 0.9999;

/// Two-slice pie of the loan expense breakdown: down payment (gold,
/// exploded) vs financed loan amount (blue), with percentage labels
/// computed from the slice proportions.
pub(crate) fn loan_breakdown_svg(down_payment: f64, loan_amount: f64) -> String {
    let slices: [(&str, f64, &str, f64); 2] = [
        ("Down Payment", down_payment.max(0.0), GOLD, EXPLODE_OFFSET),
        ("Loan Amount", loan_amount.max(0.0), BLUE, 0.0),
    ];
    let total: f64 = slices.iter().map(|(_, v, _, _)| v).sum();

    let mut body = String::new();
    let mut angle = START_ANGLE_DEG;

    for (label, value, color, explode) in slices {
        let fraction = if total > 0.0 { value / total } else { 0.0 };
        let sweep = fraction * 360.0;
        let mid = angle + sweep / 2.0;

        // Exploded slices shift outward along their mid-angle.
        let (cx, cy) = polar(CENTER_X, CENTER_Y, explode, mid);

        if fraction >= FULL_CIRCLE_FRACTION {
            let _ = write!(
                body,
                r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{RADIUS:.1}" fill="{color}"/>"##,
            );
        } else if fraction > 0.0 {
            let (x1, y1) = polar(cx, cy, RADIUS, angle);
            let (x2, y2) = polar(cx, cy, RADIUS, angle + sweep);
            let large_arc = i32::from(sweep > 180.0);
            // Sweep flag 0: counterclockwise on screen.
            let _ = write!(
                body,
                r##"<path d="M {cx:.1} {cy:.1} L {x1:.1} {y1:.1} A {RADIUS:.1} {RADIUS:.1} 0 {large_arc} 0 {x2:.1} {y2:.1} Z" fill="{color}"/>"##,
            );
        }

        // Slice name outside the rim, percentage inside the slice.
        let (lx, ly) = polar(cx, cy, RADIUS * 1.18, mid);
        let (px, py) = polar(cx, cy, RADIUS * 0.62, mid);
        let pct = fraction * 100.0;
        let _ = write!(
            body,
            r##"<text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" font-size="{LABEL_FONT_SIZE}" fill="{NAVY}">{label}</text>"##,
        );
        let _ = write!(
            body,
            r##"<text x="{px:.1}" y="{py:.1}" text-anchor="middle" font-size="{LABEL_FONT_SIZE}" fill="{NAVY}">{pct:.1}%</text>"##,
        );

        angle += sweep;
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" style="background:white">
<text x="{cx}" y="48" text-anchor="middle" font-size="{TITLE_FONT_SIZE}" font-weight="bold" fill="{NAVY}">Loan Expense Breakdown</text>
{body}
</svg>"##,
        cx = CENTER_X,
    )
}
