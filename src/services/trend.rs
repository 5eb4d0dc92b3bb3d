use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

pub const TREND_POINTS: usize = 20;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TrendPoint {
    pub bookings: f64,
    pub revenue: i64,
}

/// Synthetic booking/revenue curve for the dashboard chart. Two independent
/// random walks with standard-normal steps; bookings are floored at 5,
/// revenue is scaled by 120.
pub fn random_series<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<TrendPoint> {
    let mut bookings_walk = 0.0_f64;
    let mut revenue_walk = 0.0_f64;

    (0..points)
        .map(|_| {
            let booking_step: f64 = StandardNormal.sample(&mut *rng);
            let revenue_step: f64 = StandardNormal.sample(&mut *rng);
            bookings_walk += booking_step;
            revenue_walk += revenue_step;
            TrendPoint {
                bookings: bookings_walk.abs() + 5.0,
                revenue: (revenue_walk.abs() * 120.0) as i64,
            }
        })
        .collect()
}

/// Renders the series as an inline SVG line chart, one polyline per measure,
/// each scaled to its own maximum.
pub fn render_svg(series: &[TrendPoint], width: u32, height: u32) -> String {
    let bookings: Vec<f64> = series.iter().map(|p| p.bookings).collect();
    let revenue: Vec<f64> = series.iter().map(|p| p.revenue as f64).collect();

    format!(
        "<svg class=\"trend\" viewBox=\"0 0 {width} {height}\" width=\"100%\" height=\"{height}\" \
         role=\"img\" aria-label=\"Booking trend\">\
         <polyline fill=\"none\" stroke=\"#6FBF8E\" stroke-width=\"2\" points=\"{}\"/>\
         <polyline fill=\"none\" stroke=\"#F2A65A\" stroke-width=\"2\" points=\"{}\"/>\
         </svg>\
         <div class=\"small\"><span class=\"swatch s1\"></span>Bookings \
         <span class=\"swatch s2\"></span>Revenue</div>",
        polyline_points(&bookings, width, height),
        polyline_points(&revenue, width, height),
    )
}

fn polyline_points(values: &[f64], width: u32, height: u32) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
    let step = if values.len() > 1 {
        width as f64 / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height as f64 - (v / max) * (height as f64 - 4.0);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
