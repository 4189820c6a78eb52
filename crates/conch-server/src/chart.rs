//! Minimal bar-chart rasteriser.
//!
//! The pack of views this serves needs exactly one chart shape: vertical
//! bars scaled to the tallest value. Bars are drawn straight into an RGB
//! buffer and encoded as PNG; labels and values live in the HTML page next
//! to the image rather than being rasterised here.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use thiserror::Error;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 400;
const MARGIN: u32 = 24;
const BAR_GAP: u32 = 8;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([64, 64, 64]);
const BAR: Rgb<u8> = Rgb([42, 110, 187]);

#[derive(Debug, Error)]
pub enum ChartError {
    /// Charts with nothing to draw are a server error, not a blank image.
    #[error("no data points to render")]
    Empty,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render one vertical bar per value, tallest bar filling the plot height.
pub fn bar_chart_png(values: &[f64]) -> Result<Vec<u8>, ChartError> {
    if values.is_empty() {
        return Err(ChartError::Empty);
    }

    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let plot_left = MARGIN;
    let plot_right = WIDTH - MARGIN;
    let plot_top = MARGIN;
    let plot_bottom = HEIGHT - MARGIN;
    let plot_width = plot_right - plot_left;
    let plot_height = plot_bottom - plot_top;

    let max = values.iter().cloned().fold(0.0_f64, f64::max).max(f64::MIN_POSITIVE);

    let slot = (plot_width / values.len() as u32).max(1);
    let bar_width = slot.saturating_sub(BAR_GAP).max(1);

    for (i, &value) in values.iter().enumerate() {
        let scaled = ((value.max(0.0) / max) * plot_height as f64).round() as u32;
        if scaled == 0 {
            continue;
        }
        let x0 = plot_left + i as u32 * slot + BAR_GAP / 2;
        let x1 = (x0 + bar_width).min(plot_right);
        let y0 = plot_bottom - scaled.min(plot_height);
        for x in x0..x1 {
            for y in y0..plot_bottom {
                img.put_pixel(x, y, BAR);
            }
        }
    }

    // Baseline and left axis.
    for x in plot_left..=plot_right {
        img.put_pixel(x, plot_bottom, AXIS);
    }
    for y in plot_top..=plot_bottom {
        img.put_pixel(plot_left, y, AXIS);
    }

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}
