//! # Disparity statistics
//!
//! Plots the range of values written on each row of a disparity map.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use plotters::prelude::*;

use crate::disparity::DisparityMap;
use crate::error::*;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Per-row `(min, row)` and `(max, row)` series of the written cells of `map`.
pub fn row_ranges(map: &DisparityMap) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let region = match &map.region {
        Some(r) => r,
        None => return (Vec::new(), Vec::new())
    };

    region
        .ys
        .clone()
        .map(|y| {
            let (lo, hi) = region.xs.clone().fold((u8::MAX, u8::MIN), |(lo, hi), x| {
                let val = map.get(x as u32, y as u32);
                (lo.min(val), hi.max(val))
            });
            ((lo as usize, y), (hi as usize, y))
        })
        .unzip()
}

/// Plot the per-row disparity range of `map` to a PNG at `path`.
pub fn plot_row_ranges(map: &DisparityMap, path: &Path) -> Result<()> {
    let (min_history, max_history) = row_ranges(map);

    let plot_err = |e: &dyn std::fmt::Display| Error::Statistics(e.to_string());

    let disp_range = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    disp_range.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let mut chart = ChartBuilder::on(&disp_range)
        .caption("Disparity range per row", ("sans-serif", 20).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_ranged(0..256usize, 0..map.height() as usize)
        .map_err(|e| plot_err(&e))?;

    chart.configure_mesh().draw().map_err(|e| plot_err(&e))?;

    chart
        .draw_series(LineSeries::new(min_history, &RED))
        .map_err(|e| plot_err(&e))?
        .label("Min disparity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(max_history, &BLUE))
        .map_err(|e| plot_err(&e))?
        .label("Max disparity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| plot_err(&e))?;

    Ok(())
}
