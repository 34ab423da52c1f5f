use plotters::prelude::*;

/// Index of the first maximal element, so ties resolve to the lowest index.
pub fn argmax<T: PartialOrd>(values: impl IntoIterator<Item = T>) -> usize {
    let mut iter = values.into_iter();
    let mut max: T = match iter.next() {
        Some(first) => first,
        None => return 0,
    };
    let mut result: usize = 0;
    for (i, v) in iter.enumerate() {
        if v > max {
            max = v;
            result = i + 1;
        }
    }
    result
}

pub fn categorical_sample(probs: impl IntoIterator<Item = f64>, random: f64) -> usize {
    let mut acc: f64 = 0.0;
    argmax(probs.into_iter().map(|p| {
        acc += p;
        acc > random
    }))
}

pub fn moving_average(window: usize, values: &[f64]) -> Vec<f64> {
    let window = window.max(1);
    values
        .chunks(window)
        .map(|chunk| chunk.iter().sum::<f64>() / chunk.len() as f64)
        .collect()
}

pub fn plot_moving_average(
    curves: &[Vec<f64>],
    colors: &[&RGBColor],
    legends: &[&str],
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = format!("{}.png", title.to_lowercase().replace(' ', "_"));
    let len = curves.iter().map(|c| c.len()).max().unwrap_or(0);
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for curve in curves {
        for &v in curve {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if y_min == y_max {
        y_max = y_min + 1.0;
    }

    let root = BitMapBackend::new(&filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..len, y_min..y_max)?;
    chart.configure_mesh().draw()?;

    for ((curve, color), legend) in curves.iter().zip(colors).zip(legends) {
        let series_color: RGBColor = **color;
        chart
            .draw_series(LineSeries::new(
                curve.iter().enumerate().map(|(i, v)| (i, *v)),
                series_color,
            ))?
            .label(*legend)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], series_color)
            });
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
