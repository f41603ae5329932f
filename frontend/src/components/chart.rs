//! SVG charts. Geometry is computed by plain functions; the markup belongs
//! to Yew, so a chart disappears with the component that renders it.

use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;

use crate::aggregate::ChartSlice;
use crate::format::format_currency;

const VIEW: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Wedge {
    Circle { cx: f64, cy: f64, r: f64 },
    Path(String),
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// One wedge per slice with a positive value, clockwise from twelve o'clock.
pub fn pie_wedges(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<Option<Wedge>> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            if total <= 0.0 || *value <= 0.0 {
                return None;
            }
            let sweep = value / total * TAU;
            if sweep >= TAU - 1e-9 {
                return Some(Wedge::Circle { cx, cy, r });
            }
            let (x1, y1) = point(cx, cy, r, angle);
            let (x2, y2) = point(cx, cy, r, angle + sweep);
            let large_arc = if sweep > std::f64::consts::PI { 1 } else { 0 };
            angle += sweep;
            Some(Wedge::Path(format!(
                "M {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} Z",
                cx, cy, x1, y1, r, r, large_arc, x2, y2
            )))
        })
        .collect()
}

/// Polyline coordinates for a series inside a `width` x `height` box.
pub fn line_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() > 1 {
                pad + step * i as f64
            } else {
                width / 2.0
            };
            let y = if max > 0.0 {
                pad + inner_h * (1.0 - value / max)
            } else {
                height - pad
            };
            (x, y)
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub slices: Vec<ChartSlice>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Draws a doughnut instead of a full pie.
    #[prop_or_default]
    pub hole: bool,
    pub currency_symbol: String,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let center = VIEW / 2.0;
    let radius = VIEW / 2.0 - 4.0;
    let values: Vec<f64> = props.slices.iter().map(|s| s.value).collect();
    let wedges = pie_wedges(&values, center, center, radius);
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();

    html! {
        <div class="w-full">
            if let Some(title) = &props.title {
                <h3 class="text-white text-center mb-3 font-semibold">{ title.clone() }</h3>
            }
            if total <= 0.0 {
                <p class="text-gray-400 text-sm text-center py-8">{"No data for this period."}</p>
            } else {
                <svg viewBox={format!("0 0 {} {}", VIEW, VIEW)} class="w-full max-w-[220px] mx-auto block">
                    { for wedges.iter().zip(props.slices.iter()).map(|(wedge, slice)| {
                        let tip = format!("{}: {} ({:.1}%)", slice.label, format_currency(slice.value, &props.currency_symbol), slice.value / total * 100.0);
                        match wedge {
                            Some(Wedge::Circle { cx, cy, r }) => html! {
                                <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} fill={slice.color}><title>{ tip }</title></circle>
                            },
                            Some(Wedge::Path(d)) => html! {
                                <path d={d.clone()} fill={slice.color} stroke="#1e1e2f" stroke-width="1"><title>{ tip }</title></path>
                            },
                            None => html! {},
                        }
                    }) }
                    if props.hole {
                        <circle cx={center.to_string()} cy={center.to_string()} r={(radius * 0.55).to_string()} fill="#280832" />
                    }
                </svg>
                <ul class="mt-4 flex flex-wrap justify-center gap-x-4 gap-y-1">
                    { for props.slices.iter().map(|slice| html! {
                        <li class="flex items-center gap-1.5 text-xs text-white">
                            <span class="inline-block w-3 h-3 rounded-sm" style={format!("background:{}", slice.color)}></span>
                            { slice.label.clone() }
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub currency_symbol: String,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let (width, height, pad) = (400.0, 200.0, 24.0);
    let points = line_points(&props.values, width, height, pad);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ");
    let area = match (points.first(), points.last()) {
        (Some((x0, _)), Some((xn, _))) => format!(
            "{:.2},{:.2} {} {:.2},{:.2}",
            x0,
            height - pad,
            polyline,
            xn,
            height - pad
        ),
        _ => String::new(),
    };
    let max = props.values.iter().cloned().fold(0.0_f64, f64::max);

    html! {
        <div class="w-full">
            if let Some(title) = &props.title {
                <h3 class="text-white text-center mb-3 font-semibold">{ title.clone() }</h3>
            }
            if points.is_empty() {
                <p class="text-gray-400 text-sm text-center py-8">{"No data for this period."}</p>
            } else {
                <svg viewBox={format!("0 0 {} {}", width, height)} class="w-full">
                    <line x1={pad.to_string()} y1={(height - pad).to_string()} x2={(width - pad).to_string()} y2={(height - pad).to_string()} stroke="rgba(255,255,255,0.1)" />
                    <text x="2" y={(pad - 6.0).to_string()} fill="#fff" font-size="10">{ format_currency(max, &props.currency_symbol) }</text>
                    <polygon points={area} fill="rgba(32, 217, 130, 0.1)" />
                    <polyline points={polyline} fill="none" stroke="#20D982" stroke-width="2" />
                    { for points.iter().zip(props.labels.iter()).zip(props.values.iter()).map(|(((x, y), label), value)| html! {
                        <circle cx={x.to_string()} cy={y.to_string()} r="3" fill="#20D982">
                            <title>{ format!("{}: {}", label, format_currency(*value, &props.currency_symbol)) }</title>
                        </circle>
                    }) }
                </svg>
                <div class="flex justify-between text-[10px] text-gray-400 px-6">
                    <span>{ props.labels.first().cloned().unwrap_or_default() }</span>
                    <span>{ props.labels.last().cloned().unwrap_or_default() }</span>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_is_a_full_circle() {
        let wedges = pie_wedges(&[42.0], 100.0, 100.0, 90.0);
        assert_eq!(
            wedges,
            vec![Some(Wedge::Circle {
                cx: 100.0,
                cy: 100.0,
                r: 90.0
            })]
        );
    }

    #[test]
    fn zero_values_produce_no_wedge() {
        let wedges = pie_wedges(&[10.0, 0.0, 10.0], 100.0, 100.0, 90.0);
        assert!(wedges[0].is_some());
        assert!(wedges[1].is_none());
        assert!(wedges[2].is_some());
        assert!(pie_wedges(&[0.0, 0.0], 100.0, 100.0, 90.0).iter().all(Option::is_none));
    }

    #[test]
    fn dominant_slice_uses_large_arc() {
        let wedges = pie_wedges(&[3.0, 1.0], 100.0, 100.0, 90.0);
        match &wedges[0] {
            Some(Wedge::Path(d)) => assert!(d.contains(" 0 1 1 ")),
            other => panic!("expected a path, got {:?}", other),
        }
        match &wedges[1] {
            Some(Wedge::Path(d)) => assert!(d.contains(" 0 0 1 ")),
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn line_peaks_touch_the_top_padding() {
        let points = line_points(&[0.0, 50.0, 100.0], 400.0, 200.0, 20.0);
        assert_eq!(points[0], (20.0, 180.0));
        assert_eq!(points[2], (380.0, 20.0));
        assert_eq!(points[1].1, 100.0);
    }

    #[test]
    fn lone_point_is_centered() {
        let points = line_points(&[5.0], 400.0, 200.0, 20.0);
        assert_eq!(points, vec![(200.0, 20.0)]);
    }
}
