use chrono::{Duration, Local};
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct ProjectionChartProps {
    pub symbol: String,
    pub prices: Vec<f64>,
}

/// Line chart of the 7-day projection, one point per upcoming day
/// starting today.
#[function_component(ProjectionChart)]
pub fn projection_chart(props: &ProjectionChartProps) -> Html {
    let container_ref = use_node_ref();
    let symbol = props.symbol.clone();
    let prices = props.prices.clone();
    let div_id = format!("projection-chart-{}", symbol.replace(['&', ' '], "-"));

    use_effect_with(
        (container_ref.clone(), prices.clone(), div_id.clone()),
        move |(container_ref, prices, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let today = Local::now().date_naive();
                let dates: Vec<String> = (0..prices.len())
                    .map(|i| (today + Duration::days(i as i64)).format("%d %b %Y").to_string())
                    .collect();

                let values: Vec<f64> = prices
                    .iter()
                    .map(|p| (p * 100.0).round() / 100.0)
                    .collect();

                let trace = Scatter::new(dates, values)
                    .mode(Mode::LinesMarkers)
                    .name("Projected price")
                    .line(plotly::common::Line::new().color("rgb(79, 70, 229)").width(2.0));

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text("7-Day Price Projection"))
                    .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Date")))
                    .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Price")))
                    .height(400);

                // Serialize through JSON so Plotly sees plain JS objects
                match (
                    serde_json::to_string(&trace),
                    serde_json::to_string(&layout),
                ) {
                    (Ok(trace_json), Ok(layout_json)) => {
                        let trace_js = js_sys::JSON::parse(&trace_json).unwrap_or(JsValue::NULL);
                        let layout_js = js_sys::JSON::parse(&layout_json).unwrap_or(JsValue::NULL);

                        let data_js = js_sys::Array::new();
                        data_js.push(&trace_js);

                        newPlot(div_id, data_js.into(), layout_js);
                    }
                    _ => log::error!("Failed to serialize chart data for {}", div_id),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
