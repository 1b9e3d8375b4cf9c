use analysis::stocks::{self, Stock};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chart::ProjectionChart;
use crate::Route;

/// Only this many search hits are offered as selectable cards.
const MAX_VISIBLE_MATCHES: usize = 4;

/// A fresh, non-reproducible seed for each projection so re-selecting a
/// stock draws a new path.
fn fresh_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (millis << 20) ^ jitter
}

#[derive(Clone, PartialEq)]
struct Projection {
    stock: Stock,
    prices: Vec<f64>,
}

fn project(stock: Stock) -> Projection {
    let prices = analysis::project_prices(stock.current_price, fresh_seed());
    Projection { stock, prices }
}

/// Stock search plus the 7-day projection chart for the selected stock.
/// The first catalog entry is projected on mount; picking a card redraws
/// the series for that stock.
#[function_component(Prediction)]
pub fn prediction() -> Html {
    let query = use_state(String::new);
    let selected = use_state(|| stocks::CATALOG.first().copied().map(project));

    let on_search_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let matches: Vec<&'static Stock> = stocks::search(&query)
        .into_iter()
        .take(MAX_VISIBLE_MATCHES)
        .collect();

    let stock_cards = matches.iter().map(|stock| {
        let stock = **stock;
        let selected = selected.clone();
        let is_selected = selected
            .as_ref()
            .is_some_and(|p| p.stock.symbol == stock.symbol);

        let on_select = Callback::from(move |_: MouseEvent| {
            log::info!("Projecting {} from base price {}", stock.symbol, stock.current_price);
            selected.set(Some(project(stock)));
        });

        let card_class = if is_selected {
            "card bg-primary text-primary-content shadow-md cursor-pointer"
        } else {
            "card bg-base-100 shadow-md cursor-pointer hover:shadow-lg"
        };

        html! {
            <div key={stock.symbol} class={card_class} onclick={on_select}>
                <div class="card-body p-4">
                    <h3 class="font-bold">{stock.name}</h3>
                    <p class="text-sm opacity-70">{stock.symbol}</p>
                    <p class="text-lg">{format!("₹{:.2}", stock.current_price)}</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="min-h-screen bg-base-200 p-8">
            <div class="max-w-4xl mx-auto">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-3xl font-bold">
                        <i class="fas fa-chart-area text-primary mr-2"></i>
                        {"Stock Predictions"}
                    </h1>
                    <Link<Route> to={Route::Home} classes="btn btn-ghost btn-sm">
                        <i class="fas fa-home mr-1"></i>
                        {"Home"}
                    </Link<Route>>
                </div>

                <input
                    type="text"
                    class="input input-bordered w-full mb-6"
                    placeholder="Search stocks by company name..."
                    value={(*query).clone()}
                    oninput={on_search_input}
                />

                if matches.is_empty() {
                    <p class="text-center text-gray-500 py-8">
                        {"No stocks match your search."}
                    </p>
                } else {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                        {for stock_cards}
                    </div>
                }

                if let Some(projection) = &*selected {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                {&projection.stock.name}
                                <span class="badge badge-primary">{projection.stock.symbol}</span>
                            </h2>
                            <p class="text-gray-600">
                                {format!("Current price: ₹{:.2}", projection.stock.current_price)}
                            </p>
                            <ProjectionChart
                                symbol={projection.stock.symbol.to_string()}
                                prices={projection.prices.clone()}
                            />
                        </div>
                    </div>
                } else {
                    <p class="text-center text-gray-500 py-8">
                        {"Select a stock to view its 7-day price projection."}
                    </p>
                }
            </div>
        </div>
    }
}
