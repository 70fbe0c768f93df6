use contracts::dashboards::{DashboardSummary, SalesPoint};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::overview::api;
use crate::shared::http::use_api;

const CHART_MONTHS: u32 = 6;

/// Landing dashboard: entity counters plus the recent sales totals.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let api_client = use_api();

    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (sales, set_sales) = signal(Vec::<SalesPoint>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let api_client = api_client.clone();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::summary(&api_client).await {
                Ok(data) => set_summary.set(Some(data)),
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_loading.set(false);
                    return;
                }
            }
            match api::sales_chart(&api_client, CHART_MONTHS).await {
                Ok(points) => set_sales.set(points),
                Err(err) => {
                    log::error!("Failed to load the sales chart: {}", err);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="dashboard">
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading..."</p> }
            >
                <div class="dashboard__counters">
                    {move || {
                        summary
                            .get()
                            .map(|data| {
                                view! {
                                    <CounterCard label="Products" value=data.total_products />
                                    <CounterCard label="Categories" value=data.total_categories />
                                    <CounterCard label="Brands" value=data.total_brands />
                                    <CounterCard label="Retailers" value=data.total_retailers />
                                    <CounterCard
                                        label="Pending retailers"
                                        value=data.pending_retailers
                                    />
                                    <CounterCard label="Staff" value=data.total_staff />
                                }
                            })
                    }}
                </div>
                <div class="dashboard__sales">
                    <h3>"Sales, last six months"</h3>
                    <table class="sales-table">
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th>"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || sales.get()
                                key=|point| point.month.clone()
                                children=|point: SalesPoint| {
                                    view! {
                                        <tr>
                                            <td>{point.month}</td>
                                            <td>{format!("{:.2}", point.total)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CounterCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="counter-card">
            <span class="counter-card__value">{value}</span>
            <span class="counter-card__label">{label}</span>
        </div>
    }
}
