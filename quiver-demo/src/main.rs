use futures::join;
use quiver::{ClientBuilder, FetchExchange};
use quiver_demo::store::{Category, FilterState, FilterStore};
use quiver_demo::FilterController;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:4000/graphql";

fn print_state(label: &str, state: &FilterState) {
    println!("--- {} ---", label);
    for category in Category::ALL {
        let names: Vec<&str> = state
            .data(category)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        println!(
            "{:>9}: loading={} data={:?}",
            category.as_str(),
            state.is_loading(category),
            names
        );
    }
}

/// Drives the scenario the original browser demo asked the user to click
/// through. Expects a running server; start one with `quiver-server`.
/// Override the endpoint with the QUIVER_DEMO_URL environment variable.
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let url = std::env::var("QUIVER_DEMO_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let client = ClientBuilder::new(url.clone())
        .with_exchange(FetchExchange)
        .build();
    let store = Arc::new(FilterStore::new());
    let controller = FilterController::new(client, store.clone());

    println!("querying {}", url);
    println!();
    println!("Step 1: load tags and persons concurrently, before either resolves.");
    println!("With no client-side response cache, both slices survive; the data");
    println!("loss in the original demo lived entirely in its query library's cache.");
    join!(
        controller.load(Category::Tags),
        controller.load(Category::Persons)
    );
    print_state("after concurrent tags + persons", &store.snapshot());

    println!();
    println!("Step 2: load tags twice in quick succession (last resolution wins).");
    join!(
        controller.load(Category::Tags),
        controller.load(Category::Tags)
    );
    print_state("after double tags load", &store.snapshot());

    println!();
    println!("Step 3: load the remaining category.");
    controller.load(Category::Locations).await;
    print_state("after locations load", &store.snapshot());

    println!();
    println!("Step 4: clear all data.");
    controller.reset();
    print_state("after reset", &store.snapshot());
}
