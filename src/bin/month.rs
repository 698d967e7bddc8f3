//! A tiny terminal preview of the current month, read from the default store

use chrono::Datelike;

use lumina_calendar::grid;
use lumina_calendar::i18n::Language;
use lumina_calendar::EventStore;
use lumina_calendar::ExtractionClient;

#[tokio::main]
async fn main() {
    env_logger::init();

    let lang = Language::En;
    let store = EventStore::load(&EventStore::default_store_file());
    let today = grid::today();

    // Best-effort, like the banner of the real UI: any failure falls back
    // to the fixed quote
    let quote = match ExtractionClient::new() {
        Ok(client) => client.daily_quote().await,
        Err(_) => None,
    };
    match quote {
        Some(quote) => println!("“{}”", quote.en),
        None => println!("“{}”", lang.translations().default_quote),
    }

    println!(
        "\n{} {}  ({} events stored)",
        grid::month_label(today, lang),
        grid::year_label(today),
        store.events().len(),
    );

    for label in &grid::weekday_labels(lang) {
        print!(" {:>4}", label);
    }
    println!();

    let cells = grid::month_grid(today, lang, today, store.events());
    for week in cells.chunks(7) {
        for cell in week {
            let marker = if cell.is_today {
                '*'
            } else if !cell.events.is_empty() {
                '.'
            } else {
                ' '
            };
            let day = if cell.in_month {
                format!("{:2}{}", cell.date.day(), marker)
            } else {
                format!("  {}", marker)
            };
            print!(" {:>4}", day);
        }
        println!();
    }
}
