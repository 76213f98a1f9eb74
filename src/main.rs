//! SurfCheck - surf condition bulletins for Saquarema spots
//!
//! Fetches marine (wave) and atmospheric (wind) hourly forecasts from
//! Open-Meteo, aggregates them into per-day summaries with star ratings and
//! best-window recommendations, and prints the bulletin.

mod cache;
mod cli;
mod data;
mod direction;
mod engine;
mod render;

use chrono::{Local, NaiveDate};
use clap::Parser;
use futures::future::try_join;

use cache::{ForecastBundle, ForecastCache};
use cli::Cli;
use data::{ForecastClient, MarineClient, Spot};
use engine::HourlySeries;

/// How long a fetched forecast bundle stays fresh on disk.
const CACHE_TTL_HOURS: i64 = 3;

/// Fetches both provider feeds concurrently for one spot and date range.
async fn fetch_bundle(
    spot: &Spot,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ForecastBundle, Box<dyn std::error::Error>> {
    let marine_client = MarineClient::new().with_timezone(spot.timezone);
    let forecast_client = ForecastClient::new().with_timezone(spot.timezone);

    let marine_fut = async {
        marine_client
            .fetch_hourly(spot.latitude, spot.longitude, start, end)
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
    };
    let wind_fut = async {
        forecast_client
            .fetch_hourly(spot.latitude, spot.longitude, start, end)
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
    };

    let (marine, wind) = try_join(marine_fut, wind_fut).await?;
    Ok(ForecastBundle { marine, wind })
}

/// Returns the provider bundle for the request, preferring a fresh cache
/// entry, then the network, then a stale cache entry as a last resort.
async fn load_bundle(
    cache: Option<&ForecastCache>,
    spot: &Spot,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ForecastBundle, Box<dyn std::error::Error>> {
    let cached = cache.and_then(|c| c.load(spot.id, start, end));

    if let Some(entry) = &cached {
        if !entry.is_stale {
            log::info!("using cached forecast from {}", entry.cached_at);
            return Ok(entry.bundle.clone());
        }
    }

    match fetch_bundle(spot, start, end).await {
        Ok(bundle) => {
            if let Some(c) = cache {
                if let Err(e) = c.store(spot.id, start, end, &bundle, CACHE_TTL_HOURS) {
                    log::warn!("failed to write forecast cache: {}", e);
                }
            }
            Ok(bundle)
        }
        Err(e) => match cached {
            Some(entry) => {
                log::warn!("fetch failed ({}), falling back to stale cache", e);
                Ok(entry.bundle)
            }
            None => Err(e),
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Cli::parse();
    let spot = args.resolve_spot()?;
    let (start, end) = args.resolve_range(Local::now().date_naive())?;
    let config = args.apply_overrides(spot.rating_config());

    let cache = ForecastCache::new();
    if cache.is_none() {
        log::warn!("no cache directory available, fetching fresh each run");
    }

    let bundle = load_bundle(cache.as_ref(), spot, start, end).await?;

    let series = HourlySeries::from_providers(&bundle.marine, &bundle.wind)?;
    let bulletin = engine::build(&series, start, end, &config)?;

    println!("{}", render::render_bulletin(spot.name, &bulletin));

    Ok(())
}
