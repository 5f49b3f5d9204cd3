//! Behavioural coverage for weather-aware reordering.
//!
//! Scenarios follow a visitor's day plan through changing forecasts and
//! assert on the visit order a caller would observe.

use lumi_core::{Itinerary, Place, Weather};
use lumi_route::optimise;
use rstest::{fixture, rstest};

#[fixture]
fn day_plan() -> Itinerary {
    Itinerary::from_places(vec![
        Place::new("palace", "Gyeongbokgung").with_category("tourist_attraction"),
        Place::new("tea-house", "Insadong Tea House").with_category("cafe"),
        Place::new("stream", "Cheonggyecheon Walk").with_category("park"),
        Place::new("gallery", "Hanok Gallery").with_category("museum"),
        Place::new("bistro", "Seochon Bistro").with_category("restaurant"),
    ])
}

fn ids(itinerary: &Itinerary) -> Vec<&str> {
    itinerary
        .places()
        .iter()
        .map(|place| place.id.as_str())
        .collect()
}

#[rstest]
fn rain_brings_shelter_forward(day_plan: Itinerary) {
    let wet_day = optimise(&day_plan, Weather::Rain);
    assert_eq!(
        ids(&wet_day),
        ["tea-house", "gallery", "bistro", "palace", "stream"]
    );
}

#[rstest]
fn sunny_weather_front_loads_the_outdoors(day_plan: Itinerary) {
    let clear_day = optimise(&day_plan, Weather::Sunny);
    assert_eq!(
        ids(&clear_day),
        ["palace", "stream", "tea-house", "gallery", "bistro"]
    );
}

#[rstest]
fn unknown_conditions_are_treated_as_good_weather(day_plan: Itinerary) {
    let forecast = Weather::from_condition("Drizzle");
    let plan = optimise(&day_plan, forecast);
    assert_eq!(ids(&plan), ids(&optimise(&day_plan, Weather::Sunny)));
}

#[rstest]
fn reordering_is_idempotent(day_plan: Itinerary) {
    let once = optimise(&day_plan, Weather::Snow);
    let twice = optimise(&once, Weather::Snow);
    assert_eq!(ids(&once), ids(&twice));
}

#[rstest]
fn the_result_is_a_fresh_itinerary(day_plan: Itinerary) {
    let reordered = optimise(&day_plan, Weather::Clouds);
    assert_ne!(ids(&day_plan), ids(&reordered));
    assert_eq!(day_plan.len(), reordered.len());
}
