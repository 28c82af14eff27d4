// Cross-generator determinism audit.
//
// The engine's one correctness property: identical input, identical output,
// every time, in every execution environment. Each generator is called
// twice and compared, and once more through a JSON round trip — the
// round trip stands in for a second process (a server render pass shipping
// records to an independent browser pass).

use motif_engine::seed::Seed;
use motif_engine::{
    bars, crystal_branches, donut_percent, generate_field, golden_spiral, sparkline,
    wobbly_line, wobbly_outline, ChipSpec, PathDescriptor, StyleConfig,
};

fn roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    serde_json::from_str(&serde_json::to_string(value).unwrap()).unwrap()
}

#[test]
fn field_is_reproducible_across_passes() {
    let style = StyleConfig::default();
    let seed = Seed::from("studio-hero");
    let first = generate_field(50, &seed, &style).unwrap();
    let second = generate_field(50, &seed, &style).unwrap();
    assert_eq!(first, second);

    let restored: Vec<ChipSpec> = roundtrip(&first);
    assert_eq!(first, restored);
}

#[test]
fn outline_is_reproducible_across_passes() {
    let seed = Seed::from("card-frame");
    let first = wobbly_outline(300.0, 200.0, &seed, 4.0).unwrap();
    let second = wobbly_outline(300.0, 200.0, &seed, 4.0).unwrap();
    assert_eq!(first, second);

    let restored: PathDescriptor = roundtrip(&first);
    assert_eq!(first, restored);
    assert_eq!(first.to_svg_data(), restored.to_svg_data());
}

#[test]
fn divider_is_reproducible_across_passes() {
    let seed = Seed::from("section-rule");
    let first = wobbly_line(0.0, 0.0, 480.0, 0.0, &seed, 2.0, 12).unwrap();
    let second = wobbly_line(0.0, 0.0, 480.0, 0.0, &seed, 2.0, 12).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, roundtrip(&first));
}

#[test]
fn spiral_is_reproducible_across_passes() {
    let first = golden_spiral(300.0).unwrap();
    let second = golden_spiral(300.0).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, roundtrip(&first));
}

#[test]
fn branches_are_reproducible_across_passes() {
    let seed = Seed::from("winter-panel");
    let first = crystal_branches(6, 48.0, &seed).unwrap();
    let second = crystal_branches(6, 48.0, &seed).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, roundtrip(&first));
}

#[test]
fn series_are_reproducible_across_passes() {
    assert_eq!(sparkline("Projects Shipped", 8), sparkline("Projects Shipped", 8));
    assert_eq!(bars("Team Velocity", 6), bars("Team Velocity", 6));
    assert_eq!(donut_percent("Capacity"), donut_percent("Capacity"));

    let series = sparkline("Projects Shipped", 8);
    let restored: Vec<f64> = roundtrip(&series);
    assert_eq!(series, restored);
}

#[test]
fn numeric_and_text_seeds_generate_identically() {
    let style = StyleConfig::default();
    let by_number = generate_field(12, &Seed::from(7), &style).unwrap();
    let by_text = generate_field(12, &Seed::from("7"), &style).unwrap();
    assert_eq!(by_number, by_text);
}
