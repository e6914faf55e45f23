// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNG and SVG files.

use scatter_core::{ClockValue, RenderOptions, RideRecord, ScatterChart};

fn tiny_chart() -> ScatterChart {
    let rows = [("37:10", 1996, ""), ("36:55", 1997, "Alleged"), ("38:02", 2003, ""), ("37:44", 2010, "Stripped")];
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, &(time, year, doping))| RideRecord {
            time: ClockValue::parse(time).unwrap(),
            raw_time: time.to_string(),
            place: i as u32 + 1,
            seconds: 0,
            name: format!("Rider {i}"),
            year,
            nationality: "FRA".to_string(),
            doping: doping.to_string(),
            url: String::new(),
        })
        .collect();
    ScatterChart::new(records)
}

#[test]
fn render_smoke_png() {
    let chart = tiny_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (1000, 600));
    // Light theme background in the top-left corner.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn render_smoke_svg() {
    let svg = tiny_chart().render_to_svg(&RenderOptions::default()).expect("svg");
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, &svg).expect("write svg");
    assert_eq!(svg.matches("class=\"dot\"").count(), 4);
}
