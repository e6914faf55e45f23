// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the fixture dataset to PNG bytes without text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, checks every mark center against its layout color. The golden file is
//   opt-in: it is not committed, since Skia anti-aliasing differs across platforms.

use scatter_core::{Dataset, RenderOptions, ScatterChart};

fn chart_and_opts() -> (ScatterChart, RenderOptions) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cyclists.json");
    let chart = ScatterChart::from_dataset(Dataset::load(path).expect("fixture"));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    (chart, opts)
}

fn render_bytes() -> Vec<u8> {
    let (chart, opts) = chart_and_opts();
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn golden_fixture_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("fixture_chart.png");

    if bless_mode() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        let (chart, opts) = chart_and_opts();
        let layout = chart.layout(&opts).expect("layout");
        let img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        assert_eq!((img.width(), img.height()), (1000, 600));
        for m in &layout.marks {
            let px = img.get_pixel(m.cx as u32, m.cy as u32).0;
            assert_eq!(px, [m.color.r(), m.color.g(), m.color.b(), 255], "mark at {:?}", (m.cx, m.cy));
        }
    }
}
