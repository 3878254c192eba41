use std::path::PathBuf;

use console::Style;
use vitalview_core::camera::OrbitCamera;
use vitalview_core::lighting::EnvironmentPreset;
use vitalview_core::scene::Scene;
use vitalview_core::tumor::TumorStage;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    accent: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            accent: Style::new().red(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub struct SceneSummary<'a> {
    pub model_paths: &'a [PathBuf],
    pub scene: &'a Scene,
    pub camera: &'a OrbitCamera,
    pub stage: TumorStage,
    pub environment: EnvironmentPreset,
    pub background: [u8; 3],
}

pub fn print_scene_summary(summary: &SceneSummary<'_>) {
    let s = Styles::new();
    let scene = summary.scene;

    println!();
    println!("  {}", s.title.apply_to("VitalView Scene"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!("  {}", s.header.apply_to("Model"));
    if summary.model_paths.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Files"),
            s.disabled.apply_to("none")
        );
    }
    for path in summary.model_paths {
        println!(
            "    {:<12}{}",
            s.label.apply_to("File"),
            s.path.apply_to(path.display())
        );
    }
    let base_triangles: usize = scene.base().iter().map(|m| m.triangle_count()).sum();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Meshes"),
        s.value.apply_to(scene.base().len())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Triangles"),
        s.value.apply_to(base_triangles)
    );
    println!();

    println!("  {}", s.header.apply_to("Tumor"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Stage"),
        s.accent.apply_to(summary.stage)
    );
    if let Some(tumor) = scene.tumor() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Triangles"),
            s.value.apply_to(tumor.triangle_count())
        );
        let offset = scene.tumor_offset();
        println!(
            "    {:<12}{}",
            s.label.apply_to("Offset"),
            s.value
                .apply_to(format!("({}, {}, {})", offset.x, offset.y, offset.z))
        );
    }
    println!();

    let limits = summary.camera.limits();
    println!("  {}", s.header.apply_to("Camera"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Distance"),
        s.value.apply_to(format!("{:.3}", summary.camera.radius()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom range"),
        s.value
            .apply_to(format!("{:.3} .. {:.3}", limits.min, limits.max))
    );
    println!();

    let [r, g, b] = summary.background;
    println!("  {}", s.header.apply_to("Environment"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Lighting"),
        s.value.apply_to(summary.environment)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Background"),
        s.value.apply_to(format!("#{r:02x}{g:02x}{b:02x}"))
    );
    println!();
}
