use std::path::Path;

use console::Style;
use sidekick_core::animate::AnimationRequest;
use sidekick_core::compare::{ComparisonRequest, ComparisonResult};
use sidekick_core::frame::ImageBuffer;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_animation_summary(request: &AnimationRequest, image: &ImageBuffer, output: &Path) {
    let s = Styles::new();
    print_title(&s, "Sidekick Animator");

    println!("  {:<14}{}", s.label.apply_to("Source"), s.value.apply_to(image));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!("  {:<14}{}", s.label.apply_to("Type"), s.method.apply_to(request.kind));
    println!("  {:<14}{}", s.label.apply_to("Easing"), s.method.apply_to(request.easing));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Timing"),
        s.value.apply_to(format!(
            "{}s @ {} fps ({} frames)",
            request.duration,
            request.fps,
            request.total_frames()
        ))
    );
    println!("  {:<14}{}", s.label.apply_to("Intensity"), s.value.apply_to(request.intensity));
    if request.looped {
        println!("  {:<14}{}", s.label.apply_to("Loop"), s.method.apply_to("ping-pong"));
    } else {
        println!("  {:<14}{}", s.label.apply_to("Loop"), s.disabled.apply_to("off"));
    }
    println!();
}

pub fn print_comparison_summary(
    request: &ComparisonRequest,
    result: &ComparisonResult,
    output: &Path,
) {
    let s = Styles::new();
    print_title(&s, "A/B Comparison");

    println!("  {:<14}{}", s.label.apply_to("Mode"), s.method.apply_to(request.mode));
    if result.show_labels {
        println!("  {:<14}{}", s.label.apply_to("Image A"), s.value.apply_to(&request.label_a));
        println!("  {:<14}{}", s.label.apply_to("Image B"), s.value.apply_to(&request.label_b));
    }
    if result.show_metrics {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Similarity"),
            s.value.apply_to(format!("{:.3}", result.similarity))
        );
        println!(
            "  {:<14}{}",
            s.label.apply_to("Quality"),
            s.value.apply_to(format!("{:.3}", result.quality))
        );
    } else {
        println!("  {:<14}{}", s.label.apply_to("Metrics"), s.disabled.apply_to("hidden"));
    }
    println!("  {:<14}{}", s.label.apply_to("Dimensions"), s.value.apply_to(&result.image));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!();
}
