use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sidekick_core::animate::{animate, AnimationKind, AnimationRequest, Easing};
use sidekick_core::config::SidekickConfig;
use sidekick_core::io::frame_sink::write_frame_sequence;

use crate::settings::load_input;

#[derive(Args)]
pub struct AnimateArgs {
    /// Input image file
    pub file: PathBuf,

    /// Animation type (zoom_in, zoom_out, pan_left, pan_right, pan_up,
    /// pan_down, rotate, fade, pulse)
    #[arg(long = "type")]
    pub kind: Option<AnimationKind>,

    /// Duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Motion strength
    #[arg(long)]
    pub intensity: Option<f64>,

    /// Easing (linear, ease_in, ease_out, ease_in_out)
    #[arg(long)]
    pub easing: Option<Easing>,

    /// Append the reversed frames for a seamless ping-pong loop
    #[arg(long = "loop", conflicts_with = "no_loop")]
    pub looped: bool,

    /// Play the frames once, even if the config enables looping
    #[arg(long)]
    pub no_loop: bool,

    /// Output directory for the frame sequence
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,
}

pub fn run(args: &AnimateArgs, config: &SidekickConfig) -> Result<()> {
    let request = build_request(args, &config.animation);
    request.validate().context("Invalid animation request")?;

    let image = load_input(&args.file, config)?;

    crate::summary::print_animation_summary(&request, &image, &args.output);

    let frames = animate(&image, &request).context("Animation failed")?;

    let pb = ProgressBar::new(frames.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Writing frames");

    write_frame_sequence(&frames, &args.output, |done, _total| {
        pb.set_position(done as u64);
    })
    .with_context(|| format!("Failed to write frames to {}", args.output.display()))?;
    pb.finish_with_message("Done");

    println!();
    print!("{}", request.report(&frames));
    println!("Frames saved to {}", args.output.display());

    Ok(())
}

/// Command-line values override the config defaults field by field.
fn build_request(args: &AnimateArgs, defaults: &AnimationRequest) -> AnimationRequest {
    let looped = if args.no_loop {
        false
    } else {
        args.looped || defaults.looped
    };
    AnimationRequest {
        kind: args.kind.unwrap_or(defaults.kind),
        duration: args.duration.unwrap_or(defaults.duration),
        fps: args.fps.unwrap_or(defaults.fps),
        intensity: args.intensity.unwrap_or(defaults.intensity),
        easing: args.easing.unwrap_or(defaults.easing),
        looped,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: AnimateArgs,
    }

    fn parse(argv: &[&str]) -> AnimateArgs {
        Harness::try_parse_from(std::iter::once("sidekick").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    fn looping_defaults() -> AnimationRequest {
        AnimationRequest {
            looped: true,
            ..AnimationRequest::default()
        }
    }

    #[test]
    fn test_no_loop_overrides_config() {
        let args = parse(&["in.png", "--no-loop"]);
        assert!(!build_request(&args, &looping_defaults()).looped);
    }

    #[test]
    fn test_loop_follows_config_without_flags() {
        let args = parse(&["in.png"]);
        assert!(build_request(&args, &looping_defaults()).looped);
        assert!(!build_request(&args, &AnimationRequest::default()).looped);
    }

    #[test]
    fn test_loop_flag_enables_looping() {
        let args = parse(&["in.png", "--loop"]);
        assert!(build_request(&args, &AnimationRequest::default()).looped);
    }

    #[test]
    fn test_loop_and_no_loop_conflict() {
        let argv = ["sidekick", "in.png", "--loop", "--no-loop"];
        assert!(Harness::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_flags_override_other_defaults() {
        let args = parse(&["in.png", "--type", "pan_up", "--fps", "12"]);
        let request = build_request(&args, &AnimationRequest::default());
        assert_eq!(request.kind, AnimationKind::PanUp);
        assert_eq!(request.fps, 12);
        assert_eq!(request.duration, AnimationRequest::default().duration);
    }
}
