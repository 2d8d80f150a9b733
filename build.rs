use shadow_rs::BuildPattern;
use shadow_rs::ShadowBuilder;

/// Generates `build::CLAP_LONG_VERSION` and friends for the CLI.
fn main() -> std::io::Result<()> {
    ShadowBuilder::builder()
        .build_pattern(BuildPattern::Lazy)
        .deny_const(Default::default())
        .build()
        .expect("shadow-rs could not collect build metadata");

    Ok(())
}
