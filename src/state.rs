use clap::ValueEnum;

/// How supplied fragments become the slide list.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum MountPolicy {
    #[default]
    Direct,    // Fragments are the slides; rebuilt whenever the slide set changes
    LoopClone, // Fragments are wrapped once at mount, first one duplicated at the end
}

/// Where the position lands after the host replaces the slide set.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum ReloadPosition {
    #[default]
    Reset,    // Back to the first slide
    Preserve, // Stay on the current slide, clamped to the new range
}
