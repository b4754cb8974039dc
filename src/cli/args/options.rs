use clap::ValueEnum;
use gridline::Preset;

/// Record presets selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum PresetArg {
	Packages,
	Bookings,
	Destinations,
	Categories,
	Generic,
}

impl PresetArg {
	pub(crate) fn preset(self) -> Preset {
		match self {
			Self::Packages => Preset::Packages,
			Self::Bookings => Preset::Bookings,
			Self::Destinations => Preset::Destinations,
			Self::Categories => Preset::Categories,
			Self::Generic => Preset::Generic,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
