use clap::ValueEnum;

/// Number of colors requested by the interactive generator.
pub const SCHEME_COUNT: u32 = 5;

/// A single generated color, as returned by the scheme service.
///
/// `hex` is kept exactly as the service sent it (e.g. `#3498DB`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRecord {
    pub hex: String,
}

/// Scheme derivation modes understood by the remote service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemeMode {
    #[default]
    Monochrome,
    MonochromeDark,
    MonochromeLight,
    Analogic,
    Complement,
    AnalogicComplement,
    Triad,
    Quad,
}

impl SchemeMode {
    pub const ALL: [SchemeMode; 8] = [
        SchemeMode::Monochrome,
        SchemeMode::MonochromeDark,
        SchemeMode::MonochromeLight,
        SchemeMode::Analogic,
        SchemeMode::Complement,
        SchemeMode::AnalogicComplement,
        SchemeMode::Triad,
        SchemeMode::Quad,
    ];

    /// Query-string value for the `mode` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeMode::Monochrome => "monochrome",
            SchemeMode::MonochromeDark => "monochrome-dark",
            SchemeMode::MonochromeLight => "monochrome-light",
            SchemeMode::Analogic => "analogic",
            SchemeMode::Complement => "complement",
            SchemeMode::AnalogicComplement => "analogic-complement",
            SchemeMode::Triad => "triad",
            SchemeMode::Quad => "quad",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }
}

///Inputs for one scheme fetch, rebuilt from the form on every trigger
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeRequest {
    pub seed_hex: String,
    pub mode: SchemeMode,
    pub count: u32,
}

impl SchemeRequest {
    /// Builds a request from raw field input. A single leading `#` is dropped;
    /// nothing else is checked, the service decides what it accepts.
    pub fn from_input(seed: &str, mode: SchemeMode, count: u32) -> Self {
        let seed_hex = seed.strip_prefix('#').unwrap_or(seed).to_string();
        Self {
            seed_hex,
            mode,
            count,
        }
    }
}
