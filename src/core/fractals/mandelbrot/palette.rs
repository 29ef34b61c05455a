/// The fixed set of colour palettes, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Classic,
    Fire,
    Electric,
    Ocean,
    Grayscale,
}

impl Palette {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Fire,
        Self::Electric,
        Self::Ocean,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fire => "Fire",
            Self::Electric => "Electric",
            Self::Ocean => "Ocean",
            Self::Grayscale => "Grayscale",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Classic => 0,
            Self::Fire => 1,
            Self::Electric => 2,
            Self::Ocean => 3,
            Self::Grayscale => 4,
        }
    }

    /// The palette after this one, wrapping back to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
