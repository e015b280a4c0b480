//! Ca-complex categories and their consonant forms

category! {
    Affiliation {
        Consolidative => "CSL",
        Associative => "ASO",
        Coalescent => "COA",
        Variative => "VAR",
    }
}

category! {
    Configuration {
        Uniplex => "UPX",
        Duplex => "DPX",
        MultiplexSimilarSeparate => "MSS",
        MultiplexSimilarConnected => "MSC",
        MultiplexSimilarFused => "MSF",
        MultiplexDissimilarSeparate => "MDS",
        MultiplexDissimilarConnected => "MDC",
        MultiplexDissimilarFused => "MDF",
        MultiplexFuzzySeparate => "MFS",
        MultiplexFuzzyConnected => "MFC",
        MultiplexFuzzyFused => "MFF",
        DuplexSimilarSeparate => "DSS",
        DuplexSimilarConnected => "DSC",
        DuplexSimilarFused => "DSF",
        DuplexDissimilarSeparate => "DDS",
        DuplexDissimilarConnected => "DDC",
        DuplexDissimilarFused => "DDF",
        DuplexFuzzySeparate => "DFS",
        DuplexFuzzyConnected => "DFC",
        DuplexFuzzyFused => "DFF",
    }
}

category! {
    Extension {
        Delimitive => "DEL",
        Proximal => "PRX",
        Inceptive => "ICP",
        Attenuative => "ATV",
        Graduative => "GRA",
        Depletive => "DPL",
    }
}

category! {
    Perspective {
        Monadic => "M",
        Agglomerative => "G",
        Nomic => "N",
        Abstract => "A",
    }
}

category! {
    Essence {
        Normal => "NRM",
        Representative => "RPV",
    }
}

category! {
    /// Slot I marker letting Vv stand in for a common Ca.
    CaShortcut {
        W => "w",
        Y => "y",
    }
}

impl Default for Affiliation {
    fn default() -> Self {
        Affiliation::Consolidative
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::Uniplex
    }
}

impl Default for Extension {
    fn default() -> Self {
        Extension::Delimitive
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Perspective::Monadic
    }
}

impl Default for Essence {
    fn default() -> Self {
        Essence::Normal
    }
}

impl Affiliation {
    pub fn form(self) -> &'static str {
        ["", "l", "r", "ř"][self.index()]
    }

    /// Form used when nothing else in the Ca is overt.
    pub fn standalone_form(self) -> &'static str {
        ["l", "nļ", "rļ", "ň"][self.index()]
    }
}

impl Configuration {
    pub fn form(self) -> &'static str {
        [
            "", "s", "t", "k", "p", "ţ", "f", "ç", "z", "ž", "ż", "c", "ks", "ps", "ţs", "fs", "š",
            "č", "kš", "pš",
        ][self.index()]
    }
}

impl Extension {
    /// The second spelling is used when the configuration is uniplex.
    pub fn form(self, after_uniplex: bool) -> &'static str {
        if after_uniplex {
            ["", "d", "g", "b", "gz", "bz"][self.index()]
        } else {
            ["", "t", "k", "p", "g", "b"][self.index()]
        }
    }
}

/// Joint form of perspective and essence.
///
/// `standalone` applies when affiliation, configuration and extension are
/// all silent.
pub fn perspective_essence_form(perspective: Perspective, essence: Essence, standalone: bool) -> &'static str {
    let p = perspective.index();
    match (essence, standalone) {
        (Essence::Normal, false) => ["", "r", "v", "j"][p],
        (Essence::Normal, true) => ["l", "r", "h", "y"][p],
        (Essence::Representative, false) => ["l", "ř", "m", "n"][p],
        (Essence::Representative, true) => ["tļ", "ř", "hm", "hn"][p],
    }
}

/// Allomorphic substitutions applied to an assembled Ca.
pub const CA_SUBSTITUTIONS: [(&str, &str); 10] = [
    ("pp", "mp"),
    ("tt", "nt"),
    ("kk", "nk"),
    ("ll", "pļ"),
    ("pb", "mb"),
    ("kg", "ng"),
    ("rr", "ns"),
    ("rř", "nš"),
    ("řr", "ňs"),
    ("řř", "ňš"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_count() {
        assert_eq!(Configuration::ALL.len(), 20);
        assert_eq!(Configuration::DuplexFuzzyFused.form(), "pš");
        assert_eq!(Configuration::from_abbreviation("mdc"), Some(Configuration::MultiplexDissimilarConnected));
    }

    #[test]
    fn test_extension_spellings() {
        assert_eq!(Extension::Graduative.form(true), "gz");
        assert_eq!(Extension::Graduative.form(false), "g");
    }
}
