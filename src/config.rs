//! Generation options
//!
//! Defaults apply field by field; `from_env` overrides the fields whose
//! variables are set.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Which shortcut forms the formative composer may use.
///
/// A shortcut is used only when both the policy allows it and the formative
/// is eligible; ineligible requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutPolicy {
    /// Slot IV/VI shortcut (Ca folded into Vv).
    pub ca: bool,
    /// Slot VII shortcut (final affix folded into the Cn marker).
    pub affix: bool,
    /// Slot VIII shortcut (Cn folded into the marker).
    pub cn: bool,
}

impl ShortcutPolicy {
    pub const NONE: ShortcutPolicy = ShortcutPolicy { ca: false, affix: false, cn: false };
    pub const ALL: ShortcutPolicy = ShortcutPolicy { ca: true, affix: true, cn: true };

    /// Parses `all`, `none`, or a comma list of `ca`, `affix`, `cn`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim().to_lowercase();
        match text.as_str() {
            "all" => return Ok(Self::ALL),
            "none" | "" => return Ok(Self::NONE),
            _ => {}
        }
        let mut policy = Self::NONE;
        for item in text.split(',').map(str::trim) {
            match item {
                "ca" => policy.ca = true,
                "affix" => policy.affix = true,
                "cn" => policy.cn = true,
                other => {
                    return Err(CodecError::InvalidConfig(format!("unknown shortcut '{}'", other)))
                }
            }
        }
        Ok(policy)
    }
}

impl Default for ShortcutPolicy {
    fn default() -> Self {
        Self::ALL
    }
}

/// Options for word generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub shortcuts: ShortcutPolicy,
    /// Drop a default word-initial Vv when the root allows it.
    pub elide_vv: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            shortcuts: ShortcutPolicy::default(),
            elide_vv: true,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shortcuts(mut self, shortcuts: ShortcutPolicy) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn with_elide_vv(mut self, elide_vv: bool) -> Self {
        self.elide_vv = elide_vv;
        self
    }

    /// Reads `ITHKUIL_SHORTCUTS` and `ITHKUIL_ELIDE_VV`.
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();
        if let Ok(value) = std::env::var("ITHKUIL_SHORTCUTS") {
            options.shortcuts = ShortcutPolicy::parse(&value)?;
        }
        if let Ok(value) = std::env::var("ITHKUIL_ELIDE_VV") {
            options.elide_vv = parse_flag(&value)?;
        }
        Ok(options)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CodecError::InvalidConfig(format!("expected a boolean, got '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!(ShortcutPolicy::parse("all").unwrap(), ShortcutPolicy::ALL);
        assert_eq!(ShortcutPolicy::parse(" None ").unwrap(), ShortcutPolicy::NONE);
        let policy = ShortcutPolicy::parse("ca, cn").unwrap();
        assert!(policy.ca && policy.cn && !policy.affix);
        assert!(ShortcutPolicy::parse("ca,bogus").is_err());
    }

    #[test]
    fn test_builder() {
        let options = GenerationOptions::new()
            .with_shortcuts(ShortcutPolicy::NONE)
            .with_elide_vv(false);
        assert_eq!(options.shortcuts, ShortcutPolicy::NONE);
        assert!(!options.elide_vv);
        assert!(GenerationOptions::default().elide_vv);
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse_flag("Yes"), Ok(true));
        assert_eq!(parse_flag("0"), Ok(false));
        assert!(parse_flag("maybe").is_err());
    }
}
