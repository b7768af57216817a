//! Query options
//!
//! Effective options are layered: library defaults, then whatever the
//! instance under construction already carries, then the caller's options
//! after [`LoadOptions::flatten`].

use fos_css::MatchOptions;
use fos_html::ParseOptions;
use serde::{Deserialize, Serialize};

/// Effective options of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Parse with the XML tree builder and match names case-sensitively
    pub xml_mode: bool,
    /// html5ever scripting flag
    pub scripting_enabled: bool,
    /// Drop whitespace-only text nodes while parsing
    pub ignore_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            xml_mode: false,
            scripting_enabled: true,
            ignore_whitespace: false,
        }
    }
}

impl Options {
    /// Merge defaults, instance options and per-call options
    pub fn resolve(instance: Option<&Options>, call: Option<&LoadOptions>) -> Options {
        let mut options = instance.copied().unwrap_or_default();
        if let Some(call) = call {
            call.flatten().apply_to(&mut options);
        }
        options
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            xml_mode: self.xml_mode,
            scripting_enabled: self.scripting_enabled,
            ignore_whitespace: self.ignore_whitespace,
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            xml_mode: self.xml_mode,
        }
    }
}

/// A partial set of options; `None` leaves the lower layer in place
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionOverrides {
    pub xml_mode: Option<bool>,
    pub scripting_enabled: Option<bool>,
    pub ignore_whitespace: Option<bool>,
}

impl OptionOverrides {
    pub fn apply_to(&self, options: &mut Options) {
        if let Some(xml_mode) = self.xml_mode {
            options.xml_mode = xml_mode;
        }
        if let Some(scripting_enabled) = self.scripting_enabled {
            options.scripting_enabled = scripting_enabled;
        }
        if let Some(ignore_whitespace) = self.ignore_whitespace {
            options.ignore_whitespace = ignore_whitespace;
        }
    }
}

/// `xml: true` or `xml: { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum XmlSetting {
    Enabled(bool),
    Custom(OptionOverrides),
}

/// Options as callers pass them
///
/// ```json
/// { "xml": { "ignoreWhitespace": true } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
    pub xml: Option<XmlSetting>,
    #[serde(flatten)]
    pub overrides: OptionOverrides,
}

impl LoadOptions {
    /// Shorthand for `{ xml: true }`
    pub fn xml() -> Self {
        Self {
            xml: Some(XmlSetting::Enabled(true)),
            ..Self::default()
        }
    }

    /// Normalize to canonical keys
    ///
    /// A truthy `xml` replaces every sibling key: `xml: true` becomes
    /// `{ xmlMode: true }` and `xml: {..}` becomes `{ xmlMode: true, ..}`.
    pub fn flatten(&self) -> OptionOverrides {
        match &self.xml {
            Some(XmlSetting::Enabled(true)) => OptionOverrides {
                xml_mode: Some(true),
                ..OptionOverrides::default()
            },
            Some(XmlSetting::Custom(custom)) => OptionOverrides {
                xml_mode: custom.xml_mode.or(Some(true)),
                ..custom.clone()
            },
            Some(XmlSetting::Enabled(false)) | None => self.overrides.clone(),
        }
    }
}

impl From<OptionOverrides> for LoadOptions {
    fn from(overrides: OptionOverrides) -> Self {
        Self {
            xml: None,
            overrides,
        }
    }
}
