/// Platform type model and extraction
pub mod text;

pub use text::ToolOutput;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::ExtractionError;

/// Underlying infrastructure provider reported by the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformType {
    Aws,
    Azure,
    BareMetal,
    Gcp,
    Libvirt,
    OpenStack,
    None,
    VSphere,
    OVirt,
    IbmCloud,
    KubeVirt,
    EquinixMetal,
    PowerVs,
    AlibabaCloud,
    Nutanix,
    External,
    /// A label this build does not know about, kept verbatim
    Other(String),
}

impl PlatformType {
    /// Label as it appears in the Infrastructure resource
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::BareMetal => "BareMetal",
            Self::Gcp => "GCP",
            Self::Libvirt => "Libvirt",
            Self::OpenStack => "OpenStack",
            Self::None => "None",
            Self::VSphere => "VSphere",
            Self::OVirt => "oVirt",
            Self::IbmCloud => "IBMCloud",
            Self::KubeVirt => "KubeVirt",
            Self::EquinixMetal => "EquinixMetal",
            Self::PowerVs => "PowerVS",
            Self::AlibabaCloud => "AlibabaCloud",
            Self::Nutanix => "Nutanix",
            Self::External => "External",
            Self::Other(label) => label,
        }
    }
}

impl FromStr for PlatformType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "AWS" => Self::Aws,
            "Azure" => Self::Azure,
            "BareMetal" => Self::BareMetal,
            "GCP" => Self::Gcp,
            "Libvirt" => Self::Libvirt,
            "OpenStack" => Self::OpenStack,
            "None" => Self::None,
            "VSphere" => Self::VSphere,
            "oVirt" => Self::OVirt,
            "IBMCloud" => Self::IbmCloud,
            "KubeVirt" => Self::KubeVirt,
            "EquinixMetal" => Self::EquinixMetal,
            "PowerVS" => Self::PowerVs,
            "AlibabaCloud" => Self::AlibabaCloud,
            "Nutanix" => Self::Nutanix,
            "External" => Self::External,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for PlatformType {
    fn from(label: &str) -> Self {
        match label.parse() {
            Ok(platform) => platform,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything a platform type can be read out of.
///
/// Both the API record and the raw tool output implement this, so callers
/// do not care which lookup strategy produced the input.
pub trait ExtractPlatform {
    fn extract_platform(&self) -> Result<PlatformType, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip_through_display() {
        for label in ["AWS", "Azure", "BareMetal", "GCP", "None", "oVirt", "PowerVS"] {
            let platform = PlatformType::from(label);
            assert!(!matches!(platform, PlatformType::Other(_)), "{label}");
            assert_eq!(platform.to_string(), label);
        }
    }

    #[test]
    fn test_unknown_label_is_kept_verbatim() {
        let platform = PlatformType::from("aws");
        assert_eq!(platform, PlatformType::Other("aws".to_string()));
        assert_eq!(platform.to_string(), "aws");
    }
}
