use bon::Builder;
use core::str::FromStr;
use x509_cert::name::RdnSequence;

use crate::config::Config;
use crate::error::CsrGenError;

/// Parameters for building a certificate signing request.
///
/// # Fields
/// * `subject` - The distinguished name of the request subject.
/// * `dns_names` - DNS entries for the Subject Alternative Name extension,
///   in the order they should appear.
#[derive(Clone, Debug, Builder)]
pub struct RequestParams {
    pub subject: DistinguishedName,
    pub dns_names: Vec<String>,
}

impl RequestParams {
    /// Derives request parameters from a loaded configuration: the common
    /// name is the hostname and the SAN list is the configured DNS names.
    pub fn from_config(config: &Config) -> Self {
        RequestParams {
            subject: DistinguishedName::builder()
                .common_name(config.common_name().to_string())
                .build(),
            dns_names: config.dns_names(),
        }
    }
}

/// Distinguished name of the request subject.
///
/// Only the common name is required; the remaining components are emitted
/// into the encoded name only when set.
///
/// # Fields
/// * `common_name` - The common name (CN).
/// * `country` - The country (C).
/// * `state` - The state or province (ST).
/// * `locality` - The locality or city (L).
/// * `organization` - The organization (O).
/// * `organization_unit` - The organizational unit (OU).
#[derive(Clone, Debug, Builder, Default)]
pub struct DistinguishedName {
    pub common_name: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub locality: Option<String>,
    pub organization: Option<String>,
    pub organization_unit: Option<String>,
}

impl DistinguishedName {
    /// Converts the distinguished name to an X.509 RDN sequence.
    pub fn to_x509_name(&self) -> Result<RdnSequence, CsrGenError> {
        let mut components = vec![format!("CN={}", self.common_name)];
        for (key, value) in [
            ("OU", &self.organization_unit),
            ("O", &self.organization),
            ("L", &self.locality),
            ("ST", &self.state),
            ("C", &self.country),
        ] {
            if let Some(value) = value {
                components.push(format!("{key}={value}"));
            }
        }
        let rfc4514_name = components.join(",");
        RdnSequence::from_str(&rfc4514_name)
            .map_err(|e| CsrGenError::RequestBuildError(format!("invalid subject name: {e}")))
    }

    /// Creates a `DistinguishedName` from an X.509 RDN sequence.
    ///
    /// Only the common name is recovered; a subject without a decodable CN
    /// yields an empty common name.
    pub fn from_x509_name(name: &RdnSequence) -> Self {
        let mut common_name = String::new();

        for rdn in name.0.iter() {
            for attr in rdn.0.iter() {
                if attr.oid == const_oid::db::rfc4519::CN {
                    if let Some(s) = decode_directory_string(&attr.value) {
                        common_name = s;
                    }
                }
            }
        }

        DistinguishedName {
            common_name,
            ..Default::default()
        }
    }
}

/// Attribute values in the wild are UTF8String or PrintableString.
fn decode_directory_string(value: &der::Any) -> Option<String> {
    if let Ok(s) = value.decode_as::<String>() {
        return Some(s);
    }
    value
        .decode_as::<der::asn1::PrintableStringRef>()
        .map(|s| s.as_str().to_owned())
        .ok()
}
