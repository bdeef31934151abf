use const_oid::AssociatedOid;
use der::{
    Decode, Encode,
    asn1::{Ia5String, OctetString},
    oid::ObjectIdentifier,
};
use x509_cert::ext::pkix::name::GeneralName;

use crate::error::CsrGenError;

/// Trait for converting to and from X.509 extension values.
///
/// This trait provides methods to encode and decode the DER payload carried
/// inside an extension's OCTET STRING.
///
/// # Example
/// ```
/// use csrgen::request::extensions::{SubjectAltName, ToAndFromX509Extension};
/// let san = SubjectAltName { names: vec!["example.com".to_string()] };
/// let encoded = san.to_x509_extension_value().unwrap();
/// let decoded = SubjectAltName::from_x509_extension_value(&encoded).unwrap();
/// assert_eq!(san.names, decoded.names);
/// ```
pub trait ToAndFromX509Extension {
    /// The Object Identifier (OID) for the extension.
    const OID: ObjectIdentifier;

    /// Encodes the extension into a DER-encoded byte vector.
    fn to_x509_extension_value(&self) -> Result<Vec<u8>, CsrGenError>;

    /// Decodes the extension from a DER-encoded byte slice.
    fn from_x509_extension_value(extension: &[u8]) -> Result<Self, CsrGenError>
    where
        Self: Sized;
}

/// Represents the Subject Alternative Name (SAN) extension.
///
/// Only DNS names are supported; entries keep their insertion order.
///
/// # Fields
/// * `names` - A list of DNS names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAltName {
    pub names: Vec<String>,
}

impl ToAndFromX509Extension for SubjectAltName {
    const OID: ObjectIdentifier = x509_cert::ext::pkix::SubjectAltName::OID;

    fn to_x509_extension_value(&self) -> Result<Vec<u8>, CsrGenError> {
        let san = x509_cert::ext::pkix::SubjectAltName(
            self.names
                .iter()
                .map(|name| {
                    Ia5String::try_from(name.clone())
                        .map(GeneralName::DnsName)
                        .map_err(|e| CsrGenError::RequestBuildError(e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
        );

        san.to_der()
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))
    }

    fn from_x509_extension_value(extension: &[u8]) -> Result<Self, CsrGenError> {
        let san = x509_cert::ext::pkix::SubjectAltName::from_der(extension)?;
        let names = san
            .0
            .iter()
            .map(|name| match name {
                GeneralName::DnsName(dns) => Ok(dns.to_string()),
                _ => Err(CsrGenError::DecodingError(
                    "Unsupported general name type".to_string(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { names })
    }
}

/// Represents an X.509 extension as carried in a request.
///
/// # Fields
/// * `oid` - The object identifier of the extension.
/// * `critical` - Indicates if the extension is critical.
/// * `value` - The DER-encoded extension value.
#[derive(Clone, Debug)]
pub struct ExtensionParam {
    pub oid: ObjectIdentifier,
    pub critical: bool,
    /// DER-encoded extension value
    pub value: Vec<u8>,
}

impl ExtensionParam {
    /// Creates an `ExtensionParam` from a specific extension.
    pub fn from_extension<E: ToAndFromX509Extension>(
        extension: E,
        critical: bool,
    ) -> Result<Self, CsrGenError> {
        let value = extension.to_x509_extension_value()?;
        Ok(Self {
            oid: E::OID,
            critical,
            value,
        })
    }

    /// Decodes an `ExtensionParam` into a specific extension.
    pub fn to_extension<E: ToAndFromX509Extension>(&self) -> Result<E, CsrGenError> {
        E::from_x509_extension_value(&self.value)
    }

    /// Converts into the `x509-cert` extension structure.
    pub fn to_x509_extension(&self) -> Result<x509_cert::ext::Extension, CsrGenError> {
        Ok(x509_cert::ext::Extension {
            extn_id: self.oid,
            critical: self.critical,
            extn_value: OctetString::new(self.value.clone())
                .map_err(|e| CsrGenError::EncodingError(e.to_string()))?,
        })
    }

    /// Creates an `ExtensionParam` from the `x509-cert` extension structure.
    pub fn from_x509_extension(ext: &x509_cert::ext::Extension) -> Self {
        Self {
            oid: ext.extn_id,
            critical: ext.critical,
            value: ext.extn_value.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_alt_name_encoding_decoding() {
        let original = SubjectAltName {
            names: vec![
                "example.com".to_string(),
                "www.example.com".to_string(),
                "mail.example.com".to_string(),
            ],
        };
        let encoded = original.to_x509_extension_value().unwrap();
        let decoded = SubjectAltName::from_x509_extension_value(&encoded).unwrap();
        assert_eq!(original.names, decoded.names);
    }

    #[test]
    fn test_subject_alt_name_rejects_non_dns_entries() {
        let san = x509_cert::ext::pkix::SubjectAltName(vec![GeneralName::Rfc822Name(
            Ia5String::try_from("user@example.com".to_string()).unwrap(),
        )]);
        let encoded = san.to_der().unwrap();
        let err = SubjectAltName::from_x509_extension_value(&encoded).unwrap_err();
        assert!(matches!(err, CsrGenError::DecodingError(_)));
    }

    #[test]
    fn test_extension_param_round_trip() {
        let san = SubjectAltName {
            names: vec!["example.com".to_string()],
        };
        let param = ExtensionParam::from_extension(san.clone(), false).unwrap();
        assert_eq!(param.oid, SubjectAltName::OID);
        assert!(!param.critical);
        let decoded: SubjectAltName = param.to_extension().unwrap();
        assert_eq!(decoded, san);
    }
}
