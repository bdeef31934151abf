pub mod extensions;
pub mod params;

use crate::error::CsrGenError;
pub type Result<T> = std::result::Result<T, CsrGenError>;

use const_oid::AssociatedOid;
use der::{Any, Decode, Encode, EncodePem, asn1::BitString, asn1::Null};
use rsa::RsaPublicKey;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use sha2::Sha256;
use x509_cert::attr::{Attribute, Attributes};
use x509_cert::request::{CertReq, CertReqInfo, ExtensionReq, Version};
use x509_cert::spki::AlgorithmIdentifierOwned;

use crate::key::KeyPair;
use crate::pem_utils;
use extensions::{ExtensionParam, SubjectAltName, ToAndFromX509Extension};
use params::{DistinguishedName, RequestParams};

/// PEM block label for a PKCS#10 certificate signing request.
pub const CSR_PEM_LABEL: &str = "CERTIFICATE REQUEST";

/// Represents a signed PKCS#10 certificate signing request.
///
/// This struct provides methods to encode the request into DER or PEM
/// formats and to inspect the signed fields.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// The inner representation of the request.
    pub inner: CertReq,
}

impl SigningRequest {
    /// Builds and signs a request from the given parameters and key pair.
    ///
    /// The subject carries the common name from `params`; the SAN extension
    /// is always present, non-critical, with one DNS entry per configured
    /// name in configuration order. The request is signed with PKCS#1 v1.5
    /// over SHA-256.
    ///
    /// # Errors
    /// Returns `RequestBuildError` when the common name or the DNS name list
    /// is empty, `SigningError` when the key cannot produce a signature.
    pub fn build(params: &RequestParams, key: &KeyPair) -> Result<Self> {
        if params.subject.common_name.is_empty() {
            return Err(CsrGenError::RequestBuildError(
                "subject common name must not be empty".to_string(),
            ));
        }
        if params.dns_names.is_empty() {
            return Err(CsrGenError::RequestBuildError(
                "at least one DNS name is required".to_string(),
            ));
        }

        let san = SubjectAltName {
            names: params.dns_names.clone(),
        };
        // Non-critical so consuming software may ignore the extension.
        let san_ext = ExtensionParam::from_extension(san, false)?.to_x509_extension()?;

        let ext_req = ExtensionReq(vec![san_ext]);
        let value = Any::encode_from(&ext_req)
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))?;
        let attribute = Attribute {
            oid: ExtensionReq::OID,
            values: vec![value]
                .try_into()
                .map_err(|e: der::Error| CsrGenError::EncodingError(e.to_string()))?,
        };
        let attributes = Attributes::try_from(vec![attribute])
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))?;

        let info = CertReqInfo {
            version: Version::V1,
            subject: params.subject.to_x509_name()?,
            public_key: key.as_spki()?,
            attributes,
        };

        let info_der = info
            .to_der()
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))?;
        let signature = key.sign(&info_der)?;

        let inner = CertReq {
            info,
            algorithm: sha256_with_rsa_encryption()?,
            signature: BitString::from_bytes(&signature)
                .map_err(|e| CsrGenError::EncodingError(e.to_string()))?,
        };

        Ok(SigningRequest { inner })
    }

    /// Encodes the request into DER format.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))
    }

    /// Encodes the request into PEM format.
    pub fn to_pem(&self) -> Result<String> {
        self.inner
            .to_pem(pkcs8::LineEnding::LF)
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))
    }

    /// Parses a request from DER-encoded bytes.
    pub fn from_der(der_bytes: &[u8]) -> Result<Self> {
        let inner = CertReq::from_der(der_bytes)?;
        Ok(SigningRequest { inner })
    }

    /// Parses a request from the ASCII PEM format.
    pub fn from_pem(pem_str: &str) -> Result<Self> {
        let der_bytes = pem_utils::pem_to_der_checked(pem_str, CSR_PEM_LABEL)?;
        Self::from_der(&der_bytes)
    }

    /// The subject common name, empty when the subject carries none.
    pub fn common_name(&self) -> String {
        DistinguishedName::from_x509_name(&self.inner.info.subject).common_name
    }

    /// DNS names listed in the requested SAN extension, in signed order.
    ///
    /// Returns an empty list when the request carries no SAN extension.
    pub fn dns_names(&self) -> Result<Vec<String>> {
        for attr in self.inner.info.attributes.iter() {
            if attr.oid != ExtensionReq::OID {
                continue;
            }
            for value in attr.values.iter() {
                let ext_req: ExtensionReq = value.decode_as()?;
                for ext in ext_req.0.iter() {
                    if ext.extn_id == SubjectAltName::OID {
                        let san: SubjectAltName =
                            ExtensionParam::from_x509_extension(ext).to_extension()?;
                        return Ok(san.names);
                    }
                }
            }
        }
        Ok(Vec::new())
    }

    /// Verifies the request's self-signature against an RSA public key.
    pub fn verify_signature(&self, public_key: &RsaPublicKey) -> Result<()> {
        let info_der = self
            .inner
            .info
            .to_der()
            .map_err(|e| CsrGenError::EncodingError(e.to_string()))?;
        let signature = Signature::try_from(self.inner.signature.raw_bytes())?;
        let verifying_key = VerifyingKey::<Sha256>::new(public_key.clone());
        verifying_key
            .verify(&info_der, &signature)
            .map_err(|e| CsrGenError::SigningError(format!("signature verification failed: {e}")))
    }
}

/// Algorithm identifier for sha256WithRSAEncryption.
///
/// RFC 4055: RSA signature algorithm identifiers carry an explicit ASN.1
/// NULL parameter.
fn sha256_with_rsa_encryption() -> Result<AlgorithmIdentifierOwned> {
    let null =
        Any::encode_from(&Null).map_err(|e| CsrGenError::EncodingError(e.to_string()))?;
    Ok(AlgorithmIdentifierOwned {
        oid: const_oid::db::rfc5912::SHA_256_WITH_RSA_ENCRYPTION,
        parameters: Some(null),
    })
}
