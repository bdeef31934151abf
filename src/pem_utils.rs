use crate::error::CsrGenError;

/// Convert DER-encoded data into a PEM-encoded string with the provided label.
pub fn der_to_pem(der: &[u8], label: &str) -> String {
    let pem = pem::Pem::new(label, der);
    pem::encode_config(&pem, pem::EncodeConfig::new())
}

/// Convert a PEM-encoded string to DER-encoded bytes.
pub fn pem_to_der(pem_str: &str) -> Result<Vec<u8>, CsrGenError> {
    let pem = pem::parse(pem_str)?;
    Ok(pem.contents().to_vec())
}

/// Convert a PEM-encoded string to DER-encoded bytes, requiring the block
/// to carry the expected label.
pub fn pem_to_der_checked(pem_str: &str, expected_label: &str) -> Result<Vec<u8>, CsrGenError> {
    let pem = pem::parse(pem_str)?;
    if pem.tag() != expected_label {
        return Err(CsrGenError::DecodingError(format!(
            "expected {} PEM block, found {}",
            expected_label,
            pem.tag()
        )));
    }
    Ok(pem.contents().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pem_round_trip() {
        let der = vec![0x30, 0x03, 0x02, 0x01, 0x2a];
        let pem_str = der_to_pem(&der, "CERTIFICATE REQUEST");
        assert!(pem_str.starts_with("-----BEGIN CERTIFICATE REQUEST-----"));
        assert_eq!(pem_to_der(&pem_str).unwrap(), der);
        assert_eq!(
            pem_to_der_checked(&pem_str, "CERTIFICATE REQUEST").unwrap(),
            der
        );
    }

    #[test]
    fn test_label_mismatch_is_rejected() {
        let pem_str = der_to_pem(&[0x02, 0x01, 0x00], "RSA PRIVATE KEY");
        let err = pem_to_der_checked(&pem_str, "CERTIFICATE REQUEST").unwrap_err();
        assert!(matches!(err, CsrGenError::DecodingError(_)));
    }
}
