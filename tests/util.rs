use csrgen::key::{KeyPair, RSA_KEY_SIZE_BITS};
use csrgen::request::SigningRequest;
use csrgen::request::params::{DistinguishedName, RequestParams};

pub const HOSTNAME: &str = "example.com";

pub fn request_params(dns_names: &[&str]) -> RequestParams {
    let subject = DistinguishedName::builder()
        .common_name(HOSTNAME.to_string())
        .build();

    RequestParams::builder()
        .subject(subject)
        .dns_names(dns_names.iter().map(|name| name.to_string()).collect())
        .build()
}

pub fn generate_signed_request(dns_names: &[&str]) -> (KeyPair, SigningRequest) {
    let key_pair = KeyPair::generate(RSA_KEY_SIZE_BITS).unwrap();
    let request = SigningRequest::build(&request_params(dns_names), &key_pair).unwrap();
    (key_pair, request)
}
