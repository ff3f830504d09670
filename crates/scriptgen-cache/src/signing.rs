//! Query-string authenticated S3 URLs (AWS signature version 2).
//!
//! The casher tool downloads and uploads archives with plain `curl`, so every
//! URL carries its own credentials: the access key id, an absolute expiry and
//! an HMAC-SHA1 signature over the request.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use scriptgen_core::S3Options;
use sha1::Sha1;
use std::fmt;
use url::form_urlencoded;

type HmacSha1 = Hmac<Sha1>;

const S3_ENDPOINT: &str = "https://s3.amazonaws.com";

/// HTTP verb of a signed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Download an archive (fetch).
    Get,
    /// Upload an archive (push).
    Put,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to be signed: verb, archive path inside the bucket and the
/// absolute expiry in Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub verb: Verb,
    /// Path inside the bucket, starting with `/`.
    pub resource: String,
    pub expires: i64,
}

impl SignedRequest {
    pub fn new(verb: Verb, resource: impl Into<String>, expires: i64) -> Self {
        Self {
            verb,
            resource: resource.into(),
            expires,
        }
    }
}

/// Signs requests against one bucket with one key pair.
#[derive(Debug, Clone)]
pub struct UrlSigner {
    s3: S3Options,
}

impl UrlSigner {
    pub fn new(s3: S3Options) -> Self {
        Self { s3 }
    }

    pub fn bucket(&self) -> &str {
        &self.s3.bucket
    }

    /// String covered by the signature.
    pub fn string_to_sign(&self, request: &SignedRequest) -> String {
        format!(
            "{}\n\n\n{}\n/{}{}",
            request.verb, request.expires, self.s3.bucket, request.resource
        )
    }

    /// Base64 HMAC-SHA1 of the request, not yet URL-encoded.
    pub fn signature(&self, request: &SignedRequest) -> String {
        let mut mac = match HmacSha1::new_from_slice(self.s3.secret_access_key.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => unreachable!("HMAC accepts keys of any length"),
        };
        mac.update(self.string_to_sign(request).as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }

    /// Full URL with `AWSAccessKeyId`, `Expires` and `Signature` query parameters.
    pub fn url(&self, request: &SignedRequest) -> String {
        let signature: String =
            form_urlencoded::byte_serialize(self.signature(request).as_bytes()).collect();

        format!(
            "{}/{}{}?AWSAccessKeyId={}&Expires={}&Signature={}",
            S3_ENDPOINT,
            self.s3.bucket,
            request.resource,
            self.s3.access_key_id,
            request.expires,
            signature
        )
    }
}
