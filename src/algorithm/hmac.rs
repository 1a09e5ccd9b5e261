use crate::algorithm::Digest;
use crate::error::{Error, Result};
use crate::limits::MAX_DECODED_SIGNATURE_SIZE;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Compute the raw MAC over `data`
fn mac(digest: Digest, secret: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let invalid = |e: InvalidLength| Error::KeyInvalid(format!("HMAC secret rejected: {e}"));
    let bytes = match digest {
        Digest::Sha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret).map_err(invalid)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Digest::Sha384 => {
            let mut mac = Hmac::<Sha384>::new_from_slice(secret).map_err(invalid)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Digest::Sha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret).map_err(invalid)?;
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    };
    Ok(bytes)
}

/// Sign `data`, returning the Base64URL signature segment
pub(crate) fn sign(digest: Digest, secret: &[u8], data: &[u8]) -> Result<String> {
    mac(digest, secret, data).map(|bytes| base64url::encode_bytes(&bytes))
}

/// Verify a Base64URL signature segment with constant-time comparison
pub(crate) fn verify(digest: Digest, secret: &[u8], data: &[u8], signature: &str) -> bool {
    let Ok(provided) = base64url::decode_bytes_bounded(signature, MAX_DECODED_SIGNATURE_SIZE)
    else {
        return false;
    };
    let Ok(expected) = mac(digest, secret, data) else {
        return false;
    };

    provided.len() == expected.len() && constant_time_eq(&provided, &expected)
}
