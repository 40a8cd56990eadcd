//! Public framing API, one entry point per channel.
//!
//! Every input is reduced to its digits first, so formatted values such as
//! `"010-1234-5678"` can be passed straight through. The returned fragment
//! is pure invisible text, safe to concatenate anywhere into an outbound
//! message; where that message goes is the caller's business.

use crate::bcd::clean_digits;
use crate::channel::{ANON_INVITATION, METADATA, NAVER_POST, PRIMARY, SHORT_DECIMAL};

/// Fixed second field of anonymous-invitation frames. The channel carries
/// only one real value; the dummy keeps the two-field frame shape.
pub const ANON_DUMMY: &str = "175";

/// Frames a phone number and survey id into the primary channel.
pub fn encode_primary(phone_number: &str, survey_id: &str) -> String {
    PRIMARY.frame(&[&clean_digits(phone_number), &clean_digits(survey_id)])
}

/// Frames a metadata type number and record uid.
pub fn encode_metadata(type_number: &str, uid: &str) -> String {
    METADATA.frame(&[&clean_digits(type_number), &clean_digits(uid)])
}

/// Frames a Naver post number and referrer tracking id.
pub fn encode_naver_post(post_number: &str, referrer: &str) -> String {
    NAVER_POST.frame(&[&clean_digits(post_number), &clean_digits(referrer)])
}

/// Frames an anonymous-invitation proxy id; the second field is the fixed
/// [`ANON_DUMMY`].
pub fn encode_anon_invitation(proxy_id: &str) -> String {
    ANON_INVITATION.frame(&[&clean_digits(proxy_id), ANON_DUMMY])
}

/// Frames a single decimal value into the short-decimal channel (digit
/// alphabet, one carrier per digit).
pub fn encode_short_decimal(value: &str) -> String {
    SHORT_DECIMAL.frame(&[&clean_digits(value)])
}
