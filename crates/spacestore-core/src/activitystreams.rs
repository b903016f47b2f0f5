//! ActivityStreams media types used by collection representations

/// Media type requested for and served by collection fetches
pub const ACTIVITYSTREAMS_MEDIA_TYPE: &str =
    "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\"";

/// Variant without a space after the first `;`.
///
/// Some producers emit this form; it is accepted as equivalent on read.
/// Compatibility shim, not a protocol guarantee. @todo find where the
/// whitespace-less variant originates.
pub const ACTIVITYSTREAMS_MEDIA_TYPE_SANS_WHITESPACE: &str =
    "application/ld+json;profile=\"https://www.w3.org/ns/activitystreams\"";

/// Check whether the media type is a recognized ActivityStreams media type
pub fn is_activitystreams_media_type(t: &str) -> bool {
    matches!(
        t,
        ACTIVITYSTREAMS_MEDIA_TYPE | ACTIVITYSTREAMS_MEDIA_TYPE_SANS_WHITESPACE
    )
}
