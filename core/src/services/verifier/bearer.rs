//! Bearer-style credential extraction from an authorization header value.

use crate::errors::AuthError;

/// Scheme keyword expected in the authorization header
pub const AUTH_SCHEME: &str = "Token";

/// Extracts the credential from an authorization header value
///
/// - `None` or a blank header means no credential was offered; the caller
///   may fall through to another authentication method.
/// - A wrong scheme keyword, or anything other than exactly
///   `<scheme> <credential>`, is a hard failure.
pub fn extract_credential(header: Option<&str>) -> Result<Option<&str>, AuthError> {
    let Some(raw) = header else {
        return Ok(None);
    };

    let mut parts = raw.split_whitespace();
    let Some(scheme) = parts.next() else {
        // Blank header: treated the same as no header at all
        return Ok(None);
    };

    if !scheme.eq_ignore_ascii_case(AUTH_SCHEME) {
        return Err(AuthError::InvalidAuthorizationHeader);
    }

    let Some(credential) = parts.next() else {
        return Err(AuthError::InvalidAuthorizationHeader);
    };

    if parts.next().is_some() {
        return Err(AuthError::InvalidAuthorizationHeader);
    }

    Ok(Some(credential))
}
