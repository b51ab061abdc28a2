use flash_core::auth::Credential;
use wasm_bindgen::prelude::*;

/// Returns the version of the flash-wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    flash_core::version().to_string()
}

/// Username carried by a bearer token, or `undefined` if it cannot be decoded
/// or names no subject.
///
/// Lets page code label the signed-in user without a round trip.
#[wasm_bindgen(js_name = credentialSubject)]
pub fn credential_subject(token: &str) -> Option<String> {
    Credential::parse(token)
        .and_then(|c| c.claims())
        .ok()
        .and_then(|claims| claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_is_read_from_claims() {
        // {"alg":"HS256"} . {"sub":"alice"} . sig
        let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhbGljZSJ9.c2ln";
        assert_eq!(credential_subject(token).as_deref(), Some("alice"));
    }

    #[test]
    fn undecodable_token_has_no_subject() {
        assert_eq!(credential_subject("not-a-token"), None);
        assert_eq!(credential_subject(""), None);
        // {"alg":"HS256"} . {"exp":1} . sig
        assert_eq!(credential_subject("eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjF9.c2ln"), None);
    }
}
