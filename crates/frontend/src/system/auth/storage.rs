use contracts::system::auth::UserRecord;
use web_sys::window;

/// Bearer token, stored verbatim.
pub const TOKEN_KEY: &str = "auth_token";
/// Serialized [`UserRecord`] the token belongs to.
pub const USER_KEY: &str = "auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the bearer token from localStorage
pub fn read_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Persist the credential pair. Both keys are written in the same
/// synchronous block, so a stored token always has a stored user next to it.
pub fn save_credentials(user: &UserRecord) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    if let Ok(encoded) = encode_user(user) {
        let _ = storage.set_item(TOKEN_KEY, &user.token);
        let _ = storage.set_item(USER_KEY, &encoded);
    }
}

/// Load the credential pair. A half-present or malformed pair is cleared and
/// reported as absent, so readers never observe a token without its user.
pub fn load_credentials() -> Option<UserRecord> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage.get_item(USER_KEY).ok().flatten();
    match classify_pair(token, user) {
        PairState::Present(user) => Some(user),
        PairState::Absent => None,
        PairState::Broken => {
            clear_credentials();
            None
        }
    }
}

enum PairState {
    Present(UserRecord),
    Absent,
    /// One key without the other, or an undecodable user blob.
    Broken,
}

fn classify_pair(token: Option<String>, user: Option<String>) -> PairState {
    match (token, user) {
        (Some(_), Some(encoded)) => match decode_user(&encoded) {
            Some(user) => PairState::Present(user),
            None => PairState::Broken,
        },
        (None, None) => PairState::Absent,
        _ => PairState::Broken,
    }
}

/// Remove the credential pair, both keys in the same synchronous block.
pub fn clear_credentials() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Wipe every key this origin has stored. The 401 teardown uses this rather
/// than [`clear_credentials`]: cached drafts and filters must not survive an
/// invalid session either.
pub fn clear_all() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}

fn encode_user(user: &UserRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(user)
}

fn decode_user(encoded: &str) -> Option<UserRecord> {
    serde_json::from_str(encoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::StaffRole;

    fn user() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Asha".to_string(),
            email: "asha@tradeware.example".to_string(),
            mobile: "9000000000".to_string(),
            role: StaffRole::Admin,
            is_active: true,
            token: "tok-abc".to_string(),
        }
    }

    #[test]
    fn user_codec_round_trips() {
        let encoded = encode_user(&user()).unwrap();
        assert_eq!(decode_user(&encoded), Some(user()));
    }

    #[test]
    fn malformed_records_decode_to_none() {
        assert_eq!(decode_user("not json"), None);
        assert_eq!(decode_user(r#"{"id":1}"#), None);
        assert_eq!(decode_user(""), None);
    }

    #[test]
    fn an_intact_pair_is_present() {
        let encoded = encode_user(&user()).unwrap();
        match classify_pair(Some("tok-abc".to_string()), Some(encoded)) {
            PairState::Present(loaded) => assert_eq!(loaded, user()),
            _ => panic!("intact pair should load"),
        }
    }

    #[test]
    fn a_half_present_pair_is_broken() {
        assert!(matches!(
            classify_pair(Some("tok-abc".to_string()), None),
            PairState::Broken
        ));
        let encoded = encode_user(&user()).unwrap();
        assert!(matches!(
            classify_pair(None, Some(encoded)),
            PairState::Broken
        ));
    }

    #[test]
    fn an_undecodable_user_breaks_the_pair() {
        assert!(matches!(
            classify_pair(Some("tok-abc".to_string()), Some("not json".to_string())),
            PairState::Broken
        ));
    }

    #[test]
    fn an_empty_store_is_absent() {
        assert!(matches!(classify_pair(None, None), PairState::Absent));
    }
}
