/// Bearer token the mock backend expects on authenticated endpoints.
pub static TEST_TOKEN: &str = "test-session-token";
pub static TEST_USER_ID: &str = "user-1";
pub static TEST_ORGANIZER_ID: &str = "organizer-1";
