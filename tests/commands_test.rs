//! Integration tests for command helpers

use pak_players::{
    commands::{build_api_client, resolve_base_url, resolve_token, ClientOptions},
    PakError, BASE_URL_ENV_VAR, TOKEN_ENV_VAR,
};

#[test]
fn test_resolve_base_url_from_option() {
    let result = resolve_base_url(Some("https://example.com/api/".to_string()));
    assert_eq!(result.unwrap(), "https://example.com/api/");
}

#[test]
fn test_resolve_token_from_option() {
    assert_eq!(resolve_token(Some("abc".to_string())).as_deref(), Some("abc"));
}

#[test]
fn test_build_api_client_from_options() {
    let options = ClientOptions {
        base_url: Some("https://example.com/api".to_string()),
        token: Some("abc".to_string()),
        timeout_secs: 5,
        memory: true,
    };

    let client = build_api_client(&options).unwrap();
    assert_eq!(client.base_url().as_str(), "https://example.com/api/");
}

// Env-dependent cases share one test so they never race each other
#[test]
fn test_resolution_from_environment() {
    std::env::remove_var(BASE_URL_ENV_VAR);
    std::env::remove_var(TOKEN_ENV_VAR);

    match resolve_base_url(None) {
        Err(PakError::MissingBaseUrl { env_var }) => assert_eq!(env_var, BASE_URL_ENV_VAR),
        other => panic!("Expected MissingBaseUrl error, got {:?}", other),
    }
    assert_eq!(resolve_token(None), None);

    std::env::set_var(BASE_URL_ENV_VAR, "http://localhost:8000/api/");
    std::env::set_var(TOKEN_ENV_VAR, "env-token");
    assert_eq!(resolve_base_url(None).unwrap(), "http://localhost:8000/api/");
    assert_eq!(resolve_token(None).as_deref(), Some("env-token"));

    // explicit flag wins over the environment
    assert_eq!(
        resolve_base_url(Some("https://override.example/".to_string())).unwrap(),
        "https://override.example/"
    );

    std::env::set_var(BASE_URL_ENV_VAR, "   ");
    assert!(resolve_base_url(None).is_err());

    std::env::remove_var(BASE_URL_ENV_VAR);
    std::env::remove_var(TOKEN_ENV_VAR);
}
